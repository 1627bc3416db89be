//! Extraction engine.
//!
//! ```text
//! input ── lowercase ── TriggerInfo::scan ──┐          (trigger.rs)
//!                                           │  gate locator rules by bucket
//!                                           v
//!                                  Locator::run           (locator.rs)
//!                                    - every match of every active rule
//!                                    - longest match wins
//!                                           │ raw phrase
//!                                           v
//!                                  dispatch::extract      (dispatch.rs)
//!                                    - explicit day+month?  ─▶ range strategies
//!                                    - bare month?          ─▶ whole month
//!                                    - otherwise            ─▶ range strategies
//!                                           │
//!                                           v
//!                                      Extraction
//! ```
//!
//! Range strategies live in `rules/ranges.rs` and are tried in order; the
//! first one that recognises the phrase decides the result. A strategy that
//! recognises a phrase but cannot build a date reports an
//! [`UnresolvedPhrase`](crate::UnresolvedPhrase), and the dispatcher replaces
//! it with the anchor date. That substitution happens in one place only.
//!
//! Set `RUST_LOG=tarikh=debug` to trace rule selection and fallbacks.

#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/locator.rs"]
mod locator;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use dispatch::{Resolver, Strategy, extract, normalize_range};
pub(crate) use locator::Locator;
pub(crate) use trigger::BucketMask;
