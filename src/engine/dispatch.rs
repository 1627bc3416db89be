//! Normalizer dispatch.
//!
//! `extract` decides *how* a located phrase is read:
//!
//! ```text
//! text has "<d> <month>" / "<month> <d>" ──yes──▶ normalize_range(raw)
//!        │ no
//!        v
//! text has a bare month word ───────────yes──▶ whole calendar month
//!        │ no
//!        v
//! normalize_range(raw)   (raw may be empty → anchor..anchor)
//! ```
//!
//! `normalize_range` walks the ordered [`Strategy`] list from
//! `rules/ranges.rs`. Each strategy answers `None` (not mine), `Some(Ok)` or
//! `Some(Err)`; the error case is the only place an anchor date is
//! substituted for a failed resolution.

use chrono::NaiveDate;
use tracing::debug;

use super::locator::{Locator, LocatorRun};
use crate::calendar::{CalendarParser, DateOrder};
use crate::date::Span;
use crate::error::Result;
use crate::rules::{months, ranges, single};
use crate::{Mode, Rule};

/// Per-call resolution environment: the anchor date plus the calendar parser.
pub(crate) struct Resolver<'a> {
    pub anchor: NaiveDate,
    pub order: DateOrder,
    pub calendar: &'a dyn CalendarParser,
}

impl<'a> Resolver<'a> {
    pub fn new(anchor: NaiveDate, order: DateOrder, calendar: &'a dyn CalendarParser) -> Self {
        Resolver { anchor, order, calendar }
    }

    pub fn try_single(&self, phrase: &str) -> Result<NaiveDate> {
        single::resolve_single(phrase, self)
    }

    /// Single-date resolution with the anchor as fallback.
    pub fn single(&self, phrase: &str) -> NaiveDate {
        self.try_single(phrase).unwrap_or_else(|err| {
            debug!(phrase, error = %err, "single date fell back to anchor");
            self.anchor
        })
    }

    /// Calendar-parser lookup with an explicit fallback date.
    pub fn parse_or(&self, text: &str, fallback: NaiveDate) -> NaiveDate {
        self.calendar.parse(text, self.anchor).unwrap_or_else(|err| {
            debug!(fragment = text, error = %err, %fallback, "calendar parse fell back");
            fallback
        })
    }
}

/// A named range strategy.
pub(crate) struct Strategy {
    pub name: &'static str,
    pub resolve: fn(&str, &Resolver<'_>) -> Option<Result<Span>>,
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).field("resolve", &"<function>").finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RangeOutcome {
    pub span: Span,
    /// True when the anchor was substituted for an unresolved phrase.
    pub fell_back: bool,
}

pub(crate) fn normalize_range(phrase: &str, resolver: &Resolver<'_>) -> RangeOutcome {
    let phrase = phrase.trim().to_lowercase();

    for strategy in ranges::STRATEGIES {
        match (strategy.resolve)(&phrase, resolver) {
            None => continue,
            Some(Ok(span)) => {
                debug!(strategy = strategy.name, start = %span.start, end = %span.end, "range resolved");
                return RangeOutcome { span, fell_back: false };
            }
            Some(Err(err)) => {
                debug!(strategy = strategy.name, error = %err, "range unresolved; using anchor");
                return RangeOutcome { span: Span::single(resolver.anchor, strategy.name), fell_back: true };
            }
        }
    }

    // The last strategy always answers; this only guards an empty list.
    RangeOutcome { span: Span::single(resolver.anchor, "anchor"), fell_back: true }
}

/// Everything [`extract`] decided for one input.
#[derive(Debug, Clone)]
pub(crate) struct Extraction {
    pub raw: String,
    pub span: Span,
    pub mode: Mode,
    pub fell_back: bool,
    pub located: LocatorRun,
}

pub(crate) fn extract(text: &str, rules: &[Rule], resolver: &Resolver<'_>) -> Extraction {
    let located = Locator::new(rules).run(text);
    let raw = located.raw().to_string();

    if months::has_explicit_day_month(&located.lower) {
        debug!(raw = %raw, "explicit day and month present");
        let outcome = normalize_range(&raw, resolver);
        return Extraction {
            raw,
            span: outcome.span,
            mode: Mode::ExplicitDayMonth,
            fell_back: outcome.fell_back,
            located,
        };
    }

    if let Some((word, resolved)) = months::bare_month(&located.lower, resolver.anchor) {
        debug!(month = %word, "bare month reference");
        let (span, fell_back) = match resolved {
            Ok(span) => (span, false),
            Err(err) => {
                debug!(error = %err, "month span unresolved; using anchor");
                (Span::single(resolver.anchor, months::MONTH_ONLY), true)
            }
        };
        return Extraction { raw: word, span, mode: Mode::MonthOnly, fell_back, located };
    }

    let outcome = normalize_range(&raw, resolver);
    Extraction { raw, span: outcome.span, mode: Mode::Range, fell_back: outcome.fell_back, located }
}
