//! Error types for phrase resolution.
//!
//! None of these escape the public API: every operation substitutes a date
//! (usually the anchor) when resolution fails. They exist so resolver stages
//! can report *why* a fragment was dropped before the dispatcher recovers.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedPhrase {
    #[error("unparseable date fragment: {fragment:?}")]
    Unparseable { fragment: String },

    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("date shift of {days} days leaves the supported calendar range")]
    OutOfRange { days: u64 },
}

impl UnresolvedPhrase {
    pub(crate) fn unparseable(fragment: impl Into<String>) -> Self {
        UnresolvedPhrase::Unparseable { fragment: fragment.into() }
    }
}

pub type Result<T> = std::result::Result<T, UnresolvedPhrase>;
