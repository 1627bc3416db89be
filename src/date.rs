use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Display format shared by every resolved date, e.g. `24 Nov, 2025`.
pub const DISPLAY_FORMAT: &str = "%d %b, %Y";

/// A calendar date rendered as `DD Mon, YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedDate(NaiveDate);

impl ResolvedDate {
    pub fn new(date: NaiveDate) -> Self {
        ResolvedDate(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parse a string previously produced by [`ResolvedDate`]'s `Display`.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, DISPLAY_FORMAT).ok().map(ResolvedDate)
    }
}

impl From<NaiveDate> for ResolvedDate {
    fn from(date: NaiveDate) -> Self {
        ResolvedDate(date)
    }
}

impl fmt::Display for ResolvedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl Serialize for ResolvedDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of [`crate::extract_dates`].
///
/// `raw` is the substring of the lower-cased input that was judged to carry
/// the date; it is empty when nothing was found, in which case both dates
/// default to the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateResult {
    pub raw: String,
    pub start_date: ResolvedDate,
    pub end_date: ResolvedDate,
}

impl DateResult {
    pub(crate) fn new(raw: impl Into<String>, span: Span) -> Self {
        DateResult { raw: raw.into(), start_date: span.start.into(), end_date: span.end.into() }
    }
}

/// A resolved `(start, end)` pair plus the name of the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub strategy: &'static str,
}

impl Span {
    pub fn new(start: NaiveDate, end: NaiveDate, strategy: &'static str) -> Self {
        Span { start, end, strategy }
    }

    pub fn single(date: NaiveDate, strategy: &'static str) -> Self {
        Span { start: date, end: date, strategy }
    }
}
