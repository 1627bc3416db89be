//! Rule-based extraction of date phrases from code-mixed English/Hinglish text.
//!
//! ```
//! use chrono::NaiveDate;
//! use tarikh::{Context, Options, extract_dates_with};
//!
//! let ctx = Context::at(NaiveDate::from_ymd_opt(2025, 11, 20).unwrap());
//! let out = extract_dates_with("kal se friday tak chutti chahiye", &ctx, &Options::default());
//!
//! assert_eq!(out.raw, "kal se friday");
//! assert_eq!(out.start_date.to_string(), "21 Nov, 2025");
//! assert_eq!(out.end_date.to_string(), "21 Nov, 2025");
//! ```

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod calendar;
mod date;
mod engine;
mod error;
mod rules;

pub use api::{
    Clock, Context, ExtractionDetails, ExtractionVerbose, FixedClock, Mode, Options, PhraseCandidate, SystemClock,
    extract_dates, extract_dates_verbose_with, extract_dates_with, locate, normalize_range, normalize_range_with,
    normalize_single, normalize_single_with,
};
pub use calendar::{CalendarParser, DateOrder, EnglishCalendar};
pub use date::{DISPLAY_FORMAT, DateResult, ResolvedDate};
pub use error::{Result, UnresolvedPhrase};

use crate::engine::BucketMask;

// --- Internal types ---------------------------------------------------------

/// Surface shape a locator rule recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternClass {
    /// `24 november to 27 november`
    DayRange,
    /// `24 november`, `november 24`, `24-nov`
    DayMonth,
    /// `28/11/2025`, `28-11`
    Numeric,
    /// `kal se friday`, `20 se 25`, `12 dec se 15 dec`
    ConnectorRange,
    /// `3 din`, `next 2 days`
    Duration,
    /// `aaj`, `kal`, `parso`
    RelativeDay,
    /// `friday`
    Weekday,
}

impl PatternClass {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternClass::DayRange => "day-range",
            PatternClass::DayMonth => "day-month",
            PatternClass::Numeric => "numeric",
            PatternClass::ConnectorRange => "connector-range",
            PatternClass::Duration => "duration",
            PatternClass::RelativeDay => "relative-day",
            PatternClass::Weekday => "weekday",
        }
    }
}

/// A locator rule: a name, the class it belongs to, a regex run against the
/// lower-cased input, and the trigger buckets the input must carry before the
/// regex is worth running.
pub(crate) struct Rule {
    pub name: &'static str,
    pub class: PatternClass,
    pub pattern: &'static Regex,
    pub buckets: BucketMask,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("class", &self.class)
            .field("pattern", &self.pattern.as_str())
            .field("buckets", &self.buckets)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// One regex hit in the lower-cased input, before tie-breaking.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub range: Range,
    pub rule_name: &'static str,
    pub class: PatternClass,
    /// Matched text, untrimmed.
    pub body: String,
}

impl Candidate {
    /// Length used for the longest-match tie-break.
    pub fn len(&self) -> usize {
        self.body.chars().count()
    }
}
