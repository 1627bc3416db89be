use crate::calendar::{DateOrder, EnglishCalendar};
use crate::date::{DateResult, ResolvedDate};
use crate::engine::{self, Resolver};
use crate::{PatternClass, Rule};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::phrases::get);

/// Source of "today".
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local date on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Extraction context.
///
/// Holds the anchor date every relative expression (`kal`, `parso`, weekday
/// names, durations) is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub anchor: NaiveDate,
}

impl Context {
    pub fn at(anchor: NaiveDate) -> Self {
        Context { anchor }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Context { anchor: clock.today() }
    }
}

impl Default for Context {
    /// Anchored to the system's local date at the time of the call.
    fn default() -> Self {
        Context::from_clock(&SystemClock)
    }
}

/// Options that affect resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// How `04/02`-style numbers are read.
    pub order: DateOrder,
}

/// Which reading [`extract_dates_with`] chose for the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The text pairs a day number with a month name; range strategies ran.
    ExplicitDayMonth,
    /// A month name without a day; the whole month was returned.
    MonthOnly,
    /// Everything else; range strategies ran on the located phrase.
    Range,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::ExplicitDayMonth => "explicit-day-month",
            Mode::MonthOnly => "month-only",
            Mode::Range => "range",
        }
    }
}

/// One locator match. `start`/`end` are byte offsets into the lower-cased input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCandidate {
    pub rule: String,
    pub class: PatternClass,
    pub start: usize,
    pub end: usize,
    pub body: String,
    /// Whether this candidate became `raw`.
    pub selected: bool,
}

/// Additional details returned by [`extract_dates_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractionDetails {
    /// Every locator match, in discovery order.
    pub candidates: Vec<PhraseCandidate>,
    /// Locator rules whose trigger buckets were present.
    pub active_rules: Vec<String>,
    pub mode: Mode,
    /// Name of the strategy that produced the dates.
    pub strategy: String,
    /// True when the anchor date was substituted for an unresolved phrase.
    pub fell_back: bool,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct ExtractionVerbose {
    pub result: DateResult,
    pub details: ExtractionDetails,
}

/// Extract a date phrase from `text`, anchored to today's local date.
///
/// # Example
/// ```
/// let out = tarikh::extract_dates("just checking");
/// assert_eq!(out.raw, "");
/// assert_eq!(out.start_date, out.end_date);
/// ```
pub fn extract_dates(text: &str) -> DateResult {
    extract_dates_with(text, &Context::default(), &Options::default())
}

/// Extract a date phrase from `text` with an explicit anchor and options.
///
/// Never fails: when nothing can be resolved both dates are the anchor.
pub fn extract_dates_with(text: &str, context: &Context, options: &Options) -> DateResult {
    let calendar = EnglishCalendar::new(options.order);
    let resolver = Resolver::new(context.anchor, options.order, &calendar);
    let run = engine::extract(text, &DEFAULT_RULES, &resolver);
    DateResult::new(run.raw, run.span)
}

/// Like [`extract_dates_with`], plus the locator candidates and dispatch decisions.
pub fn extract_dates_verbose_with(text: &str, context: &Context, options: &Options) -> ExtractionVerbose {
    let started = Instant::now();
    let calendar = EnglishCalendar::new(options.order);
    let resolver = Resolver::new(context.anchor, options.order, &calendar);
    let run = engine::extract(text, &DEFAULT_RULES, &resolver);
    let elapsed = started.elapsed();

    let candidates = run
        .located
        .candidates
        .iter()
        .enumerate()
        .map(|(idx, c)| PhraseCandidate {
            rule: c.rule_name.to_string(),
            class: c.class,
            start: c.range.start,
            end: c.range.end,
            body: c.body.clone(),
            selected: run.located.best == Some(idx),
        })
        .collect();

    let details = ExtractionDetails {
        candidates,
        active_rules: run.located.active_rules.iter().map(|s| s.to_string()).collect(),
        mode: run.mode,
        strategy: run.span.strategy.to_string(),
        fell_back: run.fell_back,
        elapsed,
    };

    ExtractionVerbose { result: DateResult::new(run.raw, run.span), details }
}

/// The substring of lower-cased `text` most likely to express a date, or `""`.
pub fn locate(text: &str) -> String {
    engine::Locator::new(&DEFAULT_RULES).run(text).raw().to_string()
}

/// Resolve `phrase` to one date, anchored to today's local date.
pub fn normalize_single(phrase: &str) -> ResolvedDate {
    normalize_single_with(phrase, &Context::default(), &Options::default())
}

/// Resolve `phrase` to one date; the anchor is returned when nothing matches.
pub fn normalize_single_with(phrase: &str, context: &Context, options: &Options) -> ResolvedDate {
    let calendar = EnglishCalendar::new(options.order);
    let resolver = Resolver::new(context.anchor, options.order, &calendar);
    resolver.single(phrase).into()
}

/// Resolve `phrase` to a `(start, end)` pair, anchored to today's local date.
pub fn normalize_range(phrase: &str) -> (ResolvedDate, ResolvedDate) {
    normalize_range_with(phrase, &Context::default(), &Options::default())
}

/// Resolve `phrase` to a `(start, end)` pair with an explicit anchor.
pub fn normalize_range_with(phrase: &str, context: &Context, options: &Options) -> (ResolvedDate, ResolvedDate) {
    let calendar = EnglishCalendar::new(options.order);
    let resolver = Resolver::new(context.anchor, options.order, &calendar);
    let outcome = engine::normalize_range(phrase, &resolver);
    (outcome.span.start.into(), outcome.span.end.into())
}
