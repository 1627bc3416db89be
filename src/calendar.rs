//! General-purpose calendar-text parsing.
//!
//! The resolvers in `rules/` handle the code-mixed vocabulary (`kal`, `parso`,
//! connector ranges, durations) themselves and hand anything else to a
//! [`CalendarParser`]. The contract is deliberately small: a string in, either
//! a date or an [`UnresolvedPhrase`] out.
//!
//! ```text
//! text ──canonicalize months──┬─ "<d> <month> [yyyy]"  ─┐
//!                             ├─ "<month> <d> [yyyy]"  ─┤
//!                             ├─ "dd/mm[/yy]"           ─┼─▶ NaiveDate
//!                             ├─ "<month>" / "<d>"      ─┤
//!                             └─ chrono-english ────────┘
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::trace;

use crate::error::{Result, UnresolvedPhrase};
use crate::rules::helpers::{year_from, ymd};
use crate::rules::vocab::{canonicalize_months, month_number};

/// Parses free-form calendar text relative to an anchor date.
pub trait CalendarParser {
    fn parse(&self, text: &str, anchor: NaiveDate) -> Result<NaiveDate>;
}

impl<F> CalendarParser for F
where
    F: Fn(&str, NaiveDate) -> Result<NaiveDate>,
{
    fn parse(&self, text: &str, anchor: NaiveDate) -> Result<NaiveDate> {
        self(text, anchor)
    }
}

/// How ambiguous numeric dates such as `04/02` are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    /// `04/02` is the 4th of February.
    #[default]
    DayFirst,
    /// `04/02` is April 2nd.
    MonthFirst,
}

impl DateOrder {
    fn dialect(self) -> chrono_english::Dialect {
        match self {
            DateOrder::DayFirst => chrono_english::Dialect::Uk,
            DateOrder::MonthFirst => chrono_english::Dialect::Us,
        }
    }
}

/// Default parser: explicit month/day forms first, then `chrono-english`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCalendar {
    order: DateOrder,
}

impl EnglishCalendar {
    pub fn new(order: DateOrder) -> Self {
        EnglishCalendar { order }
    }

    fn parse_explicit(&self, text: &str, anchor: NaiveDate) -> Option<Result<NaiveDate>> {
        if let Some(caps) =
            regex!(r"^([0-9]{1,2})(?:st|nd|rd|th)?[\s/-]+([a-z]+)\.?(?:,?\s*([0-9]{4}))?$").captures(text)
        {
            if let Some(month) = month_number(&caps[2]) {
                let day = caps[1].parse().ok()?;
                let year = caps.get(3).and_then(|y| y.as_str().parse().ok()).unwrap_or(anchor.year());
                return Some(ymd(year, month, day));
            }
        }

        if let Some(caps) = regex!(r"^([a-z]+)\.?\s+([0-9]{1,2})(?:st|nd|rd|th)?(?:,?\s*([0-9]{4}))?$").captures(text) {
            if let Some(month) = month_number(&caps[1]) {
                let day = caps[2].parse().ok()?;
                let year = caps.get(3).and_then(|y| y.as_str().parse().ok()).unwrap_or(anchor.year());
                return Some(ymd(year, month, day));
            }
        }

        if let Some(caps) = regex!(r"^([0-9]{1,2})[/-]([0-9]{1,2})(?:[/-]([0-9]{2}|[0-9]{4}))?$").captures(text) {
            let first: u32 = caps[1].parse().ok()?;
            let second: u32 = caps[2].parse().ok()?;
            let (day, month) = match self.order {
                DateOrder::DayFirst => (first, second),
                DateOrder::MonthFirst => (second, first),
            };
            let year = match caps.get(3) {
                Some(y) => year_from(y.as_str().parse().ok()?),
                None => anchor.year(),
            };
            return Some(ymd(year, month, day));
        }

        if let Some(month) = month_number(text) {
            return Some(ymd(anchor.year(), month, 1));
        }

        if regex!(r"^[0-9]{1,2}$").is_match(text) {
            let day = text.parse().ok()?;
            return Some(ymd(anchor.year(), anchor.month(), day));
        }

        None
    }
}

/// chrono-english slices its tokens by byte offset and unwraps its own date
/// arithmetic, so it only ever sees ASCII text with numbers of at most four
/// digits.
fn delegable(text: &str) -> bool {
    text.is_ascii() && !regex!(r"[0-9]{5,}").is_match(text)
}

impl CalendarParser for EnglishCalendar {
    fn parse(&self, text: &str, anchor: NaiveDate) -> Result<NaiveDate> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return Err(UnresolvedPhrase::unparseable(text));
        }

        let text = canonicalize_months(&text);
        if let Some(parsed) = self.parse_explicit(&text, anchor) {
            return parsed;
        }

        if !delegable(&text) {
            trace!(fragment = %text, "not handed to chrono-english");
            return Err(UnresolvedPhrase::unparseable(text));
        }

        let midnight = NaiveTime::from_hms_opt(0, 0, 0).ok_or_else(|| UnresolvedPhrase::unparseable(&*text))?;
        let base = Utc.from_utc_datetime(&anchor.and_time(midnight));
        match chrono_english::parse_date_string(&text, base, self.order.dialect()) {
            Ok(parsed) => Ok(parsed.date_naive()),
            Err(err) => {
                trace!(fragment = %text, error = ?err, "calendar parser gave up");
                Err(UnresolvedPhrase::unparseable(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn explicit_day_month_uses_anchor_year() {
        let parser = EnglishCalendar::default();
        let anchor = date(2025, 11, 20);
        assert_eq!(parser.parse("24 november", anchor), Ok(date(2025, 11, 24)));
        assert_eq!(parser.parse("24-nov", anchor), Ok(date(2025, 11, 24)));
        assert_eq!(parser.parse("december 5", anchor), Ok(date(2025, 12, 5)));
        assert_eq!(parser.parse("5 dec 2026", anchor), Ok(date(2026, 12, 5)));
    }

    #[test]
    fn misspelled_months_are_canonicalized_first() {
        let parser = EnglishCalendar::default();
        let anchor = date(2025, 11, 20);
        assert_eq!(parser.parse("nowember 24", anchor), Ok(date(2025, 11, 24)));
        assert_eq!(parser.parse("3 decambar", anchor), Ok(date(2025, 12, 3)));
    }

    #[test]
    fn numeric_forms_follow_the_configured_order() {
        let anchor = date(2025, 11, 20);
        assert_eq!(EnglishCalendar::default().parse("04/02", anchor), Ok(date(2025, 2, 4)));
        assert_eq!(EnglishCalendar::new(DateOrder::MonthFirst).parse("04/02", anchor), Ok(date(2025, 4, 2)));
        assert_eq!(EnglishCalendar::default().parse("28/11/25", anchor), Ok(date(2025, 11, 28)));
    }

    #[test]
    fn bare_month_and_bare_day() {
        let parser = EnglishCalendar::default();
        let anchor = date(2025, 11, 20);
        assert_eq!(parser.parse("march", anchor), Ok(date(2025, 3, 1)));
        assert_eq!(parser.parse("25", anchor), Ok(date(2025, 11, 25)));
    }

    #[test]
    fn impossible_dates_are_reported() {
        let parser = EnglishCalendar::default();
        let anchor = date(2025, 11, 20);
        assert_eq!(
            parser.parse("30 february", anchor),
            Err(UnresolvedPhrase::InvalidDate { year: 2025, month: 2, day: 30 })
        );
        assert!(parser.parse("", anchor).is_err());
    }

    #[test]
    fn text_chrono_english_cannot_handle_is_unparseable() {
        let parser = EnglishCalendar::default();
        let anchor = date(2025, 11, 20);
        for text in ["𝔍", "𝟐𝟒 november", "se𝟐𝟒", "२४ नवंबर", "2000000000 weeks", "next 99999 years"] {
            let expected = Err(UnresolvedPhrase::unparseable(text.to_lowercase()));
            assert_eq!(parser.parse(text, anchor), expected, "{text}");
        }
        assert_eq!(parser.parse("2 weeks", anchor), Ok(date(2025, 12, 4)));
    }

    #[test]
    fn closures_can_stand_in_for_the_parser() {
        let always_new_year = |_: &str, anchor: NaiveDate| ymd(anchor.year() + 1, 1, 1);
        assert_eq!(always_new_year.parse("anything", date(2025, 11, 20)), Ok(date(2026, 1, 1)));
    }
}
