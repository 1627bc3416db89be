//! Month-level checks that run before range dispatch.

use chrono::{Datelike, NaiveDate};

use crate::date::Span;
use crate::error::Result;
use crate::rules::helpers::{last_day_of_month, ymd};
use crate::rules::vocab::{MONTH_WORDS, month_number};

pub(crate) const MONTH_ONLY: &str = "<month> (whole month)";

/// True when `lower` pairs a day number with a month word anywhere
/// (`24 november`, `november 24`). Such text is never read as a bare month.
pub(crate) fn has_explicit_day_month(lower: &str) -> bool {
    regex!(format: r"\b[0-9]{{1,2}}\s+(?:{})\b", &*MONTH_WORDS).is_match(lower)
        || regex!(format: r"\b(?:{})\s+[0-9]{{1,2}}\b", &*MONTH_WORDS).is_match(lower)
}

/// Find a bare month word and expand it to the whole calendar month.
///
/// Months are tried in calendar order, so "dec ya jan" picks January. The
/// month is the current one if it has not passed yet this year, otherwise
/// next year's.
pub(crate) fn bare_month(lower: &str, anchor: NaiveDate) -> Option<(String, Result<Span>)> {
    let (month, word) = regex!(format: r"\b(?:{})\b", &*MONTH_WORDS)
        .find_iter(lower)
        .filter_map(|m| month_number(m.as_str()).map(|month| (month, m)))
        .min_by_key(|(month, m)| (*month, m.start()))?;

    let year = if month < anchor.month() { anchor.year() + 1 } else { anchor.year() };
    Some((word.as_str().to_string(), month_span(year, month)))
}

fn month_span(year: i32, month: u32) -> Result<Span> {
    let start = ymd(year, month, 1)?;
    let end = last_day_of_month(year, month)?;
    Ok(Span::new(start, end, MONTH_ONLY))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn explicit_day_month_in_either_order() {
        assert!(has_explicit_day_month("leave on 24 november"));
        assert!(has_explicit_day_month("november 24 ko"));
        assert!(has_explicit_day_month("3 decambar"));
        assert!(!has_explicit_day_month("november mein 3 din"));
    }

    #[test]
    fn bare_month_covers_the_whole_month() {
        let (word, span) = bare_month("pura november", date(2025, 11, 20)).unwrap();
        let span = span.unwrap();
        assert_eq!(word, "november");
        assert_eq!((span.start, span.end), (date(2025, 11, 1), date(2025, 11, 30)));
    }

    #[test]
    fn passed_months_roll_into_next_year() {
        let (_, span) = bare_month("jan mein", date(2025, 11, 20)).unwrap();
        let span = span.unwrap();
        assert_eq!((span.start, span.end), (date(2026, 1, 1), date(2026, 1, 31)));
    }

    #[test]
    fn december_ends_on_the_31st() {
        let (word, span) = bare_month("decambar", date(2025, 11, 20)).unwrap();
        assert_eq!(word, "decambar");
        assert_eq!(span.unwrap().end, date(2025, 12, 31));
    }

    #[test]
    fn calendar_order_beats_position() {
        let (word, _) = bare_month("dec ya jan", date(2025, 11, 20)).unwrap();
        assert_eq!(word, "jan");
    }

    #[test]
    fn no_month_no_span() {
        assert!(bare_month("kal se friday", date(2025, 11, 20)).is_none());
    }
}
