//! Range strategies, in priority order.
//!
//! Each strategy looks at the whole lower-cased phrase and answers:
//!
//! - `None`: not my shape, try the next strategy;
//! - `Some(Ok(span))`: resolved;
//! - `Some(Err(_))`: my shape, but no valid date could be built. The
//!   dispatcher turns this into `anchor..anchor`.
//!
//! Only word/weekday ranges roll across week boundaries. Bare numeric day
//! pairs clamp instead, and the weekday-to-weekday strategy keeps whatever
//! order the two forward rolls produce.

use chrono::{Datelike, NaiveDate};

use crate::calendar::DateOrder;
use crate::date::Span;
use crate::engine::{Resolver, Strategy};
use crate::error::{Result, UnresolvedPhrase};
use crate::rules::helpers::{add_days, days_until, year_from, ymd};
use crate::rules::vocab::{MONTH_WORDS, weekday_from_name};

pub(crate) static STRATEGIES: &[Strategy] = &[
    Strategy { name: "dd-mm", resolve: bare_day_month },
    Strategy { name: "dd-mm-yyyy", resolve: bare_numeric_date },
    Strategy { name: "<d> <month> to <d> <month>", resolve: day_month_range },
    Strategy { name: "<d> <month> se|to|tak <d> <month>", resolve: connector_day_month_range },
    Strategy { name: "<word> se|to|tak <word>", resolve: word_range },
    Strategy { name: "<d> se|to|- <d>", resolve: numeric_day_range },
    Strategy { name: "<n> din", resolve: duration },
    Strategy { name: "<weekday> to <weekday>", resolve: weekday_pair },
    Strategy { name: "<month> <d>", resolve: month_first },
    Strategy { name: "single", resolve: single },
];

fn day_then_month(first: u32, second: u32, order: DateOrder) -> (u32, u32) {
    match order {
        DateOrder::DayFirst => (first, second),
        DateOrder::MonthFirst => (second, first),
    }
}

/// `28-11`, `28/11`: one date in the anchor's year, not "28 to 11".
/// Impossible dates fall through to the later strategies.
fn bare_day_month(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    let caps = regex!(r"^([0-9]{1,2})[-/]([0-9]{1,2})$").captures(phrase)?;
    let (day, month) = day_then_month(caps[1].parse().ok()?, caps[2].parse().ok()?, r.order);
    let date = ymd(r.anchor.year(), month, day).ok()?;
    Some(Ok(Span::single(date, "dd-mm")))
}

/// `28-11-2025`, `28/11/25`
fn bare_numeric_date(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    let caps = regex!(r"^([0-9]{1,2})[-/]([0-9]{1,2})[-/]([0-9]{2}|[0-9]{4})$").captures(phrase)?;
    let (day, month) = day_then_month(caps[1].parse().ok()?, caps[2].parse().ok()?, r.order);
    let year = year_from(caps[3].parse().ok()?);
    let date = ymd(year, month, day).ok()?;
    Some(Ok(Span::single(date, "dd-mm-yyyy")))
}

/// `24 november to 27 november`, `24 nov through 27 nov`, `24 nov - 27 nov`
fn day_month_range(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    let caps =
        regex!(r"([0-9]{1,2})\s+([a-z]+)(?:\s+(?:to|through)\s+|\s*-\s*)([0-9]{1,2})\s+([a-z]+)").captures(phrase)?;
    Some(Ok(explicit_pair(r, (&caps[1], &caps[2]), (&caps[3], &caps[4]), "<d> <month> to <d> <month>")))
}

/// `12 dec se 15 dec`, `12 dec tak 15 dec`
fn connector_day_month_range(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    let caps = regex!(r"([0-9]{1,2})\s+([a-z]+)\s*(?:se|to|tak)\s*([0-9]{1,2})\s+([a-z]+)").captures(phrase)?;
    Some(Ok(explicit_pair(r, (&caps[1], &caps[2]), (&caps[3], &caps[4]), "<d> <month> se|to|tak <d> <month>")))
}

/// Both sides go through the calendar parser. A failed start becomes the
/// anchor, a failed end becomes the start.
///
/// An end that still lands before the start moves to the next year when its
/// month is earlier (`28 dec to 2 jan`), otherwise it collapses onto the start.
fn explicit_pair(r: &Resolver<'_>, left: (&str, &str), right: (&str, &str), name: &'static str) -> Span {
    let start = r.parse_or(&format!("{} {}", left.0, left.1), r.anchor);
    let end = r.parse_or(&format!("{} {}", right.0, right.1), start);

    let end = if end >= start {
        end
    } else if end.month() < start.month() {
        end.with_year(end.year() + 1).filter(|e| *e >= start).unwrap_or(start)
    } else {
        start
    };

    Span::new(start, end, name)
}

/// `kal se friday tak`, `parso to monday`
///
/// `till` is only a locator connector; `aaj till sunday` resolves as a single
/// date. Two bare numbers (`20 se 25`) are left to [`numeric_day_range`].
fn word_range(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    let caps = regex!(r"(\S+)\s+(?:se|to|tak)\s+(\S+)").captures(phrase)?;
    let (left, right) = (&caps[1], &caps[2]);
    if is_number(left) && is_number(right) {
        return None;
    }
    Some(resolve_word_range(left, right, r))
}

fn is_number(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

fn resolve_word_range(left: &str, right: &str, r: &Resolver<'_>) -> Result<Span> {
    let start = r.single(left);
    let mut end = match weekday_from_name(right) {
        Some(weekday) => add_days(r.anchor, days_until(r.anchor, weekday))?,
        None => r.single(right),
    };

    // Roll forward by whole weeks until the range is not backwards.
    if end < start {
        let behind = (start - end).num_days() as u64;
        end = add_days(end, behind.div_ceil(7) * 7)?;
    }

    Ok(Span::new(start, end, "<word> se|to|tak <word>"))
}

/// `20 se 25`, `20-25`: both days in the anchor's month. A backwards pair
/// collapses onto the start day.
fn numeric_day_range(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    let caps = regex!(r"\b([0-9]{1,2})\s*(?:se|to|-)\s*([0-9]{1,2})\b").captures(phrase)?;
    let first = caps[1].parse().ok()?;
    let second = caps[2].parse().ok()?;
    Some(same_month_range(r.anchor, first, second))
}

fn same_month_range(anchor: NaiveDate, first: u32, second: u32) -> Result<Span> {
    let start = ymd(anchor.year(), anchor.month(), first)?;
    let end = ymd(anchor.year(), anchor.month(), second)?;
    Ok(Span::new(start, end.max(start), "<d> se|to|- <d>"))
}

/// `3 din`, `next 2 days`: `n` days starting today. Zero days is just today.
fn duration(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    let caps = regex!(r"([0-9]+)\s*(?:din|days|day)").captures(phrase)?;
    let days: u64 = match caps[1].parse() {
        Ok(days) => days,
        Err(_) => return Some(Err(UnresolvedPhrase::unparseable(&caps[0]))),
    };
    Some(add_days(r.anchor, days.saturating_sub(1)).map(|end| Span::new(r.anchor, end, "<n> din")))
}

/// `monday to friday` when nothing earlier claimed it. Each side rolls forward
/// on its own, so the end can come out before the start.
fn weekday_pair(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    let caps = regex!(r"([a-z]+)\s*(?:to|se|tak)\s*([a-z]+)").captures(phrase)?;
    let first = weekday_from_name(&caps[1])?;
    let second = weekday_from_name(&caps[2])?;

    let resolve = || -> Result<Span> {
        let start = add_days(r.anchor, days_until(r.anchor, first))?;
        let end = add_days(r.anchor, days_until(r.anchor, second))?;
        Ok(Span::new(start, end, "<weekday> to <weekday>"))
    };
    Some(resolve())
}

/// `november 24`, `decembar 5`. A failed parse falls through.
fn month_first(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    let caps = regex!(format: r"\b({})\s+([0-9]{{1,2}})", &*MONTH_WORDS).captures(phrase)?;
    let date = r.calendar.parse(&format!("{} {}", &caps[2], &caps[1]), r.anchor).ok()?;
    Some(Ok(Span::single(date, "<month> <d>")))
}

fn single(phrase: &str, r: &Resolver<'_>) -> Option<Result<Span>> {
    Some(r.try_single(phrase).map(|date| Span::single(date, "single")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EnglishCalendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_resolver<T>(anchor: NaiveDate, f: impl FnOnce(&Resolver<'_>) -> T) -> T {
        let calendar = EnglishCalendar::default();
        let resolver = Resolver::new(anchor, DateOrder::DayFirst, &calendar);
        f(&resolver)
    }

    fn first_match(phrase: &str, anchor: NaiveDate) -> Option<(&'static str, Result<(NaiveDate, NaiveDate)>)> {
        with_resolver(anchor, |r| {
            STRATEGIES.iter().find_map(|s| (s.resolve)(phrase, r).map(|res| (s.name, res.map(|sp| (sp.start, sp.end)))))
        })
    }

    #[test]
    fn bare_pair_is_one_date_not_a_range() {
        let thursday = date(2025, 11, 20);
        assert_eq!(first_match("28-11", thursday), Some(("dd-mm", Ok((date(2025, 11, 28), date(2025, 11, 28))))));
        assert_eq!(first_match("5/1", thursday), Some(("dd-mm", Ok((date(2025, 1, 5), date(2025, 1, 5))))));
    }

    #[test]
    fn impossible_bare_pair_falls_through() {
        // 30/02 cannot be built; later strategies get a go and the numeric
        // range does not accept '/', so the single-date parser reports it.
        let (name, res) = first_match("30/02", date(2025, 11, 20)).unwrap();
        assert_eq!(name, "single");
        assert!(res.is_err());
    }

    #[test]
    fn word_range_rolls_by_whole_weeks() {
        // Thursday anchor: "parso" is Saturday 22nd, "monday" rolls to the 24th.
        let (name, res) = first_match("parso se monday", date(2025, 11, 20)).unwrap();
        assert_eq!(name, "<word> se|to|tak <word>");
        assert_eq!(res, Ok((date(2025, 11, 22), date(2025, 11, 24))));

        // "thursday" as an endpoint on a Thursday means next week.
        let (_, res) = first_match("aaj se thursday", date(2025, 11, 20)).unwrap();
        assert_eq!(res, Ok((date(2025, 11, 20), date(2025, 11, 27))));
    }

    #[test]
    fn word_range_end_before_start_is_pushed_forward() {
        with_resolver(date(2025, 11, 20), |r| {
            // "friday" on the left is the 21st; "20" on the right is the 20th,
            // one day behind, so it moves a whole week.
            let span = resolve_word_range("friday", "20", r).unwrap();
            assert_eq!((span.start, span.end), (date(2025, 11, 21), date(2025, 11, 27)));
        });
    }

    #[test]
    fn numeric_pairs_use_the_numeric_strategy() {
        let (name, res) = first_match("20 se 25", date(2025, 11, 20)).unwrap();
        assert_eq!(name, "<d> se|to|- <d>");
        assert_eq!(res, Ok((date(2025, 11, 20), date(2025, 11, 25))));

        let (_, res) = first_match("25-20", date(2025, 11, 20)).unwrap();
        assert_eq!(res, Ok((date(2025, 11, 25), date(2025, 11, 25))));
    }

    #[test]
    fn explicit_ranges_cross_the_year_end() {
        let (name, res) = first_match("28 dec to 2 jan", date(2025, 11, 20)).unwrap();
        assert_eq!(name, "<d> <month> to <d> <month>");
        assert_eq!(res, Ok((date(2025, 12, 28), date(2026, 1, 2))));
    }

    #[test]
    fn backwards_explicit_range_in_one_month_collapses() {
        let (_, res) = first_match("27 nov se 24 nov", date(2025, 11, 20)).unwrap();
        assert_eq!(res, Ok((date(2025, 11, 27), date(2025, 11, 27))));
    }

    #[test]
    fn duration_counts_today() {
        let (_, res) = first_match("next 2 days", date(2025, 11, 20)).unwrap();
        assert_eq!(res, Ok((date(2025, 11, 20), date(2025, 11, 21))));

        let (_, res) = first_match("0 din", date(2025, 11, 20)).unwrap();
        assert_eq!(res, Ok((date(2025, 11, 20), date(2025, 11, 20))));
    }

    #[test]
    fn huge_durations_are_unresolved() {
        let (name, res) = first_match("99999999999999999999999 days", date(2025, 11, 20)).unwrap();
        assert_eq!(name, "<n> din");
        assert!(res.is_err());
    }

    // Known limitation: weekday-to-weekday ranges resolve each side on its
    // own and may come out backwards. On Monday 2025-11-17, "friday" is the
    // 21st but "wednesday" is the 19th.
    #[test]
    fn weekday_pair_can_end_before_it_starts() {
        with_resolver(date(2025, 11, 17), |r| {
            let span = weekday_pair("friday to wednesday", r).unwrap().unwrap();
            assert_eq!((span.start, span.end), (date(2025, 11, 21), date(2025, 11, 19)));
            assert!(span.end < span.start);
        });

        // Only reachable through dispatch when the word range cannot claim it.
        let (name, res) = first_match("fridaytowednesday", date(2025, 11, 17)).unwrap();
        assert_eq!(name, "<weekday> to <weekday>");
        assert_eq!(res, Ok((date(2025, 11, 21), date(2025, 11, 19))));
    }

    #[test]
    fn weekday_pair_ignores_other_words() {
        with_resolver(date(2025, 11, 17), |r| {
            assert!(weekday_pair("want to take", r).is_none());
        });
    }

    #[test]
    fn month_first_reads_misspellings() {
        let (name, res) = first_match("nowember 24", date(2025, 11, 20)).unwrap();
        assert_eq!(name, "<month> <d>");
        assert_eq!(res, Ok((date(2025, 11, 24), date(2025, 11, 24))));
    }
}
