//! Calendar arithmetic shared by the resolvers.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{Result, UnresolvedPhrase};

pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(UnresolvedPhrase::InvalidDate { year, month, day })
}

pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days)).ok_or(UnresolvedPhrase::OutOfRange { days })
}

/// Days from `anchor` to the next `weekday`, in `1..=7`.
///
/// The anchor's own weekday maps to 7: a weekday name never means today.
pub fn days_until(anchor: NaiveDate, weekday: Weekday) -> u64 {
    let target = weekday.num_days_from_monday() as i64;
    let current = anchor.weekday().num_days_from_monday() as i64;
    match (target - current).rem_euclid(7) {
        0 => 7,
        diff => diff as u64,
    }
}

/// Next occurrence of `weekday` strictly after `anchor`.
pub fn forward_roll(anchor: NaiveDate, weekday: Weekday) -> Result<NaiveDate> {
    add_days(anchor, days_until(anchor, weekday))
}

/// Last day of `month`, found by stepping back one day from the first of the
/// following month.
pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first_next = ymd(next_year, next_month, 1)?;
    first_next.pred_opt().ok_or(UnresolvedPhrase::OutOfRange { days: 1 })
}

/// Two-digit years are read as 20YY.
pub fn year_from(val: u32) -> i32 {
    if val < 100 { 2000 + val as i32 } else { val as i32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_until_same_weekday_is_a_full_week() {
        // 2025-11-20 is a Thursday.
        let anchor = date(2025, 11, 20);
        assert_eq!(days_until(anchor, Weekday::Thu), 7);
        assert_eq!(days_until(anchor, Weekday::Fri), 1);
        assert_eq!(days_until(anchor, Weekday::Wed), 6);
    }

    #[test]
    fn forward_roll_crosses_month_end() {
        let anchor = date(2025, 11, 28);
        assert_eq!(forward_roll(anchor, Weekday::Tue).unwrap(), date(2025, 12, 2));
    }

    #[test]
    fn last_day_handles_december_and_leap_years() {
        assert_eq!(last_day_of_month(2025, 12).unwrap(), date(2025, 12, 31));
        assert_eq!(last_day_of_month(2024, 2).unwrap(), date(2024, 2, 29));
        assert_eq!(last_day_of_month(2025, 11).unwrap(), date(2025, 11, 30));
    }

    #[test]
    fn ymd_reports_impossible_dates() {
        assert_eq!(ymd(2025, 2, 30), Err(UnresolvedPhrase::InvalidDate { year: 2025, month: 2, day: 30 }));
    }

    #[test]
    fn two_digit_years_land_in_this_century() {
        assert_eq!(year_from(25), 2025);
        assert_eq!(year_from(2031), 2031);
    }
}
