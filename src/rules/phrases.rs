//! Locator catalog.
//!
//! Order matters only for ties: the locator keeps the longest match and, among
//! equally long matches, the one found first.

use crate::engine::BucketMask;
use crate::rules::vocab::MONTH_WORDS;
use crate::{PatternClass, Rule};

pub(crate) fn get() -> Vec<Rule> {
    vec![
        rule_day_month_to_day_month(),
        rule_day_month_dash_day_month(),
        rule_day_month(),
        rule_month_day(),
        rule_day_sep_month(),
        rule_dd_mm_yyyy(),
        rule_dd_mm(),
        rule_word_connector_word(),
        rule_day_connector_day(),
        rule_day_month_connector_day_month(),
        rule_duration(),
        rule_relative_day(),
        rule_weekday(),
    ]
}

/// "24 november to 27 november", "1 dec through 3 dec"
fn rule_day_month_to_day_month() -> Rule {
    rule! {
        name: "<day> <month> to <day> <month>",
        class: PatternClass::DayRange,
        pattern: regex!(r"\b[0-9]{1,2}\s+[a-z]+\s+(?:to|through)\s+[0-9]{1,2}\s+[a-z]+\b"),
        buckets: BucketMask::HAS_DIGITS | BucketMask::CONNECTOR,
    }
}

/// "24 november - 27 november"
fn rule_day_month_dash_day_month() -> Rule {
    rule! {
        name: "<day> <month> - <day> <month>",
        class: PatternClass::DayRange,
        pattern: regex!(r"\b[0-9]{1,2}\s+[a-z]+\s*-\s*[0-9]{1,2}\s+[a-z]+\b"),
        buckets: BucketMask::HAS_DIGITS,
    }
}

/// "24 november", "3 decambar"
fn rule_day_month() -> Rule {
    rule! {
        name: "<day> <month>",
        class: PatternClass::DayMonth,
        pattern: regex!(format: r"\b[0-9]{{1,2}}\s+(?:{})\b", &*MONTH_WORDS),
        buckets: BucketMask::HAS_DIGITS | BucketMask::MONTHISH,
    }
}

/// "november 24", "noveber 24"
fn rule_month_day() -> Rule {
    rule! {
        name: "<month> <day>",
        class: PatternClass::DayMonth,
        pattern: regex!(format: r"\b(?:{})\s+[0-9]{{1,2}}\b", &*MONTH_WORDS),
        buckets: BucketMask::HAS_DIGITS | BucketMask::MONTHISH,
    }
}

/// "28-november", "28/nov"
fn rule_day_sep_month() -> Rule {
    rule! {
        name: "<day>-<month>",
        class: PatternClass::DayMonth,
        pattern: regex!(format: r"\b[0-9]{{1,2}}[-/ ]+(?:{})\b", &*MONTH_WORDS),
        buckets: BucketMask::HAS_DIGITS | BucketMask::MONTHISH,
    }
}

/// "28/11/2025", "28-11-25"
fn rule_dd_mm_yyyy() -> Rule {
    rule! {
        name: "dd/mm/yyyy",
        class: PatternClass::Numeric,
        pattern: regex!(r"\b[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4}\b"),
        buckets: BucketMask::HAS_DIGITS,
    }
}

/// "28/11", "28-11"
fn rule_dd_mm() -> Rule {
    rule! {
        name: "dd/mm",
        class: PatternClass::Numeric,
        pattern: regex!(r"\b[0-9]{1,2}[/-][0-9]{1,2}\b"),
        buckets: BucketMask::HAS_DIGITS,
    }
}

/// "kal se friday", "monday to friday", "aaj till sunday"
fn rule_word_connector_word() -> Rule {
    rule! {
        name: "<word> se|to|till|tak <word>",
        class: PatternClass::ConnectorRange,
        pattern: regex!(r"\b[a-z]+(?:\s+se|\s+to|\s+till|\s+tak)\s+[a-z]+\b"),
        buckets: BucketMask::CONNECTOR,
    }
}

/// "20 se 25", "20-25"
fn rule_day_connector_day() -> Rule {
    rule! {
        name: "<day> se|to|- <day>",
        class: PatternClass::ConnectorRange,
        pattern: regex!(r"\b[0-9]{1,2}\s*(?:se|to|-)\s*[0-9]{1,2}\b"),
        buckets: BucketMask::HAS_DIGITS,
    }
}

/// "12 dec se 15 dec"
fn rule_day_month_connector_day_month() -> Rule {
    rule! {
        name: "<day> <month> se|to|tak <day> <month>",
        class: PatternClass::ConnectorRange,
        pattern: regex!(r"\b[0-9]{1,2}\s+[a-z]+\s*(?:se|to|tak)\s*[0-9]{1,2}\s+[a-z]+\b"),
        buckets: BucketMask::HAS_DIGITS,
    }
}

/// "3 din", "next 2 days", "aane wale 4 din"
fn rule_duration() -> Rule {
    rule! {
        name: "<n> day(s)|din",
        class: PatternClass::Duration,
        pattern: regex!(r"\b(?:next|agle|aane wale)?\s*[0-9]+\s*(?:day|days|din)\b"),
        buckets: BucketMask::HAS_DIGITS,
    }
}

fn rule_relative_day() -> Rule {
    rule! {
        name: "relative day",
        class: PatternClass::RelativeDay,
        pattern: regex!(r"\b(?:aaj|aj|kal|tomorrow|parso)\b"),
        buckets: BucketMask::RELATIVE,
    }
}

fn rule_weekday() -> Rule {
    rule! {
        name: "<weekday>",
        class: PatternClass::Weekday,
        pattern: regex!(r"\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b"),
        buckets: BucketMask::WEEKDAYISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(rule: &Rule, text: &str) -> Vec<String> {
        rule.pattern.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    #[test]
    fn month_rules_accept_misspellings() {
        assert_eq!(matches(&rule_day_month(), "24 novmber"), vec!["24 novmber"]);
        assert_eq!(matches(&rule_month_day(), "decembar 5 ko"), vec!["decembar 5"]);
        assert_eq!(matches(&rule_day_sep_month(), "28-nowember"), vec!["28-nowember"]);
    }

    #[test]
    fn month_rules_prefer_full_names() {
        assert_eq!(matches(&rule_month_day(), "november 24"), vec!["november 24"]);
        assert!(matches(&rule_day_month(), "24 novelty").is_empty());
    }

    #[test]
    fn duration_accepts_hindi_prefixes() {
        assert_eq!(matches(&rule_duration(), "aane wale 4 din"), vec!["aane wale 4 din"]);
        assert_eq!(matches(&rule_duration(), "2 days"), vec!["2 days"]);
    }

    #[test]
    fn buckets_are_declared_for_every_rule() {
        assert!(get().iter().all(|r| !r.buckets.is_empty()));
    }
}
