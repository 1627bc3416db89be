//! Vocabulary tables shared by the locator and the resolvers.
//!
//! Month words come from two tables: [`MONTH_NAME`] (canonical names and
//! abbreviations) and [`MISSPELLED_MONTH`] (noisy spellings mapped to their
//! canonical name). Regex alternations are generated from both, so a new
//! misspelling only needs a table entry.

use chrono::Weekday;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

pub(crate) static MONTH_NAME: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("january", 1),
        ("jan", 1),
        ("february", 2),
        ("feb", 2),
        ("march", 3),
        ("mar", 3),
        ("april", 4),
        ("apr", 4),
        ("may", 5),
        ("june", 6),
        ("jun", 6),
        ("july", 7),
        ("jul", 7),
        ("august", 8),
        ("aug", 8),
        ("september", 9),
        ("sept", 9),
        ("sep", 9),
        ("october", 10),
        ("oct", 10),
        ("november", 11),
        ("nov", 11),
        ("december", 12),
        ("dec", 12),
    ])
});

pub(crate) static MISSPELLED_MONTH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("novemer", "november"),
        ("novmber", "november"),
        ("noveber", "november"),
        ("nowember", "november"),
        ("decem", "december"),
        ("decambar", "december"),
        ("decmbre", "december"),
        ("decembar", "december"),
    ])
});

/// Every month spelling as a regex alternation body, longest first.
pub(crate) static MONTH_WORDS: Lazy<String> = Lazy::new(|| {
    let mut words: Vec<&str> = MONTH_NAME.keys().chain(MISSPELLED_MONTH.keys()).copied().collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.join("|")
});

pub(crate) const WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Words that resolve to a fixed offset from the anchor when they make up the
/// whole phrase.
pub(crate) const RELATIVE_DAYS: [(&str, u64); 5] =
    [("aaj", 0), ("aj", 0), ("today", 0), ("kal", 1), ("tomorrow", 1)];

/// "Day after tomorrow"; matched anywhere inside a phrase.
pub(crate) const PARSO: &str = "parso";

pub(crate) const CONNECTORS: [&str; 5] = ["se", "to", "till", "tak", "through"];

/// Map a (possibly misspelled) month word to its number.
pub fn month_number(word: &str) -> Option<u32> {
    let word = canonical_month_word(word);
    MONTH_NAME.get(word).copied()
}

/// Resolve a misspelling to its canonical month name; other words pass through.
pub fn canonical_month_word(word: &str) -> &str {
    MISSPELLED_MONTH.get(word).copied().unwrap_or(word)
}

/// Rewrite misspelled month words inside `text`, leaving everything else intact.
pub fn canonicalize_months(text: &str) -> Cow<'_, str> {
    regex!(r"[a-z]+").replace_all(text, |caps: &regex::Captures<'_>| canonical_month_word(&caps[0]).to_string())
}

/// Exact weekday name lookup.
pub fn weekday_from_name(word: &str) -> Option<Weekday> {
    WEEKDAYS.iter().find(|(name, _)| *name == word).map(|(_, wd)| *wd)
}

/// First weekday (in Monday..Sunday order) whose name occurs anywhere in `text`.
pub fn weekday_mentioned(text: &str) -> Option<Weekday> {
    WEEKDAYS.iter().find(|(name, _)| text.contains(name)).map(|(_, wd)| *wd)
}

pub fn relative_day_offset(word: &str) -> Option<u64> {
    RELATIVE_DAYS.iter().find(|(name, _)| *name == word).map(|(_, offset)| *offset)
}

pub fn is_month_word(word: &str) -> bool {
    month_number(word).is_some()
}

pub fn is_connector(word: &str) -> bool {
    CONNECTORS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misspellings_resolve_to_canonical_months() {
        assert_eq!(month_number("nowember"), Some(11));
        assert_eq!(month_number("decambar"), Some(12));
        assert_eq!(month_number("sept"), Some(9));
        assert_eq!(month_number("kal"), None);
    }

    #[test]
    fn month_alternation_prefers_longer_spellings() {
        let words: Vec<&str> = MONTH_WORDS.split('|').collect();
        let nov = words.iter().position(|w| *w == "nov").unwrap();
        let november = words.iter().position(|w| *w == "november").unwrap();
        assert!(november < nov);
        assert!(words.contains(&"novmber"));
    }

    #[test]
    fn canonicalize_rewrites_only_misspelled_words() {
        assert_eq!(canonicalize_months("24 novmber se 2 decembar"), "24 november se 2 december");
        assert_eq!(canonicalize_months("kal se friday"), "kal se friday");
    }

    #[test]
    fn weekday_mention_uses_week_order() {
        assert_eq!(weekday_mentioned("friday or monday"), Some(Weekday::Mon));
        assert_eq!(weekday_from_name("fridays"), None);
        assert_eq!(weekday_mentioned("fridays"), Some(Weekday::Fri));
    }
}
