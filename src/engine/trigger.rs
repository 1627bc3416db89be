//! Trigger scanning (input pre-classification).
//!
//! Before any locator regex runs, the lower-cased input is scanned once for
//! coarse signals ("contains digits", "mentions a month", ...). Each locator
//! rule declares the buckets it needs and is skipped when they are missing.
//!
//! Every bucket is a *necessary* condition of the regexes that require it, so
//! gating only saves work; it never changes which phrase wins. Word buckets
//! are computed over maximal runs of ASCII letters, which is exactly what a
//! `\b`-delimited or whitespace-delimited ASCII keyword inside the regexes
//! looks like.

use bitflags::bitflags;

use crate::rules::vocab::{PARSO, is_connector, is_month_word, relative_day_offset, weekday_from_name};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS = 1 << 0;
        const MONTHISH   = 1 << 1;
        const WEEKDAYISH = 1 << 2;
        const CONNECTOR  = 1 << 3;
        const RELATIVE   = 1 << 4;
    }
}

/// Input characteristics detected from the lower-cased input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    pub fn scan(lower: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if lower.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        for word in lower.split(|c: char| !c.is_ascii_alphabetic()).filter(|w| !w.is_empty()) {
            if is_month_word(word) {
                buckets |= BucketMask::MONTHISH;
            }
            if weekday_from_name(word).is_some() {
                buckets |= BucketMask::WEEKDAYISH;
            }
            if is_connector(word) {
                buckets |= BucketMask::CONNECTOR;
            }
            if word == PARSO || relative_day_offset(word).is_some() {
                buckets |= BucketMask::RELATIVE;
            }
        }

        TriggerInfo { buckets }
    }

    /// True when every bucket in `required` was seen.
    pub fn allows(&self, required: BucketMask) -> bool {
        self.buckets.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_code_mixed_signals() {
        let info = TriggerInfo::scan("kal se friday tak");
        assert!(info.buckets.contains(BucketMask::RELATIVE | BucketMask::CONNECTOR | BucketMask::WEEKDAYISH));
        assert!(!info.buckets.contains(BucketMask::HAS_DIGITS));
    }

    #[test]
    fn scan_sees_misspelled_months_next_to_punctuation() {
        let info = TriggerInfo::scan("leave on 24-nowember, please");
        assert!(info.allows(BucketMask::HAS_DIGITS | BucketMask::MONTHISH));
    }

    #[test]
    fn connector_must_be_a_whole_word() {
        assert!(!TriggerInfo::scan("tomato season").allows(BucketMask::CONNECTOR));
        assert!(TriggerInfo::scan("mon to fri").allows(BucketMask::CONNECTOR));
    }
}
