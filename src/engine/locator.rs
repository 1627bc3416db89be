//! Phrase location.
//!
//! Runs every active locator rule over the lower-cased input and keeps all of
//! their matches. The winner is simply the longest match; ties go to whatever
//! was found first (rule order, then position). A full range such as
//! `24 november to 27 november` therefore beats the `24 november` or `friday`
//! sub-matches inside it without any explicit rule priorities.

use tracing::debug;

use super::trigger::TriggerInfo;
use crate::{Candidate, Range, Rule};

pub(crate) struct Locator<'r> {
    rules: &'r [Rule],
}

/// Everything one locator pass saw.
#[derive(Debug, Clone)]
pub(crate) struct LocatorRun {
    /// Lower-cased input; candidate ranges index into this string.
    pub lower: String,
    pub candidates: Vec<Candidate>,
    /// Index into `candidates` of the selected match.
    pub best: Option<usize>,
    pub active_rules: Vec<&'static str>,
}

impl LocatorRun {
    /// The selected phrase, trimmed; empty when nothing matched.
    pub fn raw(&self) -> &str {
        self.best.and_then(|i| self.candidates.get(i)).map(|c| c.body.trim()).unwrap_or("")
    }
}

impl<'r> Locator<'r> {
    pub fn new(rules: &'r [Rule]) -> Self {
        Locator { rules }
    }

    pub fn run(&self, text: &str) -> LocatorRun {
        let lower = text.to_lowercase();
        let trigger = TriggerInfo::scan(&lower);

        let mut candidates = Vec::new();
        let mut active_rules = Vec::new();
        for rule in self.rules.iter().filter(|r| trigger.allows(r.buckets)) {
            active_rules.push(rule.name);
            for m in rule.pattern.find_iter(&lower) {
                candidates.push(Candidate {
                    range: Range { start: m.start(), end: m.end() },
                    rule_name: rule.name,
                    class: rule.class,
                    body: m.as_str().to_string(),
                });
            }
        }

        let best = longest(&candidates);
        if let Some(winner) = best.map(|i| &candidates[i]) {
            debug!(
                rule = winner.rule_name,
                phrase = winner.body.trim(),
                candidates = candidates.len(),
                "located phrase"
            );
        }

        LocatorRun { lower, candidates, best, active_rules }
    }
}

/// Index of the first candidate with the greatest length.
fn longest(candidates: &[Candidate]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let len = candidate.len();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((idx, len));
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::phrases;

    fn locate(text: &str) -> String {
        let rules = phrases::get();
        Locator::new(&rules).run(text).raw().to_string()
    }

    #[test]
    fn full_range_beats_its_parts() {
        assert_eq!(locate("Leave from 24 November to 27 November please"), "24 november to 27 november");
    }

    #[test]
    fn picks_phrases_out_of_code_mixed_text() {
        assert_eq!(locate("mujhe kal se friday tak chutti chahiye"), "kal se friday");
        assert_eq!(locate("agle 3 din ki leave"), "agle 3 din");
        assert_eq!(locate("parso aana hai"), "parso");
        assert_eq!(locate("meeting on 28/11/2025"), "28/11/2025");
    }

    #[test]
    fn duration_prefix_whitespace_is_trimmed() {
        assert_eq!(locate("for 3 days"), "3 days");
    }

    #[test]
    fn no_match_is_empty() {
        assert_eq!(locate("just checking"), "");
        assert_eq!(locate(""), "");
    }

    #[test]
    fn ties_go_to_the_earlier_rule() {
        assert_eq!(locate("monday or friday"), "monday");
    }

    #[test]
    fn gating_skips_rules_without_their_buckets() {
        let rules = phrases::get();
        let run = Locator::new(&rules).run("kal");
        assert!(run.active_rules.contains(&"relative day"));
        assert!(!run.active_rules.contains(&"<day> <month>"));
    }
}
