use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matched as prefixes of the bullet's first word, so "built," with trailing
/// punctuation still counts.
const ACTION_VERB_STEMS: &[&str] = &[
    "built",
    "developed",
    "designed",
    "implemented",
    "led",
    "improved",
    "created",
    "optimized",
    "automated",
    "managed",
    "delivered",
    "achieved",
    "increased",
    "reduced",
    "enhanced",
    "established",
    "launched",
    "architected",
    "scaled",
    "transformed",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletGuidance {
    pub needs_action_verb: bool,
    pub needs_numbers: bool,
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+[%kmbKMB]?").expect("static pattern compiles"))
}

fn starts_with_action_verb(text: &str) -> bool {
    let Some(first_word) = text.split_whitespace().next() else {
        return false;
    };
    let first_word = first_word.to_lowercase();
    ACTION_VERB_STEMS
        .iter()
        .any(|stem| first_word.starts_with(stem))
}

/// True when the text carries a number, optionally with a %, k, m or b suffix.
pub fn has_numbers(text: &str) -> bool {
    number_pattern().is_match(text)
}

/// Per-keystroke guidance for a single bullet. Blank text gets no guidance.
pub fn analyze_bullet(text: &str) -> BulletGuidance {
    if text.trim().is_empty() {
        return BulletGuidance::default();
    }

    BulletGuidance {
        needs_action_verb: !starts_with_action_verb(text),
        needs_numbers: !has_numbers(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_needs_nothing() {
        assert_eq!(analyze_bullet(""), BulletGuidance::default());
        assert_eq!(analyze_bullet("   \n\t"), BulletGuidance::default());
    }

    #[test]
    fn test_strong_bullet_needs_nothing() {
        let g = analyze_bullet("Led a team of 5 engineers");
        assert!(!g.needs_action_verb);
        assert!(!g.needs_numbers);
    }

    #[test]
    fn test_weak_bullet_needs_both() {
        let g = analyze_bullet("Worked on stuff");
        assert!(g.needs_action_verb);
        assert!(g.needs_numbers);
    }

    #[test]
    fn test_action_verb_is_prefix_match() {
        assert!(!analyze_bullet("Built, tested and shipped the API").needs_action_verb);
        assert!(!analyze_bullet("SCALED ingestion to 2M events").needs_action_verb);
    }

    #[test]
    fn test_only_first_word_counts() {
        assert!(analyze_bullet("Responsible for, and led, 3 launches").needs_action_verb);
    }

    #[test]
    fn test_leading_whitespace_is_skipped() {
        assert!(!analyze_bullet("   Optimized queries by 30%").needs_action_verb);
    }

    #[test]
    fn test_number_suffixes() {
        assert!(has_numbers("Reduced cost by 40%"));
        assert!(has_numbers("Served 10k users"));
        assert!(has_numbers("Raised 2M"));
        assert!(has_numbers("Version 3 rollout"));
        assert!(!has_numbers("Improved onboarding"));
    }
}
