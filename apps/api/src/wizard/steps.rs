use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

pub const STEP_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based position in the track.
    pub number: usize,
    pub slug: &'static str,
    pub label: &'static str,
}

pub static STEPS: [Step; STEP_COUNT] = [
    Step { number: 1, slug: "01-problem", label: "Problem" },
    Step { number: 2, slug: "02-market", label: "Market" },
    Step { number: 3, slug: "03-architecture", label: "Architecture" },
    Step { number: 4, slug: "04-hld", label: "High-Level Design" },
    Step { number: 5, slug: "05-lld", label: "Low-Level Design" },
    Step { number: 6, slug: "06-build", label: "Build" },
    Step { number: 7, slug: "07-test", label: "Test" },
    Step { number: 8, slug: "08-ship", label: "Ship" },
];

impl Step {
    pub fn path(&self) -> String {
        format!("/rb/{}", self.slug)
    }

    /// Path carrying the caller's `user_id`, used as a redirect target.
    pub fn path_for(&self, user_id: Uuid) -> String {
        format!("{}?user_id={user_id}", self.path())
    }

    /// Storage key of this step's artifact record.
    pub fn artifact_key(&self) -> String {
        format!("rb_step_{}_artifact", self.number)
    }

    pub fn status_line(&self) -> String {
        format!("Step {} of {}", self.number, STEP_COUNT)
    }

    pub fn title(&self) -> String {
        format!("Step {} — {}", self.number, self.label)
    }

    pub fn is_last(&self) -> bool {
        self.number == STEP_COUNT
    }

    pub fn next(&self) -> Option<&'static Step> {
        STEPS.get(self.number)
    }
}

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{2})-[a-z]+$").expect("static pattern compiles"))
}

/// Resolves a route segment such as `05-lld`. The numeric prefix picks the step
/// and the rest must match its slug exactly.
pub fn step_by_slug(slug: &str) -> Option<&'static Step> {
    let captures = slug_pattern().captures(slug)?;
    let number: usize = captures[1].parse().ok()?;
    let step = STEPS.get(number.checked_sub(1)?)?;
    (step.slug == slug).then_some(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slug_resolves_to_itself() {
        for step in &STEPS {
            assert_eq!(step_by_slug(step.slug), Some(step));
        }
    }

    #[test]
    fn test_mismatched_or_malformed_slugs() {
        assert_eq!(step_by_slug("05-build"), None);
        assert_eq!(step_by_slug("00-intro"), None);
        assert_eq!(step_by_slug("09-extra"), None);
        assert_eq!(step_by_slug("5-lld"), None);
        assert_eq!(step_by_slug("proof"), None);
    }

    #[test]
    fn test_step_metadata() {
        let hld = &STEPS[3];
        assert_eq!(hld.path(), "/rb/04-hld");
        assert_eq!(
            hld.path_for(Uuid::nil()),
            "/rb/04-hld?user_id=00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(hld.artifact_key(), "rb_step_4_artifact");
        assert_eq!(hld.status_line(), "Step 4 of 8");
        assert_eq!(hld.title(), "Step 4 — High-Level Design");
        assert_eq!(hld.next().map(|s| s.slug), Some("05-lld"));
        assert!(STEPS[7].is_last());
        assert_eq!(STEPS[7].next(), None);
    }
}
