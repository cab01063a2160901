//! ATS readiness score: a deterministic completeness grade for a resume.
//!
//! Eleven independent rules, each worth 0 or its full weight (weights sum to 100).
//! Unmet rules produce one suggestion each, in table order, truncated to five.
//!
//! | rule                                   | points |
//! |----------------------------------------|--------|
//! | name                                   | 10     |
//! | email                                  | 10     |
//! | summary > 50 chars                     | 10     |
//! | experience entry with details          | 15     |
//! | education entry                        | 10     |
//! | ≥ 5 skills                             | 10     |
//! | project entry                          | 10     |
//! | phone                                  | 5      |
//! | LinkedIn                               | 5      |
//! | GitHub                                 | 5      |
//! | action verb in summary                 | 10     |

use serde::{Deserialize, Serialize};

use crate::models::resume::{has_text, ResumeData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreColor {
    Green,
    Amber,
    Red,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScore {
    pub score: u32, // 0 – 100
    pub suggestions: Vec<String>,
    pub label: String,
    pub color: ScoreColor,
}

pub const MAX_SCORE: u32 = 100;
pub const MAX_SUGGESTIONS: usize = 5;
const MIN_SUMMARY_CHARS: usize = 50;
const MIN_SKILLS: usize = 5;

/// Matched as case-insensitive substrings of the summary.
pub const SUMMARY_ACTION_VERBS: [&str; 21] = [
    "built",
    "led",
    "designed",
    "improved",
    "developed",
    "created",
    "managed",
    "implemented",
    "achieved",
    "increased",
    "decreased",
    "reduced",
    "optimized",
    "launched",
    "delivered",
    "established",
    "coordinated",
    "executed",
    "streamlined",
    "enhanced",
    "drove",
];

struct AtsRule {
    points: u32,
    is_met: fn(&ResumeData) -> bool,
    suggestion: fn(&ResumeData) -> String,
}

const RULES: &[AtsRule] = &[
    AtsRule {
        points: 10,
        is_met: has_name,
        suggestion: name_suggestion,
    },
    AtsRule {
        points: 10,
        is_met: has_email,
        suggestion: email_suggestion,
    },
    AtsRule {
        points: 10,
        is_met: has_long_summary,
        suggestion: summary_suggestion,
    },
    AtsRule {
        points: 15,
        is_met: has_detailed_experience,
        suggestion: experience_suggestion,
    },
    AtsRule {
        points: 10,
        is_met: has_education,
        suggestion: education_suggestion,
    },
    AtsRule {
        points: 10,
        is_met: has_enough_skills,
        suggestion: skills_suggestion,
    },
    AtsRule {
        points: 10,
        is_met: has_project,
        suggestion: project_suggestion,
    },
    AtsRule {
        points: 5,
        is_met: has_phone,
        suggestion: phone_suggestion,
    },
    AtsRule {
        points: 5,
        is_met: has_linkedin,
        suggestion: linkedin_suggestion,
    },
    AtsRule {
        points: 5,
        is_met: has_github,
        suggestion: github_suggestion,
    },
    AtsRule {
        points: 10,
        is_met: summary_has_action_verb,
        suggestion: action_verb_suggestion,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Rule checks and suggestion text
// ────────────────────────────────────────────────────────────────────────────

fn has_name(data: &ResumeData) -> bool {
    !data.personal.name.trim().is_empty()
}

fn name_suggestion(_: &ResumeData) -> String {
    "Add your name (+10 points)".to_string()
}

fn has_email(data: &ResumeData) -> bool {
    !data.personal.email.trim().is_empty()
}

fn email_suggestion(_: &ResumeData) -> String {
    "Add your email (+10 points)".to_string()
}

fn has_long_summary(data: &ResumeData) -> bool {
    data.summary.trim().chars().count() > MIN_SUMMARY_CHARS
}

fn summary_suggestion(data: &ResumeData) -> String {
    if data.summary.trim().is_empty() {
        "Add a professional summary (+10 points)".to_string()
    } else {
        format!("Expand your summary to >{MIN_SUMMARY_CHARS} characters (+10 points)")
    }
}

fn has_detailed_experience(data: &ResumeData) -> bool {
    data.experience.iter().any(|e| has_text(&e.details))
}

fn experience_suggestion(data: &ResumeData) -> String {
    if data.experience.is_empty() {
        "Add at least 1 experience entry with details (+15 points)".to_string()
    } else {
        "Add details/bullets to your experience entries (+15 points)".to_string()
    }
}

fn has_education(data: &ResumeData) -> bool {
    !data.education.is_empty()
}

fn education_suggestion(_: &ResumeData) -> String {
    "Add at least 1 education entry (+10 points)".to_string()
}

fn has_enough_skills(data: &ResumeData) -> bool {
    data.total_skills() >= MIN_SKILLS
}

fn skills_suggestion(data: &ResumeData) -> String {
    format!(
        "Add at least {MIN_SKILLS} skills (currently {}) (+10 points)",
        data.total_skills()
    )
}

fn has_project(data: &ResumeData) -> bool {
    !data.projects.is_empty()
}

fn project_suggestion(_: &ResumeData) -> String {
    "Add at least 1 project (+10 points)".to_string()
}

fn has_phone(data: &ResumeData) -> bool {
    !data.personal.phone.trim().is_empty()
}

fn phone_suggestion(_: &ResumeData) -> String {
    "Add your phone number (+5 points)".to_string()
}

fn has_linkedin(data: &ResumeData) -> bool {
    !data.links.linkedin.trim().is_empty()
}

fn linkedin_suggestion(_: &ResumeData) -> String {
    "Add your LinkedIn profile (+5 points)".to_string()
}

fn has_github(data: &ResumeData) -> bool {
    !data.links.github.trim().is_empty()
}

fn github_suggestion(_: &ResumeData) -> String {
    "Add your GitHub profile (+5 points)".to_string()
}

fn summary_has_action_verb(data: &ResumeData) -> bool {
    let summary = data.summary.to_lowercase();
    SUMMARY_ACTION_VERBS.iter().any(|verb| summary.contains(verb))
}

fn action_verb_suggestion(_: &ResumeData) -> String {
    "Use action verbs in your summary (built, led, designed, etc.) (+10 points)".to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Computes the ATS readiness score. Total over any resume, including the empty one.
pub fn calculate_ats_score(data: &ResumeData) -> AtsScore {
    let mut score = 0;
    let mut suggestions = Vec::new();

    for rule in RULES {
        if (rule.is_met)(data) {
            score += rule.points;
        } else {
            suggestions.push((rule.suggestion)(data));
        }
    }

    let score = score.min(MAX_SCORE);
    suggestions.truncate(MAX_SUGGESTIONS);
    let (label, color) = band(score);

    AtsScore {
        score,
        suggestions,
        label: label.to_string(),
        color,
    }
}

fn band(score: u32) -> (&'static str, ScoreColor) {
    match score {
        s if s >= 71 => ("Strong Resume", ScoreColor::Green),
        s if s >= 41 => ("Getting There", ScoreColor::Amber),
        _ => ("Needs Work", ScoreColor::Red),
    }
}
