use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::wizard::FinalSubmission;
use crate::wizard::gating::WizardProgress;
use crate::wizard::steps::STEPS;

pub const FINAL_SUBMISSION_KEY: &str = "rb_final_submission";
pub const INVALID_URL: &str = "Invalid URL";

pub const CHECKLIST_ITEMS: [&str; 10] = [
    "All form sections save to localStorage",
    "Live preview updates in real-time",
    "Template switching preserves data",
    "Color theme persists after refresh",
    "ATS score calculates correctly",
    "Score updates live on edit",
    "Export buttons work (copy/download)",
    "Empty states handled gracefully",
    "Mobile responsive layout works",
    "No console errors on any page",
];

const CORE_CAPABILITIES: [&str; 5] = [
    "Structured resume builder",
    "Deterministic ATS scoring",
    "Template switching",
    "PDF export with clean formatting",
    "Persistence + validation checklist",
];

const BANNER: &str = "------------------------------------------";

/// Storage key of checklist item `index` (1-based).
pub fn checklist_key(index: usize) -> String {
    format!("rb_checklist_item_{index}")
}

pub fn is_valid_checklist_index(index: usize) -> bool {
    (1..=CHECKLIST_ITEMS.len()).contains(&index)
}

// ────────────────────────────────────────────────────────────────────────────
// Links
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkField {
    Lovable,
    Github,
    Deploy,
}

impl FinalSubmission {
    pub fn link(&self, field: LinkField) -> &str {
        match field {
            LinkField::Lovable => &self.lovable_link,
            LinkField::Github => &self.github_link,
            LinkField::Deploy => &self.deploy_link,
        }
    }

    pub fn set_link(&mut self, field: LinkField, value: String) {
        match field {
            LinkField::Lovable => self.lovable_link = value,
            LinkField::Github => self.github_link = value,
            LinkField::Deploy => self.deploy_link = value,
        }
    }

    pub fn all_links_valid(&self) -> bool {
        [LinkField::Lovable, LinkField::Github, LinkField::Deploy]
            .into_iter()
            .all(|f| is_valid_url(self.link(f)))
    }
}

/// Non-blank and parses as an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    !value.trim().is_empty() && Url::parse(value).is_ok()
}

/// Inline field message. Empty input gets no message even though it fails the gate.
pub fn link_error(value: &str) -> Option<&'static str> {
    (!value.is_empty() && !is_valid_url(value)).then_some(INVALID_URL)
}

// ────────────────────────────────────────────────────────────────────────────
// Gate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionGate {
    pub all_steps_complete: bool,
    pub all_checklist_complete: bool,
    pub all_links_valid: bool,
}

impl SubmissionGate {
    pub fn evaluate(
        progress: &WizardProgress,
        checklist: &[bool],
        submission: &FinalSubmission,
    ) -> Self {
        Self {
            all_steps_complete: progress.all_complete(),
            all_checklist_complete: checklist.len() == CHECKLIST_ITEMS.len()
                && checklist.iter().all(|c| *c),
            all_links_valid: submission.all_links_valid(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.all_steps_complete && self.all_checklist_complete && self.all_links_valid
    }
}

/// Clipboard payload for the final submission.
pub fn final_submission_text(progress: &WizardProgress, submission: &FinalSubmission) -> String {
    let or_na = |s: &str| if s.is_empty() { "N/A".to_string() } else { s.to_string() };

    let mut lines = vec![
        BANNER.to_string(),
        "AI Resume Builder — Final Submission".to_string(),
        String::new(),
        format!("Lovable Project: {}", or_na(&submission.lovable_link)),
        format!("GitHub Repository: {}", or_na(&submission.github_link)),
        format!("Live Deployment: {}", or_na(&submission.deploy_link)),
        String::new(),
        "Build Track:".to_string(),
    ];
    for step in &STEPS {
        let status = if progress.is_complete(step) {
            "Complete"
        } else {
            "Missing"
        };
        lines.push(format!("- {} {}: {status}", &step.slug[..2], step.label));
    }
    lines.push(String::new());
    lines.push("Core Capabilities:".to_string());
    lines.extend(CORE_CAPABILITIES.iter().map(|c| format!("- {c}")));
    lines.push(BANNER.to_string());

    lines.join("\n")
}
