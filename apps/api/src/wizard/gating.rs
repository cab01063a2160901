use serde::Serialize;

use crate::models::wizard::StoredArtifact;
use crate::wizard::steps::{Step, STEPS, STEP_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Complete,
    Unlocked,
    Locked,
}

/// Outcome of the navigation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Allow,
    Redirect(&'static Step),
}

/// Artifact records of all eight steps as read from storage.
#[derive(Debug, Clone, Default)]
pub struct WizardProgress {
    artifacts: Vec<Option<StoredArtifact>>,
}

impl WizardProgress {
    /// `artifacts[i]` belongs to step `i + 1`. Missing trailing entries count as absent.
    pub fn new(mut artifacts: Vec<Option<StoredArtifact>>) -> Self {
        artifacts.resize(STEP_COUNT, None);
        Self { artifacts }
    }

    pub fn artifact(&self, step: &Step) -> Option<&StoredArtifact> {
        self.artifacts
            .get(step.number - 1)
            .and_then(Option::as_ref)
    }

    pub fn is_complete(&self, step: &Step) -> bool {
        self.artifact(step).is_some()
    }

    pub fn all_complete(&self) -> bool {
        STEPS.iter().all(|s| self.is_complete(s))
    }

    /// First incomplete step strictly before `step`.
    pub fn first_incomplete_before(&self, step: &Step) -> Option<&'static Step> {
        STEPS[..step.number - 1]
            .iter()
            .find(|s| !self.is_complete(s))
    }

    pub fn first_incomplete(&self) -> Option<&'static Step> {
        STEPS.iter().find(|s| !self.is_complete(s))
    }

    pub fn status(&self, step: &Step) -> StepStatus {
        if self.is_complete(step) {
            StepStatus::Complete
        } else if self.first_incomplete_before(step).is_none() {
            StepStatus::Unlocked
        } else {
            StepStatus::Locked
        }
    }

    /// Applied on every visit, so a typed-in URL cannot skip ahead.
    pub fn guard_visit(&self, step: &Step) -> Visit {
        match self.first_incomplete_before(step) {
            Some(target) => Visit::Redirect(target),
            None => Visit::Allow,
        }
    }

    /// The proof page requires all eight steps.
    pub fn guard_proof(&self) -> Visit {
        match self.first_incomplete() {
            Some(target) => Visit::Redirect(target),
            None => Visit::Allow,
        }
    }

    pub fn can_go_next(&self, step: &Step) -> bool {
        self.is_complete(step) && !step.is_last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn artifact(step: &Step) -> StoredArtifact {
        StoredArtifact {
            id: format!("{}-1", step.slug),
            file_name: None,
            uploaded_at: Utc::now(),
        }
    }

    fn completed(count: usize) -> WizardProgress {
        WizardProgress::new(STEPS[..count].iter().map(|s| Some(artifact(s))).collect())
    }

    #[test]
    fn test_fresh_track_only_unlocks_first_step() {
        let progress = WizardProgress::default();
        assert_eq!(progress.status(&STEPS[0]), StepStatus::Unlocked);
        for step in &STEPS[1..] {
            assert_eq!(progress.status(step), StepStatus::Locked);
        }
    }

    #[test]
    fn test_direct_visit_redirects_to_first_incomplete() {
        let progress = WizardProgress::default();
        assert_eq!(progress.guard_visit(&STEPS[4]), Visit::Redirect(&STEPS[0]));
        assert_eq!(progress.guard_visit(&STEPS[0]), Visit::Allow);
    }

    #[test]
    fn test_visit_allowed_once_prior_steps_complete() {
        let progress = completed(4);
        assert_eq!(progress.guard_visit(&STEPS[4]), Visit::Allow);
        assert_eq!(progress.status(&STEPS[4]), StepStatus::Unlocked);
        assert_eq!(progress.status(&STEPS[5]), StepStatus::Locked);
    }

    #[test]
    fn test_gap_redirects_to_the_gap() {
        let mut artifacts: Vec<_> = STEPS.iter().map(|s| Some(artifact(s))).collect();
        artifacts[2] = None;
        let progress = WizardProgress::new(artifacts);
        assert_eq!(progress.guard_visit(&STEPS[6]), Visit::Redirect(&STEPS[2]));
        assert_eq!(progress.guard_proof(), Visit::Redirect(&STEPS[2]));
        // Later steps keep their own artifacts but are locked behind the gap.
        assert_eq!(progress.status(&STEPS[5]), StepStatus::Complete);
    }

    #[test]
    fn test_any_parsed_artifact_completes_its_step() {
        let mut blank = artifact(&STEPS[0]);
        blank.id.clear();
        blank.file_name = None;
        let progress = WizardProgress::new(vec![Some(blank)]);
        assert!(progress.is_complete(&STEPS[0]));
        assert_eq!(progress.guard_visit(&STEPS[1]), Visit::Allow);
    }

    #[test]
    fn test_next_requires_artifact_and_not_last() {
        let progress = completed(STEP_COUNT);
        assert!(progress.can_go_next(&STEPS[0]));
        assert!(!progress.can_go_next(&STEPS[7]));
        assert!(!WizardProgress::default().can_go_next(&STEPS[0]));
        assert_eq!(progress.guard_proof(), Visit::Allow);
    }
}
