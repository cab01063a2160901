use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::models::wizard::{FinalSubmission, StoredArtifact};
use crate::store::Namespaced;
use crate::wizard::gating::WizardProgress;
use crate::wizard::steps::{Step, STEPS};
use crate::wizard::submission::{
    checklist_key, is_valid_checklist_index, LinkField, CHECKLIST_ITEMS, FINAL_SUBMISSION_KEY,
};

/// Reads and writes one user's build-track records.
pub struct WizardStore {
    ns: Namespaced,
}

impl WizardStore {
    pub fn new(ns: Namespaced) -> Self {
        Self { ns }
    }

    pub async fn progress(&self) -> Result<WizardProgress, AppError> {
        let mut artifacts = Vec::with_capacity(STEPS.len());
        for step in &STEPS {
            artifacts.push(self.ns.get_json::<StoredArtifact>(&step.artifact_key()).await?);
        }
        Ok(WizardProgress::new(artifacts))
    }

    /// Creates or overwrites this step's artifact. Other steps are untouched.
    pub async fn record_artifact(
        &self,
        step: &Step,
        file_name: Option<String>,
    ) -> Result<StoredArtifact, AppError> {
        let now = Utc::now();
        let artifact = StoredArtifact {
            id: format!("{}-{}", step.slug, now.timestamp_millis()),
            file_name,
            uploaded_at: now,
        };
        self.ns.set_json(&step.artifact_key(), &artifact).await?;
        info!("Recorded artifact {} for {}", artifact.id, step.slug);
        Ok(artifact)
    }

    /// Anything other than the literal "true" reads as unchecked.
    pub async fn checklist(&self) -> Result<Vec<bool>, AppError> {
        let mut items = Vec::with_capacity(CHECKLIST_ITEMS.len());
        for index in 1..=CHECKLIST_ITEMS.len() {
            let raw = self.ns.get(&checklist_key(index)).await?;
            items.push(raw.as_deref() == Some("true"));
        }
        Ok(items)
    }

    pub async fn set_checklist_item(&self, index: usize, checked: bool) -> Result<(), AppError> {
        if !is_valid_checklist_index(index) {
            return Err(AppError::NotFound(format!("Checklist item {index} not found")));
        }
        let value = if checked { "true" } else { "false" };
        self.ns.set(&checklist_key(index), value).await
    }

    pub async fn submission(&self) -> Result<FinalSubmission, AppError> {
        Ok(self
            .ns
            .get_json::<FinalSubmission>(FINAL_SUBMISSION_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Writes one link and persists the whole record.
    pub async fn set_link(
        &self,
        field: LinkField,
        value: String,
    ) -> Result<FinalSubmission, AppError> {
        let mut submission = self.submission().await?;
        submission.set_link(field, value);
        self.ns.set_json(FINAL_SUBMISSION_KEY, &submission).await?;
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};
    use std::sync::Arc;
    use uuid::Uuid;

    fn wizard() -> WizardStore {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        WizardStore::new(Namespaced::for_user(kv, Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_record_artifact_touches_only_its_step() {
        let store = wizard();
        let artifact = store
            .record_artifact(&STEPS[2], Some("diagram.png".into()))
            .await
            .unwrap();
        assert!(artifact.id.starts_with("03-architecture-"));

        let progress = store.progress().await.unwrap();
        assert!(progress.is_complete(&STEPS[2]));
        assert_eq!(
            STEPS.iter().filter(|s| progress.is_complete(s)).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_corrupt_artifact_reads_as_absent() {
        let store = wizard();
        store.ns.set(&STEPS[0].artifact_key(), "not json").await.unwrap();
        assert!(!store.progress().await.unwrap().is_complete(&STEPS[0]));
    }

    #[tokio::test]
    async fn test_checklist_round_trip() {
        let store = wizard();
        assert_eq!(store.checklist().await.unwrap(), vec![false; 10]);
        store.set_checklist_item(2, true).await.unwrap();
        store.set_checklist_item(3, false).await.unwrap();

        let items = store.checklist().await.unwrap();
        assert!(items[1]);
        assert!(!items[2]);
        assert_eq!(
            store.ns.get("rb_checklist_item_2").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_checklist_index_out_of_range() {
        let store = wizard();
        assert!(store.set_checklist_item(0, true).await.is_err());
        assert!(store.set_checklist_item(11, true).await.is_err());
    }

    #[tokio::test]
    async fn test_set_link_keeps_other_links() {
        let store = wizard();
        store
            .set_link(LinkField::Github, "https://github.com/me".into())
            .await
            .unwrap();
        let sub = store
            .set_link(LinkField::Deploy, "https://me.dev".into())
            .await
            .unwrap();
        assert_eq!(sub.github_link, "https://github.com/me");
        assert_eq!(store.submission().await.unwrap(), sub);
    }
}
