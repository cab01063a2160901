use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proof that a build-track step was attempted. Stored under `rb_step_{n}_artifact`
/// and replaced wholesale on re-upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredArtifact {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// The three proof links, persisted as one record under `rb_final_submission`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinalSubmission {
    pub lovable_link: String,
    pub github_link: String,
    pub deploy_link: String,
}
