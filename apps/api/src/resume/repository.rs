use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::resume::patch::{apply_patch, check_resume, ResumePatch};
use crate::resume::sample::sample_resume;
use crate::store::Namespaced;

pub const RESUME_KEY: &str = "resumeBuilderData";

/// The single owner of one user's resume aggregate.
///
/// Reads fall back to the empty resume when nothing usable is stored. Every
/// mutation writes the whole aggregate back immediately; there is no separate
/// save step.
pub struct ResumeStore {
    ns: Namespaced,
}

impl ResumeStore {
    pub fn new(ns: Namespaced) -> Self {
        Self { ns }
    }

    pub async fn load(&self) -> Result<ResumeData, AppError> {
        Ok(self
            .ns
            .get_json::<ResumeData>(RESUME_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn save(&self, data: &ResumeData) -> Result<(), AppError> {
        self.ns.set_json(RESUME_KEY, data).await
    }

    /// Loads, applies one patch, persists. Nothing is written if the patch fails.
    pub async fn apply(&self, patch: ResumePatch) -> Result<ResumeData, AppError> {
        let op = patch.op_name();
        let mut data = self.load().await?;
        apply_patch(&mut data, patch)?;
        self.save(&data).await?;
        debug!("Applied resume patch '{op}'");
        Ok(data)
    }

    /// Replaces the aggregate wholesale. Rejected without writing if ids are
    /// missing or repeated, or a project description is over the cap.
    pub async fn replace(&self, data: ResumeData) -> Result<ResumeData, AppError> {
        check_resume(&data)?;
        self.save(&data).await?;
        Ok(data)
    }

    pub async fn load_sample(&self) -> Result<ResumeData, AppError> {
        let data = sample_resume();
        self.save(&data).await?;
        info!("Loaded sample resume");
        Ok(data)
    }
}
