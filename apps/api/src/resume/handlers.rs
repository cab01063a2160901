use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::plain_text::to_plain_text;
use crate::export::validation::{validate_resume, ValidationReport};
use crate::models::resume::ResumeData;
use crate::resume::patch::ResumePatch;
use crate::resume::repository::ResumeStore;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct ExportResponse {
    pub text: String,
    pub validation: ValidationReport,
}

fn resumes(state: &AppState, user_id: Uuid) -> ResumeStore {
    ResumeStore::new(state.namespace(user_id))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeData>, AppError> {
    Ok(Json(resumes(&state, params.user_id).load().await?))
}

/// PATCH /api/v1/resume
pub async fn handle_patch_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(patch): Json<ResumePatch>,
) -> Result<Json<ResumeData>, AppError> {
    Ok(Json(resumes(&state, params.user_id).apply(patch).await?))
}

/// PUT /api/v1/resume
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(data): Json<ResumeData>,
) -> Result<Json<ResumeData>, AppError> {
    Ok(Json(resumes(&state, params.user_id).replace(data).await?))
}

/// POST /api/v1/resume/sample
pub async fn handle_load_sample(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeData>, AppError> {
    Ok(Json(resumes(&state, params.user_id).load_sample().await?))
}

/// GET /api/v1/resume/export
///
/// Validation warnings ride along with the text; they never block the export.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ExportResponse>, AppError> {
    let data = resumes(&state, params.user_id).load().await?;
    Ok(Json(ExportResponse {
        text: to_plain_text(&data),
        validation: validate_resume(&data),
    }))
}

/// GET /api/v1/resume/validate
pub async fn handle_validate(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ValidationReport>, AppError> {
    let data = resumes(&state, params.user_id).load().await?;
    Ok(Json(validate_resume(&data)))
}
