//! Axum route handlers for the scoring API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::resume::handlers::UserIdQuery;
use crate::resume::repository::ResumeStore;
use crate::scoring::ats::{calculate_ats_score, AtsScore};
use crate::scoring::bullets::{analyze_bullet, BulletGuidance};
use crate::scoring::improvements::top_improvements;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeBulletRequest {
    pub text: String,
}

/// GET /api/v1/resume/score
pub async fn handle_score(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AtsScore>, AppError> {
    let data = ResumeStore::new(state.namespace(params.user_id)).load().await?;
    Ok(Json(calculate_ats_score(&data)))
}

/// GET /api/v1/resume/improvements
pub async fn handle_improvements(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let data = ResumeStore::new(state.namespace(params.user_id)).load().await?;
    Ok(Json(top_improvements(&data)))
}

/// POST /api/v1/bullets/analyze
///
/// Stateless; called on every keystroke by the editor.
pub async fn handle_analyze_bullet(
    Json(request): Json<AnalyzeBulletRequest>,
) -> Json<BulletGuidance> {
    Json(analyze_bullet(&request.text))
}
