pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::resume::handlers as resume;
use crate::scoring::handlers as scoring;
use crate::state::AppState;
use crate::templates::handlers as templates;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume editor
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume)
                .patch(resume::handle_patch_resume)
                .put(resume::handle_replace_resume),
        )
        .route("/api/v1/resume/sample", post(resume::handle_load_sample))
        .route("/api/v1/resume/export", get(resume::handle_export))
        .route("/api/v1/resume/validate", get(resume::handle_validate))
        // Scoring
        .route("/api/v1/resume/score", get(scoring::handle_score))
        .route(
            "/api/v1/resume/improvements",
            get(scoring::handle_improvements),
        )
        .route(
            "/api/v1/bullets/analyze",
            post(scoring::handle_analyze_bullet),
        )
        // Presentation
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/preferences",
            get(templates::handle_get_preferences).put(templates::handle_put_preferences),
        )
        // Build track
        .route("/rb/steps", get(wizard::handle_list_steps))
        .route("/rb/proof", get(wizard::handle_proof))
        .route(
            "/rb/proof/links/:field",
            put(wizard::handle_set_link),
        )
        .route(
            "/rb/proof/checklist/:index",
            put(wizard::handle_set_checklist_item),
        )
        .route(
            "/rb/proof/submission",
            get(wizard::handle_final_submission),
        )
        .route("/rb/:slug", get(wizard::handle_visit_step))
        .route("/rb/:slug/artifact", post(wizard::handle_upload_artifact))
        .with_state(state)
}
