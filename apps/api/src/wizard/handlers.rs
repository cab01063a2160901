//! Axum route handlers for the build track and proof page.

use axum::{
    extract::{Multipart, Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::wizard::StoredArtifact;
use crate::resume::handlers::UserIdQuery;
use crate::state::AppState;
use crate::wizard::gating::{StepStatus, Visit, WizardProgress};
use crate::wizard::repository::WizardStore;
use crate::wizard::steps::{step_by_slug, Step, STEPS};
use crate::wizard::submission::{
    final_submission_text, link_error, LinkField, SubmissionGate, CHECKLIST_ITEMS,
};

#[derive(Serialize)]
pub struct StepView {
    pub number: usize,
    pub slug: &'static str,
    pub label: &'static str,
    pub status: StepStatus,
}

impl StepView {
    fn new(step: &Step, progress: &WizardProgress) -> Self {
        Self {
            number: step.number,
            slug: step.slug,
            label: step.label,
            status: progress.status(step),
        }
    }
}

#[derive(Serialize)]
pub struct StepPageView {
    pub title: String,
    pub status_line: String,
    pub artifact_key: String,
    pub artifact: Option<StoredArtifact>,
    pub can_go_next: bool,
    /// Path of the next step, or the proof page after the last step.
    pub next_path: String,
}

#[derive(Serialize)]
pub struct ChecklistItemView {
    pub index: usize,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Serialize)]
pub struct LinkView {
    pub value: String,
    pub error: Option<&'static str>,
}

impl LinkView {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            error: link_error(value),
        }
    }
}

#[derive(Serialize)]
pub struct ProofView {
    pub steps: Vec<StepView>,
    pub checklist: Vec<ChecklistItemView>,
    pub lovable: LinkView,
    pub github: LinkView,
    pub deploy: LinkView,
    pub gate: SubmissionGate,
    pub shipped: bool,
}

#[derive(Deserialize)]
pub struct LinkUpdate {
    pub value: String,
}

#[derive(Deserialize)]
pub struct ChecklistUpdate {
    pub checked: bool,
}

#[derive(Serialize)]
pub struct SubmissionResponse {
    pub text: String,
}

fn wizard(state: &AppState, params: &UserIdQuery) -> WizardStore {
    WizardStore::new(state.namespace(params.user_id))
}

fn resolve_step(slug: &str) -> Result<&'static Step, AppError> {
    step_by_slug(slug).ok_or_else(|| AppError::NotFound(format!("Step {slug} not found")))
}

fn checklist_views(checklist: &[bool]) -> Vec<ChecklistItemView> {
    CHECKLIST_ITEMS
        .iter()
        .zip(checklist)
        .enumerate()
        .map(|(i, (label, checked))| ChecklistItemView {
            index: i + 1,
            label: *label,
            checked: *checked,
        })
        .collect()
}

/// GET /rb/steps
pub async fn handle_list_steps(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<StepView>>, AppError> {
    let progress = wizard(&state, &params).progress().await?;
    Ok(Json(STEPS.iter().map(|s| StepView::new(s, &progress)).collect()))
}

/// GET /rb/:slug
///
/// Redirects (307) to the first incomplete earlier step instead of rendering.
pub async fn handle_visit_step(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Response, AppError> {
    let step = resolve_step(&slug)?;
    let progress = wizard(&state, &params).progress().await?;

    if let Visit::Redirect(target) = progress.guard_visit(step) {
        return Ok(Redirect::temporary(&target.path_for(params.user_id)).into_response());
    }

    let next_path = step
        .next()
        .map(Step::path)
        .unwrap_or_else(|| "/rb/proof".to_string());

    Ok(Json(StepPageView {
        title: step.title(),
        status_line: step.status_line(),
        artifact_key: step.artifact_key(),
        artifact: progress.artifact(step).cloned(),
        can_go_next: progress.can_go_next(step),
        next_path,
    })
    .into_response())
}

/// POST /rb/:slug/artifact
///
/// Takes the first multipart field; its file name, if any, is recorded.
/// The upload body itself is not kept.
pub async fn handle_upload_artifact(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<UserIdQuery>,
    mut multipart: Multipart,
) -> Result<Json<StoredArtifact>, AppError> {
    let step = resolve_step(&slug)?;
    let store = wizard(&state, &params);

    if let Visit::Redirect(target) = store.progress().await?.guard_visit(step) {
        return Err(AppError::UnprocessableEntity(format!(
            "{} is locked until {} is complete",
            step.title(),
            target.title()
        )));
    }

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    let file_name = field
        .file_name()
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    let artifact = store.record_artifact(step, file_name).await?;
    Ok(Json(artifact))
}

/// GET /rb/proof
pub async fn handle_proof(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Response, AppError> {
    let store = wizard(&state, &params);
    let progress = store.progress().await?;

    if let Visit::Redirect(target) = progress.guard_proof() {
        return Ok(Redirect::temporary(&target.path_for(params.user_id)).into_response());
    }

    let checklist = store.checklist().await?;
    let submission = store.submission().await?;
    let gate = SubmissionGate::evaluate(&progress, &checklist, &submission);

    Ok(Json(ProofView {
        steps: STEPS.iter().map(|s| StepView::new(s, &progress)).collect(),
        checklist: checklist_views(&checklist),
        lovable: LinkView::new(&submission.lovable_link),
        github: LinkView::new(&submission.github_link),
        deploy: LinkView::new(&submission.deploy_link),
        gate,
        shipped: gate.is_open(),
    })
    .into_response())
}

/// PUT /rb/proof/links/:field
///
/// Invalid URLs are stored as typed and reported inline; they only hold the gate shut.
pub async fn handle_set_link(
    State(state): State<AppState>,
    Path(field): Path<LinkField>,
    Query(params): Query<UserIdQuery>,
    Json(update): Json<LinkUpdate>,
) -> Result<Json<LinkView>, AppError> {
    let submission = wizard(&state, &params).set_link(field, update.value).await?;
    Ok(Json(LinkView::new(submission.link(field))))
}

/// PUT /rb/proof/checklist/:index
pub async fn handle_set_checklist_item(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(params): Query<UserIdQuery>,
    Json(update): Json<ChecklistUpdate>,
) -> Result<Json<ChecklistItemView>, AppError> {
    wizard(&state, &params)
        .set_checklist_item(index, update.checked)
        .await?;
    Ok(Json(ChecklistItemView {
        index,
        label: CHECKLIST_ITEMS[index - 1],
        checked: update.checked,
    }))
}

/// GET /rb/proof/submission
pub async fn handle_final_submission(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let store = wizard(&state, &params);
    let progress = store.progress().await?;
    let checklist = store.checklist().await?;
    let submission = store.submission().await?;

    if !SubmissionGate::evaluate(&progress, &checklist, &submission).is_open() {
        return Err(AppError::UnprocessableEntity(
            "Final submission requires all steps, all checklist items and three valid links"
                .to_string(),
        ));
    }

    Ok(Json(SubmissionResponse {
        text: final_submission_text(&progress, &submission),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::routes::build_router;
    use crate::state::AppState;

    fn app() -> Router {
        build_router(AppState::in_memory())
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: String,
        body: Option<(&str, String)>,
    ) -> axum::response::Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some((content_type, body)) => builder
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn upload(app: &Router, user: Uuid, slug: &str) -> StatusCode {
        let body = "--XBOUNDARY\r\n\
                    Content-Disposition: form-data; name=\"file\"; filename=\"proof.png\"\r\n\
                    Content-Type: image/png\r\n\r\n\
                    png-bytes\r\n\
                    --XBOUNDARY--\r\n"
            .to_string();
        send(
            app,
            "POST",
            format!("/rb/{slug}/artifact?user_id={user}"),
            Some(("multipart/form-data; boundary=XBOUNDARY", body)),
        )
        .await
        .status()
    }

    fn location(response: &axum::response::Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_skipping_ahead_redirects_to_step_one() {
        let app = app();
        let user = Uuid::new_v4();
        let response = send(&app, "GET", format!("/rb/05-lld?user_id={user}"), None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), format!("/rb/01-problem?user_id={user}"));

        let followed = send(&app, "GET", location(&response).to_string(), None).await;
        assert_eq!(followed.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_completed_prior_steps_allow_visit() {
        let app = app();
        let user = Uuid::new_v4();
        for slug in ["01-problem", "02-market", "03-architecture", "04-hld"] {
            assert_eq!(upload(&app, user, slug).await, StatusCode::OK);
        }
        let response = send(&app, "GET", format!("/rb/05-lld?user_id={user}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_to_locked_step_is_rejected() {
        let app = app();
        let user = Uuid::new_v4();
        assert_eq!(
            upload(&app, user, "02-market").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_unknown_step_is_not_found() {
        let app = app();
        let uri = format!("/rb/09-launch?user_id={}", Uuid::new_v4());
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_proof_redirects_until_all_steps_complete() {
        let app = app();
        let user = Uuid::new_v4();
        assert_eq!(upload(&app, user, "01-problem").await, StatusCode::OK);
        let response = send(&app, "GET", format!("/rb/proof?user_id={user}"), None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), format!("/rb/02-market?user_id={user}"));

        let followed = send(&app, "GET", location(&response).to_string(), None).await;
        assert_eq!(followed.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_submission_opens_when_last_checklist_item_checked() {
        let app = app();
        let user = Uuid::new_v4();
        for step in crate::wizard::steps::STEPS.iter() {
            assert_eq!(upload(&app, user, step.slug).await, StatusCode::OK);
        }
        for (field, value) in [
            ("lovable", "https://app.lovable.dev/p/1"),
            ("github", "https://github.com/me/rb"),
            ("deploy", "https://rb.example.app"),
        ] {
            let response = send(
                &app,
                "PUT",
                format!("/rb/proof/links/{field}?user_id={user}"),
                Some(("application/json", format!(r#"{{"value":"{value}"}}"#))),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);
        }
        for index in 1..=9 {
            send(
                &app,
                "PUT",
                format!("/rb/proof/checklist/{index}?user_id={user}"),
                Some(("application/json", r#"{"checked":true}"#.to_string())),
            )
            .await;
        }

        let submission_uri = format!("/rb/proof/submission?user_id={user}");
        let closed = send(&app, "GET", submission_uri.clone(), None).await;
        assert_eq!(closed.status(), StatusCode::UNPROCESSABLE_ENTITY);

        send(
            &app,
            "PUT",
            format!("/rb/proof/checklist/10?user_id={user}"),
            Some(("application/json", r#"{"checked":true}"#.to_string())),
        )
        .await;
        let open = send(&app, "GET", submission_uri, None).await;
        assert_eq!(open.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_checklist_index_out_of_range_is_not_found() {
        let app = app();
        let response = send(
            &app,
            "PUT",
            format!("/rb/proof/checklist/11?user_id={}", Uuid::new_v4()),
            Some(("application/json", r#"{"checked":true}"#.to_string())),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
