use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::resume::handlers::UserIdQuery;
use crate::state::AppState;
use crate::templates::preferences::{load_preferences, save_preferences, Preferences};
use crate::templates::registry::{ColorTheme, TemplateStyles, TemplateType};

#[derive(Serialize)]
pub struct TemplateInfo {
    pub id: TemplateType,
    pub styles: TemplateStyles,
}

#[derive(Serialize)]
pub struct ColorInfo {
    pub id: ColorTheme,
    pub hsl: &'static str,
}

#[derive(Serialize)]
pub struct TemplateCatalog {
    pub templates: Vec<TemplateInfo>,
    pub colors: Vec<ColorInfo>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<TemplateCatalog> {
    Json(TemplateCatalog {
        templates: TemplateType::ALL
            .into_iter()
            .map(|id| TemplateInfo {
                id,
                styles: id.styles(),
            })
            .collect(),
        colors: ColorTheme::ALL
            .into_iter()
            .map(|id| ColorInfo { id, hsl: id.hsl() })
            .collect(),
    })
}

/// GET /api/v1/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Preferences>, AppError> {
    let ns = state.namespace(params.user_id);
    Ok(Json(load_preferences(&ns).await?))
}

/// PUT /api/v1/preferences
///
/// Unknown template or color ids are rejected by the JSON extractor.
pub async fn handle_put_preferences(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(prefs): Json<Preferences>,
) -> Result<Json<Preferences>, AppError> {
    let ns = state.namespace(params.user_id);
    save_preferences(&ns, prefs).await?;
    Ok(Json(prefs))
}
