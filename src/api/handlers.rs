use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::CatalogStats;
use crate::error::AppResult;
use crate::locale::Locale;
use crate::middleware::RequestId;
use crate::models::{Recommendation, RecommendationRequest};
use crate::services::recommend;

use super::quiz::QuizSchema;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<Locale>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Quiz form description, localized
pub async fn get_quiz(
    State(state): State<AppState>,
    query: Result<Query<LocaleQuery>, QueryRejection>,
) -> AppResult<Json<QuizSchema>> {
    let Query(query) = query?;
    let locale = query.locale.unwrap_or(state.settings.default_locale);
    Ok(Json(QuizSchema::build(locale)))
}

/// Runs the recommendation pipeline for one quiz submission
pub async fn create_recommendation(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<Recommendation>> {
    let Json(request) = body?;

    tracing::info!(
        request_id = %request_id,
        genre_choice = ?request.genre_choice,
        "Processing recommendation request"
    );

    let recommendation = recommend(&state.catalog, &request, &state.settings);

    Ok(Json(recommendation))
}

/// Catalog summary
pub async fn get_catalog_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}
