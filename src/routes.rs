//! REST endpoints for the profile, submission, and skill suggestions.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::pipeline::{SubmitError, SubmitPipeline};
use crate::profile::{DEFAULT_USER, UserProfile, skill_catalog, split_skills, validate_all};
use crate::store::ProfileStore;

/// Shared state for the API routes.
#[derive(Clone)]
pub struct ApiState {
    pub pipeline: Arc<SubmitPipeline>,
    pub store: Arc<dyn ProfileStore>,
}

/// GET /api/profile
///
/// Returns the stored profile and analysis, or 404 if none exists.
async fn get_profile(State(state): State<ApiState>) -> impl IntoResponse {
    match state.store.get_profile(DEFAULT_USER).await {
        Ok(Some(stored)) => Json(json!({
            "profile": stored.profile,
            "analysis": stored.analysis,
            "updatedAt": stored.updated_at,
        }))
        .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "No profile exists yet"})),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to load profile: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to load profile"})),
            )
                .into_response()
        }
    }
}

/// POST /api/profile/submit
///
/// Validates the profile (all rules, first failure wins), runs the analysis
/// pipeline, and returns the analysis. 422 on validation failure, 409 when
/// a submission is already in flight, 502 when the provider fails.
async fn submit_profile(
    State(state): State<ApiState>,
    Json(profile): Json<UserProfile>,
) -> impl IntoResponse {
    if let Err(err) = validate_all(&profile) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": err.message, "step": err.step})),
        )
            .into_response();
    }

    match state.pipeline.submit(DEFAULT_USER, &profile).await {
        Ok(analysis) => Json(analysis).into_response(),
        Err(SubmitError::Busy) => (
            StatusCode::CONFLICT,
            Json(json!({"error": "A submission is already in progress"})),
        )
            .into_response(),
        Err(SubmitError::Analysis(e)) => {
            tracing::error!("Analysis failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "Something went wrong with the AI analysis. Please try again."
                })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct SuggestParams {
    /// Typeahead input.
    q: String,
    /// Current serialized skills value, to exclude already-selected tags.
    #[serde(default)]
    selected: String,
}

/// GET /api/skills/suggest?q=...&selected=...
async fn suggest_skills(Query(params): Query<SuggestParams>) -> impl IntoResponse {
    let selected = split_skills(&params.selected);
    Json(skill_catalog().suggest(&params.q, &selected))
}

/// Build the API router.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/profile/submit", post(submit_profile))
        .route("/api/skills/suggest", get(suggest_skills))
        .with_state(state)
}
