use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::JobId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
pub struct StatusQuery {
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
}

/// Job identifiers are unique across categories, so the lookup ignores the
/// category segment: it exists only to mirror the start/callback routes.
async fn lookup(state: &AppState, job_id: &str) -> Response {
    let id = JobId::from_string(job_id);
    match state.job_store.get(&id).await {
        Ok(Some(job)) => (StatusCode::OK, Json(job)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Job not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(job_id = %id, error = %e, "Failed to fetch job status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch job".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// `GET /api/{category}/status?jobId=<id>`
#[tracing::instrument(skip_all, fields(category = %category))]
pub async fn status_query_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Response {
    let Some(job_id) = query.job_id.filter(|v| !v.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "jobId query parameter is required".to_string(),
            }),
        )
            .into_response();
    };
    lookup(&state, &job_id).await
}

/// `GET /api/{category}/status/{job_id}`
#[tracing::instrument(skip_all, fields(category = %category, job_id = %job_id))]
pub async fn status_path_handler(
    State(state): State<AppState>,
    Path((category, job_id)): Path<(String, String)>,
) -> Response {
    lookup(&state, &job_id).await
}
