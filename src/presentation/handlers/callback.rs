use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{Job, JobId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct CallbackResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Artifact reference as delivered by the automation service:
/// `reply[0].File_url`.
pub fn extract_file_url(body: &Value) -> Option<String> {
    body.get("reply")?
        .as_array()?
        .first()?
        .get("File_url")?
        .as_str()
        .map(String::from)
}

/// Common callback flow: locate the job, apply the category-specific merge,
/// write it back. The acknowledgement concerns receipt, not business
/// outcome, so a merge that marks the job `failed` still returns success.
async fn run_callback<F>(state: &AppState, body: &Value, apply: F) -> Response
where
    F: FnOnce(&mut Job, &Value),
{
    let Some(job_id) = body.get("job_id").and_then(Value::as_str) else {
        tracing::warn!("Callback without job_id");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "job_id is required".to_string(),
            }),
        )
            .into_response();
    };

    let id = JobId::from_string(job_id);
    let mut job = match state.job_store.get(&id).await {
        Ok(Some(job)) => job,
        Ok(None) => {
            tracing::warn!(job_id = %id, "Callback for unknown job");
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Job not found".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(job_id = %id, error = %e, "Failed to fetch job for callback");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch job".to_string(),
                }),
            )
                .into_response();
        }
    };

    apply(&mut job, body);

    if let Err(e) = state.job_store.set(&id, &job).await {
        tracing::error!(job_id = %id, error = %e, "Failed to store callback result");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to update job".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(job_id = %id, status = %job.status, "Callback applied");
    (StatusCode::OK, Json(CallbackResponse { success: true })).into_response()
}

/// The landing analyzer is the one category with a required artifact: the
/// job completes only when the callback carries `reply[0].File_url`.
#[tracing::instrument(skip(state, body))]
pub async fn landing_analyzer_callback_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    run_callback(&state, &body, |job, body| match extract_file_url(body) {
        Some(file_url) => job.complete_with_file(file_url),
        None => job.mark_failed("No File_url received in callback"),
    })
    .await
}

#[tracing::instrument(skip(state, body))]
pub async fn seo_callback_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    run_callback(&state, &body, |job, body| {
        job.complete_with_result(body.clone());
    })
    .await
}

/// Stores the whole response and additionally lifts the artifact URL out of
/// the reply for easier client access.
#[tracing::instrument(skip(state, body))]
pub async fn website_intelligence_callback_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    run_callback(&state, &body, |job, body| {
        job.complete_with_result(body.clone());
        if let Some(file_url) = extract_file_url(body) {
            job.file_url = Some(file_url);
        }
    })
    .await
}

#[tracing::instrument(skip_all, fields(category = %category))]
pub async fn generic_callback_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    run_callback(&state, &body, |job, body| {
        job.complete_with_result(body.clone());
    })
    .await
}
