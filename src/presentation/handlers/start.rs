use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StartResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
pub struct UrlStartRequest {
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct WebsiteIntelligenceStartRequest {
    pub company_name: Option<String>,
    pub website_url: Option<String>,
    pub number_documents: Option<u32>,
}

/// Callback URL derived from the inbound request's own host and protocol,
/// pointed at this system's callback endpoint for the same category.
fn callback_url(headers: &HeaderMap, category: &str) -> String {
    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get(header::HOST))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let protocol = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("https");
    format!("{}://{}/api/{}/callback", protocol, host, category)
}

fn bad_request(error: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Common start flow once the category-specific payloads are shaped:
/// dispatch through the service and translate the outcome to HTTP.
async fn run_start(
    state: &AppState,
    category: &str,
    request_fields: Value,
    outbound: Value,
    headers: &HeaderMap,
    started_message: &str,
    failure_message: &str,
) -> Response {
    let webhook_url = match state.registry.url_for(category) {
        Some(url) => url,
        None => {
            return bad_request(format!("Unknown agent type: {}", category));
        }
    };

    let callback = callback_url(headers, category);

    match state
        .dispatch_service
        .start_job(request_fields, outbound, &webhook_url, &callback)
        .await
    {
        Ok(id) => (
            StatusCode::OK,
            Json(StartResponse {
                job_id: id.to_string(),
                status: "started".to_string(),
                message: started_message.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(category = %category, error = %e, "Start request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: failure_message.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state, headers, body))]
pub async fn landing_analyzer_start_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UrlStartRequest>,
) -> Response {
    let Some(url) = body.url.filter(|u| !u.is_empty()) else {
        return bad_request("URL is required");
    };

    run_start(
        &state,
        "landing-analyzer",
        json!({ "url": url }),
        json!({ "website_url": url }),
        &headers,
        "Analysis started successfully",
        "Failed to start analysis",
    )
    .await
}

#[tracing::instrument(skip(state, headers, body))]
pub async fn seo_start_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UrlStartRequest>,
) -> Response {
    let Some(url) = body.url.filter(|u| !u.is_empty()) else {
        return bad_request("URL is required");
    };

    run_start(
        &state,
        "seo",
        json!({ "url": url }),
        json!({ "website_url": url }),
        &headers,
        "SEO analysis started successfully",
        "Failed to start SEO analysis",
    )
    .await
}

#[tracing::instrument(skip(state, headers, body))]
pub async fn website_intelligence_start_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<WebsiteIntelligenceStartRequest>,
) -> Response {
    let company_name = body.company_name.filter(|v| !v.is_empty());
    let website_url = body.website_url.filter(|v| !v.is_empty());
    let (Some(company_name), Some(website_url)) = (company_name, website_url) else {
        return bad_request("Company name and website URL are required");
    };
    let number_documents = body.number_documents.unwrap_or(5);

    let fields = json!({
        "company_name": company_name,
        "website_url": website_url,
        "number_documents": number_documents,
    });

    run_start(
        &state,
        "website-intelligence",
        fields.clone(),
        fields,
        &headers,
        "Website intelligence analysis started successfully",
        "Failed to start website intelligence analysis",
    )
    .await
}

/// Parametrized start for the remaining registry categories: the body is
/// forwarded verbatim (plus job identifier and callback URL) and recorded
/// under `data` alongside an optional target URL.
#[tracing::instrument(skip_all, fields(category = %category))]
pub async fn generic_start_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let Some(object) = body.as_object() else {
        return bad_request("JSON object body is required");
    };

    let url = object
        .get("url")
        .and_then(Value::as_str)
        .unwrap_or("N/A")
        .to_string();
    let data: Map<String, Value> = object
        .iter()
        .filter(|(k, _)| k.as_str() != "url")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    let fields = json!({
        "agentType": category,
        "url": url,
        "data": data,
    });

    let started = format!("{} analysis started", category);
    let failed = format!("Failed to start {} analysis", category);

    run_start(&state, &category, fields, body.clone(), &headers, &started, &failed).await
}
