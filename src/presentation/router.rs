use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    generic_callback_handler, generic_start_handler, health_handler,
    landing_analyzer_callback_handler, landing_analyzer_start_handler, seo_callback_handler,
    seo_start_handler, status_path_handler, status_query_handler,
    website_intelligence_callback_handler, website_intelligence_start_handler,
};
use crate::presentation::state::AppState;

/// Categories with bespoke payload shapes get literal routes; everything
/// else in the registry goes through the parametrized pair. Static segments
/// win over the `{category}` captures, so both can coexist.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/landing-analyzer/start",
            post(landing_analyzer_start_handler),
        )
        .route(
            "/api/landing-analyzer/callback",
            post(landing_analyzer_callback_handler),
        )
        .route("/api/seo/start", post(seo_start_handler))
        .route("/api/seo/callback", post(seo_callback_handler))
        .route(
            "/api/website-intelligence/start",
            post(website_intelligence_start_handler),
        )
        .route(
            "/api/website-intelligence/callback",
            post(website_intelligence_callback_handler),
        )
        .route("/api/{category}/start", post(generic_start_handler))
        .route("/api/{category}/callback", post(generic_callback_handler))
        .route("/api/{category}/status", get(status_query_handler))
        .route("/api/{category}/status/{job_id}", get(status_path_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
