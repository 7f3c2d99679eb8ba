//! Route configuration and setup

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use vidfetch_core::Config;

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = public_routes(state.clone())
        .merge(video_routes(state))
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(ConcurrencyLimitLayer::new(config.http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(config.max_body_size_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}

/// The single proxy route, versioned under the API prefix.
fn video_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            &format!("{}/videos", API_PREFIX),
            post(handlers::actions::video_actions),
        )
        .with_state(state)
}

/// Health and documentation routes (no action dispatch).
fn public_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/live", get(liveness_check))
        .with_state(state)
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::openapi_spec()) }),
        )
}

/// Liveness probe - simple check that process is running
async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "alive"
        })),
    )
}

/// Health check: probes the external tool (`--version`) with a short
/// timeout. A missing or broken tool degrades the report but does not fail
/// the check; the process itself is still serving.
async fn health_check(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let mut response = serde_json::json!({
        "status": "healthy",
        "extractor": "unknown"
    });

    match tokio::time::timeout(TIMEOUT, state.extractor.probe()).await {
        Ok(Ok(version)) => {
            response["extractor"] = serde_json::json!(format!("healthy ({})", version));
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Extractor health check failed");
            response["extractor"] = serde_json::json!(format!("degraded: {}", e));
        }
        Err(_) => {
            tracing::warn!("Extractor health check timed out");
            response["extractor"] = serde_json::json!("timeout");
        }
    }

    (StatusCode::OK, Json(response))
}
