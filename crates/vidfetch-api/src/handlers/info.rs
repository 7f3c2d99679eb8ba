//! `?action=info`: single-URL metadata lookup through the extractor.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use vidfetch_core::models::{InfoResponse, LookupRequest};

use crate::error::HttpAppError;
use crate::state::AppState;

pub(crate) async fn handle(state: &AppState, payload: Value) -> Result<Response, HttpAppError> {
    let request: LookupRequest = super::parse_body(payload, "info")?;

    let data = state
        .extractor
        .lookup(&request.url)
        .await
        .map_err(HttpAppError::from)?;

    tracing::info!(url = %request.url, "Info lookup completed");

    Ok(Json(InfoResponse::new(data)).into_response())
}
