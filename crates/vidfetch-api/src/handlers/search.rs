//! `?action=search`: flat-playlist search through the extractor.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use vidfetch_core::models::{SearchRequest, SearchResponse};

use crate::error::HttpAppError;
use crate::state::AppState;

pub(crate) async fn handle(state: &AppState, payload: Value) -> Result<Response, HttpAppError> {
    let request: SearchRequest = super::parse_body(payload, "search")?;
    let slice = request.slice();

    let result = state
        .extractor
        .search(&request.keyword, request.page_size, slice)
        .await
        .map_err(HttpAppError::from)?;

    // The tool emits a single object for a search dump; the API contract is
    // always an array.
    let data = match result {
        Value::Array(items) => items,
        other => vec![other],
    };

    tracing::info!(
        keyword = %request.keyword,
        page = request.page,
        page_size = request.page_size,
        start_index = slice.start_index,
        end_index = slice.end_index,
        results = data.len(),
        "Search completed"
    );

    Ok(Json(SearchResponse::new(data)).into_response())
}
