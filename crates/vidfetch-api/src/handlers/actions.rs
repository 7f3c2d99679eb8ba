//! Action dispatch for `POST /api/v0/videos?action=...`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use vidfetch_core::AppError;

use crate::error::{ProcessErrorResponse, RequestErrorResponse};
use crate::handlers;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ActionParams {
    pub action: Option<String>,
}

/// Action discriminator from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    Info,
    Download,
}

impl Action {
    fn from_param(param: Option<&str>) -> Result<Self, AppError> {
        match param {
            Some("search") => Ok(Action::Search),
            Some("info") => Ok(Action::Info),
            Some("download") => Ok(Action::Download),
            _ => Err(AppError::InvalidAction),
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v0/videos",
    tag = "videos",
    summary = "Run a video action: search, info, or download",
    description = "Single proxy endpoint in front of yt-dlp. The `action` query parameter selects the operation; the JSON body is validated against that action's schema. `download` currently records the request and returns a queued receipt without invoking the tool.",
    params(
        ("action" = Option<String>, Query, description = "One of 'search', 'info', or 'download'")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Action succeeded"),
        (status = 400, description = "Invalid action or request body", body = RequestErrorResponse),
        (status = 500, description = "Tool invocation failed", body = ProcessErrorResponse)
    )
)]
#[tracing::instrument(skip(state, body), fields(action = tracing::field::Empty))]
pub async fn video_actions(
    Query(params): Query<ActionParams>,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, crate::error::HttpAppError> {
    let action = Action::from_param(params.action.as_deref())?;
    tracing::Span::current().record("action", params.action.as_deref().unwrap_or_default());

    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;

    match action {
        Action::Search => handlers::search::handle(&state, payload).await,
        Action::Info => handlers::info::handle(&state, payload).await,
        Action::Download => handlers::download::handle(payload).await,
    }
}
