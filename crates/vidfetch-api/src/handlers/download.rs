//! `?action=download`: validates the URL and returns a queued receipt.
//!
//! Download dispatch is not implemented. This handler never touches the
//! extractor; it only fabricates the receipt the future implementation will
//! honor.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use vidfetch_core::models::{DownloadResponse, LookupRequest};

use crate::error::HttpAppError;

pub(crate) async fn handle(payload: Value) -> Result<Response, HttpAppError> {
    let request: LookupRequest = super::parse_body(payload, "download")?;

    let response = DownloadResponse::queued(request.url);

    tracing::info!(
        url = %response.data.url,
        download_id = %response.data.download_id,
        "Download request queued (dispatch not implemented)"
    );

    Ok(Json(response).into_response())
}
