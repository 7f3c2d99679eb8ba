//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use vidfetch_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "vidfetch API",
        version = "0.1.0",
        description = "HTTP proxy in front of yt-dlp: video search, metadata lookup, and a stubbed download queue. All endpoints are versioned under /api/v0/."
    ),
    paths(handlers::actions::video_actions),
    components(schemas(
        models::SearchRequest,
        models::LookupRequest,
        models::SearchResponse,
        models::InfoResponse,
        models::DownloadResponse,
        models::DownloadReceipt,
        models::DownloadStatus,
        error::RequestErrorResponse,
        error::ProcessErrorResponse,
        error::UnexpectedErrorResponse,
    )),
    tags(
        (name = "videos", description = "yt-dlp proxy actions")
    )
)]
pub struct ApiDoc;

/// The served OpenAPI spec.
pub fn openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
