//! Success envelopes returned by the three actions.
//!
//! Every action wraps its payload in `{success: true, ...}`; error bodies are
//! built by the API crate's error conversion instead.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// `?action=search` success body: results are always an array, even when the
/// tool emitted a single object.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<Value>,
}

impl SearchResponse {
    pub fn new(data: Vec<Value>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `?action=info` success body: the tool's JSON passed through as-is.
#[derive(Debug, Serialize, ToSchema)]
pub struct InfoResponse {
    pub success: bool,
    pub data: Value,
}

impl InfoResponse {
    pub fn new(data: Value) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `?action=download` success body. Download dispatch is not implemented;
/// the receipt records the request and nothing else happens.
#[derive(Debug, Serialize, ToSchema)]
pub struct DownloadResponse {
    pub success: bool,
    pub message: String,
    pub data: DownloadReceipt,
}

impl DownloadResponse {
    pub fn queued(url: String) -> Self {
        Self {
            success: true,
            message: "Download request accepted; dispatch is not yet implemented".to_string(),
            data: DownloadReceipt::queued(url),
        }
    }
}

/// Lifecycle of a download request. Only `Queued` exists until real
/// dispatch lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Queued,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadReceipt {
    pub url: String,
    pub status: DownloadStatus,
    pub download_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl DownloadReceipt {
    pub fn queued(url: String) -> Self {
        Self {
            url,
            status: DownloadStatus::Queued,
            download_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}
