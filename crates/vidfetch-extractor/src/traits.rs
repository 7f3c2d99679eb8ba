//! The extractor seam the API depends on.

use async_trait::async_trait;
use serde_json::Value;
use vidfetch_core::models::PlaylistSlice;

use crate::error::ExtractorError;

/// Interface for the external media-extraction tool. One implementation
/// spawns yt-dlp; tests substitute a scripted stub.
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Flat-playlist search dump for `ytsearch<count>:<keyword>`, limited to
    /// the given playlist slice. Returns the tool's JSON as-is.
    async fn search(
        &self,
        keyword: &str,
        count: u32,
        slice: PlaylistSlice,
    ) -> Result<Value, ExtractorError>;

    /// Full metadata dump for a single URL.
    async fn lookup(&self, url: &str) -> Result<Value, ExtractorError>;

    /// Availability probe; returns the tool's version string.
    async fn probe(&self) -> Result<String, ExtractorError>;
}
