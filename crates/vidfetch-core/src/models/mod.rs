//! Request and response models for the video proxy API.

mod envelope;
mod request;

pub use envelope::{
    DownloadReceipt, DownloadResponse, DownloadStatus, InfoResponse, SearchResponse,
};
pub use request::{LookupRequest, PlaylistSlice, SearchRequest};
