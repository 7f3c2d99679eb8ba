//! vidfetch API library
//!
//! HTTP surface of the yt-dlp proxy: routing, handlers, error conversion,
//! and application setup.

// Module declarations
mod api_doc;
pub mod constants;
mod handlers;
pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{HttpAppError, ProcessErrorResponse, RequestErrorResponse};
