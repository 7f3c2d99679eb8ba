//! Core types for the vidfetch service: configuration, the error taxonomy,
//! and the request/response data model shared by the extractor and API crates.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
