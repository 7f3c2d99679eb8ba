//! Error types module
//!
//! All errors surfaced by the service are unified under the `AppError` enum:
//! client input errors (invalid action, malformed JSON, schema violations)
//! and subprocess errors (spawn failure, non-zero exit, timeout, empty or
//! unparseable output). Input errors never touch the subprocess; subprocess
//! errors keep their diagnostic detail (stderr, raw output) for the response.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for tool failures the client can act on
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Error type name for logging and diagnostics
    fn error_type(&self) -> &'static str;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid action. Use 'search', 'info', or 'download'.")]
    InvalidAction,

    #[error("Invalid JSON in request body")]
    InvalidJson,

    #[error("{message}")]
    Validation {
        message: String,
        /// Field-level detail, e.g. validator's field -> errors map.
        details: serde_json::Value,
    },

    #[error("Failed to start {tool}: {source}")]
    SpawnFailed {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with status {code}")]
    ToolFailed {
        tool: String,
        /// `-1` when the child was killed by a signal and has no exit code.
        code: i32,
        stderr: String,
    },

    #[error("{tool} timed out after {seconds}s")]
    ToolTimeout { tool: String, seconds: u64 },

    #[error("{tool} produced no output")]
    EmptyOutput { tool: String, stderr: String },

    #[error("Failed to parse {tool} output: {message}")]
    OutputParse {
        tool: String,
        message: String,
        raw: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_type, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::InvalidAction => (400, "InvalidAction", LogLevel::Debug),
        AppError::InvalidJson => (400, "InvalidJson", LogLevel::Debug),
        AppError::Validation { .. } => (400, "Validation", LogLevel::Debug),
        AppError::SpawnFailed { .. } => (500, "SpawnFailed", LogLevel::Error),
        AppError::ToolFailed { .. } => (500, "ToolFailed", LogLevel::Warn),
        AppError::ToolTimeout { .. } => (500, "ToolTimeout", LogLevel::Warn),
        AppError::EmptyOutput { .. } => (500, "EmptyOutput", LogLevel::Warn),
        AppError::OutputParse { .. } => (500, "OutputParse", LogLevel::Warn),
        AppError::Internal(_) => (500, "Internal", LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "Internal", LogLevel::Error),
    }
}

impl AppError {
    /// Whether this error belongs to the subprocess failure class, which
    /// renders the `{success: false, ...}` body instead of the plain
    /// validation body.
    pub fn is_process_error(&self) -> bool {
        matches!(
            self,
            AppError::SpawnFailed { .. }
                | AppError::ToolFailed { .. }
                | AppError::ToolTimeout { .. }
                | AppError::EmptyOutput { .. }
                | AppError::OutputParse { .. }
        )
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_type(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_invalid_action() {
        let err = AppError::InvalidAction;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_type(), "InvalidAction");
        assert_eq!(err.log_level(), LogLevel::Debug);
        assert_eq!(
            err.to_string(),
            "Invalid action. Use 'search', 'info', or 'download'."
        );
        assert!(!err.is_process_error());
    }

    #[test]
    fn test_error_metadata_tool_failed() {
        let err = AppError::ToolFailed {
            tool: "yt-dlp".to_string(),
            code: 1,
            stderr: "ERROR: unsupported URL".to_string(),
        };
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_type(), "ToolFailed");
        assert_eq!(err.log_level(), LogLevel::Warn);
        assert_eq!(err.to_string(), "yt-dlp exited with status 1");
        assert!(err.is_process_error());
    }

    #[test]
    fn test_error_metadata_spawn_failed() {
        let err = AppError::SpawnFailed {
            tool: "yt-dlp".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.log_level(), LogLevel::Error);
        assert!(err.to_string().starts_with("Failed to start yt-dlp"));
        assert!(err.is_process_error());
    }

    #[test]
    fn test_internal_errors_are_not_process_errors() {
        let err = AppError::Internal("boom".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert!(!err.is_process_error());
    }

    #[test]
    fn test_detailed_message_includes_source_chain() {
        let inner = anyhow::anyhow!("root cause");
        let err = AppError::InternalWithSource {
            message: "wrapper".to_string(),
            source: inner.context("middle layer"),
        };
        let details = err.detailed_message();
        assert!(details.contains("Caused by: middle layer"));
        assert!(details.contains("root cause"));
    }
}
