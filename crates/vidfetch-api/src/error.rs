//! HTTP error response conversion
//!
//! This module converts `AppError` into the three wire shapes the API
//! speaks: `{error, details?}` for request-validation failures (400),
//! `{success: false, error, details?}` for subprocess failures (500), and
//! the opaque `{error, message}` for anything unexpected (500, details are
//! logged server-side only).
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse,
//! HttpAppError>` and let `?` do the conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use vidfetch_core::{AppError, ErrorMetadata, LogLevel};
use vidfetch_extractor::ExtractorError;

/// 400 body for client input errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// 500 body for subprocess failures; `details` carries stderr or the raw
/// unparseable output.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Opaque 500 body for uncaught failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct UnexpectedErrorResponse {
    pub error: String,
    pub message: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from vidfetch-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

// Convert extractor errors to HttpAppError (avoids orphan rule: we impl for
// local HttpAppError)
impl From<ExtractorError> for HttpAppError {
    fn from(err: ExtractorError) -> Self {
        let app = match err {
            ExtractorError::InvalidToolPath(msg) => {
                AppError::Internal(format!("Invalid tool path: {}", msg))
            }
            ExtractorError::Spawn { tool, source } => AppError::SpawnFailed { tool, source },
            ExtractorError::Failed { tool, code, stderr } => {
                AppError::ToolFailed { tool, code, stderr }
            }
            ExtractorError::Timeout { tool, seconds } => AppError::ToolTimeout { tool, seconds },
            ExtractorError::EmptyOutput { tool, stderr } => {
                AppError::EmptyOutput { tool, stderr }
            }
            ExtractorError::Parse { tool, message, raw } => {
                AppError::OutputParse { tool, message, raw }
            }
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error.detailed_message(), error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error.detailed_message(), error_type = error_type, "Error occurred");
        }
    }
}

/// Diagnostic payload echoed to the client for subprocess failures.
fn process_details(error: &AppError) -> Option<serde_json::Value> {
    match error {
        AppError::ToolFailed { stderr, .. } => Some(serde_json::Value::String(stderr.clone())),
        AppError::EmptyOutput { stderr, .. } => {
            let details = if stderr.is_empty() {
                "No error output".to_string()
            } else {
                stderr.clone()
            };
            Some(serde_json::Value::String(details))
        }
        AppError::OutputParse { raw, .. } => Some(serde_json::Value::String(raw.clone())),
        _ => None,
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        if app_error.is_process_error() {
            let body = ProcessErrorResponse {
                success: false,
                error: app_error.to_string(),
                details: process_details(app_error),
            };
            return (status, Json(body)).into_response();
        }

        match app_error {
            AppError::Validation { message, details } => {
                let details = if details.is_null() {
                    None
                } else {
                    Some(details.clone())
                };
                let body = RequestErrorResponse {
                    error: message.clone(),
                    details,
                };
                (status, Json(body)).into_response()
            }
            AppError::InvalidAction | AppError::InvalidJson => {
                let body = RequestErrorResponse {
                    error: app_error.to_string(),
                    details: None,
                };
                (status, Json(body)).into_response()
            }
            _ => {
                let body = UnexpectedErrorResponse {
                    error: "Internal server error".to_string(),
                    message: "An unexpected error occurred".to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
