//! Extractor error types.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("Invalid tool path: {0}")]
    InvalidToolPath(String),

    #[error("Failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with status {code}")]
    Failed {
        tool: String,
        /// `-1` when the child died from a signal and has no exit code.
        code: i32,
        stderr: String,
    },

    #[error("{tool} timed out after {seconds}s")]
    Timeout { tool: String, seconds: u64 },

    #[error("{tool} produced no output")]
    EmptyOutput { tool: String, stderr: String },

    #[error("Failed to parse {tool} output: {message}")]
    Parse {
        tool: String,
        message: String,
        raw: String,
    },
}
