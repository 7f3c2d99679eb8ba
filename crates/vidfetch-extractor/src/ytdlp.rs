//! yt-dlp invocation: argument construction, spawn, and output collection.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use vidfetch_core::models::PlaylistSlice;
use vidfetch_core::Config;

use crate::error::ExtractorError;
use crate::traits::MediaExtractor;

/// yt-dlp's search pseudo-URL scheme: `ytsearch<N>:<keyword>`.
const SEARCH_SCHEME: &str = "ytsearch";

/// Validate that a tool path doesn't contain shell metacharacters or
/// dangerous sequences
fn validate_tool_path(path: &str) -> Result<(), ExtractorError> {
    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) {
        return Err(ExtractorError::InvalidToolPath(format!(
            "contains dangerous characters: {}",
            path
        )));
    }

    if path.contains("..") {
        return Err(ExtractorError::InvalidToolPath(format!(
            "contains directory traversal: {}",
            path
        )));
    }

    if !path.chars().all(|c| {
        c.is_alphanumeric() || c == '/' || c == '-' || c == '_' || c == '.' || c == '\\'
    }) {
        return Err(ExtractorError::InvalidToolPath(format!(
            "contains unsafe characters: {}",
            path
        )));
    }

    Ok(())
}

/// Cap a captured stream at `max` bytes, cutting on a char boundary.
fn truncate_capture(mut captured: String, max: usize) -> String {
    if captured.len() > max {
        let mut cut = max;
        while !captured.is_char_boundary(cut) {
            cut -= 1;
        }
        captured.truncate(cut);
        captured.push_str("\n... (truncated)");
    }
    captured
}

/// The real extractor: one yt-dlp child process per call.
pub struct YtDlp {
    path: String,
    timeout: Duration,
    max_capture_bytes: usize,
}

impl YtDlp {
    pub fn new(
        path: impl Into<String>,
        timeout: Duration,
        max_capture_bytes: usize,
    ) -> Result<Self, ExtractorError> {
        let path = path.into();
        validate_tool_path(&path)?;
        Ok(Self {
            path,
            timeout,
            max_capture_bytes,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ExtractorError> {
        Self::new(
            config.ytdlp_path.clone(),
            Duration::from_secs(config.ytdlp_timeout_secs),
            config.ytdlp_max_capture_bytes,
        )
    }

    /// Last path component, used in error messages and logs.
    fn tool_name(&self) -> String {
        Path::new(&self.path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.clone())
    }

    fn capture(&self, bytes: &[u8]) -> String {
        truncate_capture(
            String::from_utf8_lossy(bytes).into_owned(),
            self.max_capture_bytes,
        )
    }

    /// Arguments for a flat-playlist search dump.
    pub fn search_args(keyword: &str, count: u32, slice: PlaylistSlice) -> Vec<String> {
        vec![
            "--dump-single-json".to_string(),
            "--flat-playlist".to_string(),
            "--no-warnings".to_string(),
            "--playlist-start".to_string(),
            slice.start_index.to_string(),
            "--playlist-end".to_string(),
            slice.end_index.to_string(),
            format!("{}{}:{}", SEARCH_SCHEME, count, keyword),
        ]
    }

    /// Arguments for a single-URL metadata dump.
    pub fn lookup_args(url: &str) -> Vec<String> {
        vec![
            "--dump-single-json".to_string(),
            "--no-warnings".to_string(),
            "--compat-options".to_string(),
            "no-youtube-channel-redirect".to_string(),
            url.to_string(),
        ]
    }

    /// Spawn the tool and wait for exit, enforcing the timeout. Non-zero
    /// exit becomes `Failed` with captured stderr.
    async fn run(&self, args: &[String]) -> Result<std::process::Output, ExtractorError> {
        let mut command = Command::new(&self.path);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(result) => result.map_err(|source| ExtractorError::Spawn {
                tool: self.tool_name(),
                source,
            })?,
            Err(_) => {
                tracing::warn!(
                    tool = %self.tool_name(),
                    timeout_secs = self.timeout.as_secs(),
                    "Tool invocation timed out, child killed"
                );
                return Err(ExtractorError::Timeout {
                    tool: self.tool_name(),
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        if !output.status.success() {
            return Err(ExtractorError::Failed {
                tool: self.tool_name(),
                code: output.status.code().unwrap_or(-1),
                stderr: self.capture(&output.stderr),
            });
        }

        Ok(output)
    }

    /// Run and parse stdout as a single JSON document.
    #[tracing::instrument(skip(self, args), fields(
        process.executable.path = %self.path,
        process.command = %self.tool_name(),
    ))]
    async fn run_json(&self, args: &[String]) -> Result<Value, ExtractorError> {
        let start = std::time::Instant::now();

        let output = self.run(args).await?;

        let stdout = &output.stdout;
        if stdout.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(ExtractorError::EmptyOutput {
                tool: self.tool_name(),
                stderr: self.capture(&output.stderr),
            });
        }

        let parsed: Value =
            serde_json::from_slice(stdout).map_err(|e| ExtractorError::Parse {
                tool: self.tool_name(),
                message: e.to_string(),
                raw: self.capture(stdout),
            })?;

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            stdout_bytes = stdout.len(),
            "Tool invocation completed"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl MediaExtractor for YtDlp {
    async fn search(
        &self,
        keyword: &str,
        count: u32,
        slice: PlaylistSlice,
    ) -> Result<Value, ExtractorError> {
        self.run_json(&Self::search_args(keyword, count, slice)).await
    }

    async fn lookup(&self, url: &str) -> Result<Value, ExtractorError> {
        self.run_json(&Self::lookup_args(url)).await
    }

    async fn probe(&self) -> Result<String, ExtractorError> {
        let output = self.run(&["--version".to_string()]).await?;
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            return Err(ExtractorError::EmptyOutput {
                tool: self.tool_name(),
                stderr: self.capture(&output.stderr),
            });
        }
        Ok(version)
    }
}
