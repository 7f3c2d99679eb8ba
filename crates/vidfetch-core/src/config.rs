//! Configuration module
//!
//! All settings come from the environment (a `.env` file is honored in
//! development). Every value has a default so the service starts with no
//! configuration at all, assuming `yt-dlp` is on PATH.

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_YTDLP_PATH: &str = "yt-dlp";
const DEFAULT_YTDLP_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_CAPTURE_BYTES: usize = 256 * 1024;
const DEFAULT_MAX_BODY_SIZE_BYTES: usize = 64 * 1024;
const DEFAULT_HTTP_CONCURRENCY_LIMIT: usize = 10_000;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Path to (or name of) the yt-dlp executable.
    pub ytdlp_path: String,
    /// Hard ceiling on one yt-dlp invocation; the child is killed on expiry.
    pub ytdlp_timeout_secs: u64,
    /// Cap on stderr / raw stdout echoed back in error responses.
    pub ytdlp_max_capture_bytes: usize,
    pub max_body_size_bytes: usize,
    pub http_concurrency_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment,
            cors_origins,
            ytdlp_path: env::var("YTDLP_PATH").unwrap_or_else(|_| DEFAULT_YTDLP_PATH.to_string()),
            ytdlp_timeout_secs: env::var("YTDLP_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_YTDLP_TIMEOUT_SECS),
            ytdlp_max_capture_bytes: env::var("YTDLP_MAX_CAPTURE_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CAPTURE_BYTES),
            max_body_size_bytes: env::var("MAX_BODY_SIZE_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_SIZE_BYTES),
            http_concurrency_limit: env::var("HTTP_CONCURRENCY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_CONCURRENCY_LIMIT)
                .max(1),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.ytdlp_path.trim().is_empty() {
            anyhow::bail!("YTDLP_PATH must not be empty");
        }
        if self.ytdlp_timeout_secs == 0 {
            anyhow::bail!("YTDLP_TIMEOUT_SECONDS must be at least 1");
        }
        if self.ytdlp_max_capture_bytes < 1024 {
            anyhow::bail!("YTDLP_MAX_CAPTURE_BYTES must be at least 1024");
        }
        if self.max_body_size_bytes == 0 {
            anyhow::bail!("MAX_BODY_SIZE_BYTES must be at least 1");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            ytdlp_path: DEFAULT_YTDLP_PATH.to_string(),
            ytdlp_timeout_secs: DEFAULT_YTDLP_TIMEOUT_SECS,
            ytdlp_max_capture_bytes: DEFAULT_MAX_CAPTURE_BYTES,
            max_body_size_bytes: DEFAULT_MAX_BODY_SIZE_BYTES,
            http_concurrency_limit: DEFAULT_HTTP_CONCURRENCY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ytdlp_path, "yt-dlp");
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_detection() {
        let mut config = Config::default();
        config.environment = "Production".to_string();
        assert!(config.is_production());
        config.environment = "prod".to_string();
        assert!(config.is_production());
        config.environment = "staging".to_string();
        assert!(!config.is_production());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.ytdlp_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_tool_path() {
        let mut config = Config::default();
        config.ytdlp_path = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
