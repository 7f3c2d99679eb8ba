//! Test helpers: a scripted extractor and a TestServer factory.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;
use vidfetch_api::setup::routes::setup_routes;
use vidfetch_api::state::AppState;
use vidfetch_core::models::PlaylistSlice;
use vidfetch_core::Config;
use vidfetch_extractor::{ExtractorError, MediaExtractor};

/// Returns the versioned API path, e.g. `api_path("/videos")` -> `/api/v0/videos`.
pub fn api_path(path: &str) -> String {
    format!("{}{}", vidfetch_api::constants::API_PREFIX, path)
}

/// What the stub extractor should do for any search/lookup call.
pub enum StubBehavior {
    Ok(Value),
    SpawnFail,
    Fail { code: i32, stderr: String },
    Empty { stderr: String },
    Garbage { raw: String },
}

/// Scripted extractor: returns canned results instead of spawning yt-dlp.
pub struct StubExtractor {
    pub behavior: StubBehavior,
}

impl StubExtractor {
    fn result(&self) -> Result<Value, ExtractorError> {
        match &self.behavior {
            StubBehavior::Ok(value) => Ok(value.clone()),
            StubBehavior::SpawnFail => Err(ExtractorError::Spawn {
                tool: "yt-dlp".to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "No such file or directory",
                ),
            }),
            StubBehavior::Fail { code, stderr } => Err(ExtractorError::Failed {
                tool: "yt-dlp".to_string(),
                code: *code,
                stderr: stderr.clone(),
            }),
            StubBehavior::Empty { stderr } => Err(ExtractorError::EmptyOutput {
                tool: "yt-dlp".to_string(),
                stderr: stderr.clone(),
            }),
            StubBehavior::Garbage { raw } => Err(ExtractorError::Parse {
                tool: "yt-dlp".to_string(),
                message: "expected value at line 1 column 1".to_string(),
                raw: raw.clone(),
            }),
        }
    }
}

#[async_trait]
impl MediaExtractor for StubExtractor {
    async fn search(
        &self,
        _keyword: &str,
        _count: u32,
        _slice: PlaylistSlice,
    ) -> Result<Value, ExtractorError> {
        self.result()
    }

    async fn lookup(&self, _url: &str) -> Result<Value, ExtractorError> {
        self.result()
    }

    async fn probe(&self) -> Result<String, ExtractorError> {
        self.result().map(|_| "test".to_string())
    }
}

/// Extractor that records the search arguments it was called with.
pub struct RecordingExtractor {
    pub seen: Mutex<Option<(String, u32, PlaylistSlice)>>,
    pub result: Value,
}

#[async_trait]
impl MediaExtractor for RecordingExtractor {
    async fn search(
        &self,
        keyword: &str,
        count: u32,
        slice: PlaylistSlice,
    ) -> Result<Value, ExtractorError> {
        *self.seen.lock().expect("lock") = Some((keyword.to_string(), count, slice));
        Ok(self.result.clone())
    }

    async fn lookup(&self, _url: &str) -> Result<Value, ExtractorError> {
        Ok(self.result.clone())
    }

    async fn probe(&self) -> Result<String, ExtractorError> {
        Ok("test".to_string())
    }
}

pub fn test_server_with_extractor(extractor: Arc<dyn MediaExtractor>) -> TestServer {
    let config = Config::default();
    let state = Arc::new(AppState::new(config.clone(), extractor));
    let router = setup_routes(&config, state).expect("router setup");
    TestServer::new(router).expect("test server")
}

pub fn test_server_with(behavior: StubBehavior) -> TestServer {
    test_server_with_extractor(Arc::new(StubExtractor { behavior }))
}

pub fn test_server() -> TestServer {
    test_server_with(StubBehavior::Ok(serde_json::json!({ "entries": [] })))
}
