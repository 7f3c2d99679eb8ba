//! Application state.

use std::sync::Arc;

use vidfetch_core::Config;
use vidfetch_extractor::MediaExtractor;

/// Shared, read-only state: configuration plus the extractor seam. There is
/// no per-request mutable state anywhere in the service.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub extractor: Arc<dyn MediaExtractor>,
}

impl AppState {
    pub fn new(config: Config, extractor: Arc<dyn MediaExtractor>) -> Self {
        Self { config, extractor }
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
