//! Application initialization.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use vidfetch_core::Config;
use vidfetch_extractor::YtDlp;

use crate::state::AppState;

/// Build the application state and router from configuration.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let extractor = YtDlp::from_config(&config).context("Invalid yt-dlp configuration")?;
    let state = Arc::new(AppState::new(config.clone(), Arc::new(extractor)));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
