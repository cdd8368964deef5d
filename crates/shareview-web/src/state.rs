//! Application state.

use axum::http::HeaderValue;
use shareview_core::config::ServerConfig;
use shareview_core::ShareviewResult;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub allowed_origin: HeaderValue,
    pub started_at: Instant,
}

impl AppState {
    /// Validate `config` and build the state from it.
    pub fn new(config: ServerConfig) -> ShareviewResult<Self> {
        config.validate()?;
        let allowed_origin = config.origin_header()?;
        Ok(Self {
            config: Arc::new(config),
            allowed_origin,
            started_at: Instant::now(),
        })
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
