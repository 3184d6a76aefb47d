//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state passed to all handlers.
///
/// Read-only after startup; requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
