//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::charts::CallbackRegistry;
use crate::dataset::Dataset;
use crate::layout::{build_layout, render_page, Widget};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Dataset loaded at startup, read-only
    pub dataset: Arc<Dataset>,
    /// Input → output chart bindings
    pub callbacks: Arc<CallbackRegistry>,
    /// Static widget tree
    pub layout: Arc<Widget>,
    /// Dashboard page rendered once from `layout`
    pub page: Arc<String>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with the standard dashboard layout and callbacks
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig) -> Self {
        Self::with_callbacks(dataset, CallbackRegistry::dashboard(), config)
    }

    /// Create state with a custom callback registry
    pub fn with_callbacks(
        dataset: Arc<Dataset>,
        callbacks: CallbackRegistry,
        config: ApiConfig,
    ) -> Self {
        let layout = build_layout();
        let page = render_page(&layout);

        Self {
            dataset,
            callbacks: Arc::new(callbacks),
            layout: Arc::new(layout),
            page: Arc::new(page),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Debug mode
    pub debug: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            debug: true,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&crate::config::ServerConfig> for ApiConfig {
    fn from(server: &crate::config::ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            debug: server.debug,
        }
    }
}
