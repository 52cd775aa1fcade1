//! Shared application state.

use std::sync::Arc;

use pointshop_core::config::ShopConfig;
use pointshop_core::gateway::CommerceApi;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Deployment configuration.
    pub config: Arc<ShopConfig>,
    /// Gateway to the remote commerce API.
    pub api: Arc<dyn CommerceApi>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: ShopConfig, api: Arc<dyn CommerceApi>) -> Self {
        Self {
            config: Arc::new(config),
            api,
        }
    }
}
