//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::repository::{PersonRegistry, StaticPersonRegistry};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn PersonRegistry>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(registry: Arc<dyn PersonRegistry>, config: ApiConfig) -> Self {
        Self { registry, config }
    }

    /// App state over the built-in person registry.
    pub fn from_config(config: ApiConfig) -> Self {
        Self::new(Arc::new(StaticPersonRegistry::new()), config)
    }
}
