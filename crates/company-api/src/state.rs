//! Application state shared across handlers.

use std::sync::Arc;

use company_store::CompanyStore;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// The company registry.
    pub store: Arc<CompanyStore>,
}

impl AppState {
    /// Creates a new AppState with an empty store.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_store(config, CompanyStore::new())
    }

    /// Creates a new AppState around an existing store.
    pub fn with_store(config: ApiConfig, store: CompanyStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
