//! Application state shared across handlers

use crate::config::Settings;
use crate::search::{RepositorySearch, RepositorySource, RepositoryStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded settings
    pub settings: Arc<Settings>,
    /// Search service
    pub search: RepositorySearch,
}

impl AppState {
    /// Create new application state
    pub fn new(
        settings: Settings,
        source: Arc<dyn RepositorySource>,
        store: Arc<dyn RepositoryStore>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            search: RepositorySearch::new(source, store),
        }
    }
}
