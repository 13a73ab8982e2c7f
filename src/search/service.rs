//! Search execution and persistence

use super::models::{SearchOutcome, SearchRequest};
use super::traits::{RepositorySource, RepositoryStore};
use crate::error::{Result, SearchError};
use crate::query::{build_query, search_path};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Runs repository searches against a source and records the results.
///
/// Both collaborators are injected so tests can substitute fakes.
#[derive(Clone)]
pub struct RepositorySearch {
    source: Arc<dyn RepositorySource>,
    store: Arc<dyn RepositoryStore>,
}

impl RepositorySearch {
    /// Create a new search service
    pub fn new(source: Arc<dyn RepositorySource>, store: Arc<dyn RepositoryStore>) -> Self {
        Self { source, store }
    }

    /// Search upstream and persist any returned repositories.
    ///
    /// Returns `Ok(None)` when upstream produced no envelope at all. An
    /// envelope whose item list is missing or empty is returned unchanged and
    /// nothing is written.
    pub async fn search(&self, request: &SearchRequest) -> Result<Option<SearchOutcome>> {
        let query = build_query(request.query.as_deref(), request.language.as_deref())?;
        let path = search_path(&query, request.sort.as_deref());

        debug!(
            query = ?request.query,
            sort = ?request.sort,
            language = ?request.language,
            "Searching repositories"
        );

        let outcome = self.source.fetch(&path).await.map_err(|e| {
            error!("Error during GitHub API call: {}", e);
            SearchError::from(e)
        })?;

        let Some(outcome) = outcome else {
            debug!("GitHub API returned no envelope for {}", path);
            return Ok(None);
        };

        if let Some(items) = outcome.items.as_deref().filter(|items| !items.is_empty()) {
            info!(
                "Fetched {} repositories from GitHub API. Saving to database...",
                items.len()
            );
            self.store.save_all(items).await?;
            info!("Successfully saved {} repositories to the database", items.len());
        }

        Ok(Some(outcome))
    }

    /// Every repository saved so far
    pub async fn list_saved(&self) -> Result<SearchOutcome> {
        let records = self.store.find_all().await?;
        debug!("Loaded {} saved repositories", records.len());
        Ok(SearchOutcome::from_records(records))
    }
}
