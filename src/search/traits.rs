//! Collaborator traits used by the search service

use super::models::{RepositoryRecord, SearchOutcome};
use crate::error::{StoreError, UpstreamError};
use async_trait::async_trait;

/// Source of repository search results (the GitHub API in production)
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// GET `path` (path plus query string) against the API base.
    ///
    /// `Ok(None)` means the call succeeded but returned no envelope.
    async fn fetch(&self, path: &str) -> Result<Option<SearchOutcome>, UpstreamError>;
}

/// Persistent store of repository records
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// Insert or overwrite every record, keyed by `id`, as one batch
    async fn save_all(&self, records: &[RepositoryRecord]) -> Result<(), StoreError>;

    /// Load every stored record
    async fn find_all(&self) -> Result<Vec<RepositoryRecord>, StoreError>;
}
