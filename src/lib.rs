//! GitHub repository search service
//!
//! Forwards repository searches to the GitHub search API, stores every
//! returned repository in SQLite and serves the stored set back.

pub mod config;
pub mod error;
pub mod github;
pub mod query;
pub mod search;
pub mod storage;
pub mod web;

pub use config::Settings;
pub use error::{SearchError, StoreError, UpstreamError};
pub use search::{RepositoryRecord, RepositorySearch, SearchOutcome, SearchRequest};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
