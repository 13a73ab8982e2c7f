//! GitHub API access
//!
//! Provides the HTTP client used as the repository search source and the
//! wire types it decodes.

mod client;
mod types;

pub use client::GithubClient;
pub use types::{Owner, RepositoryItem, SearchEnvelope, MAX_DESCRIPTION_LEN};
