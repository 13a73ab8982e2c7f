//! Search orchestration module
//!
//! Validates search requests, queries GitHub, persists what comes back and
//! serves the saved records.

mod models;
mod service;
mod traits;

pub use models::*;
pub use service::RepositorySearch;
pub use traits::{RepositorySource, RepositoryStore};

#[cfg(test)]
pub(crate) use service::tests as testing;
