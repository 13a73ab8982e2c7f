//! Search request, persisted record and response envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a `POST /api/github/search` call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Free-text search terms (required, must not be blank)
    pub query: Option<String>,
    /// Upstream sort key, passed through untouched
    pub sort: Option<String>,
    /// Optional language filter
    pub language: Option<String>,
}

impl SearchRequest {
    /// Create a request for the given terms
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Set the language filter
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the sort key
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// A repository as it is stored and returned to callers.
///
/// `id` is assigned upstream and is the primary key, so saving the same
/// repository twice replaces the earlier row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RepositoryRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub owner_login: String,
    pub star_count: i64,
    pub language: Option<String>,
    pub fork_count: i64,
    pub last_updated: DateTime<Utc>,
}

/// Response envelope for both the search and the saved listing.
///
/// `items` being `None` and being an empty list are different states: the
/// former means upstream sent no list at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    #[serde(rename = "total_count")]
    pub item_count: i64,
    #[serde(rename = "repositories", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RepositoryRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchOutcome {
    /// Envelope holding the given records, counted locally
    pub fn from_records(records: Vec<RepositoryRecord>) -> Self {
        Self {
            item_count: records.len() as i64,
            items: Some(records),
            message: None,
        }
    }

    /// Envelope carrying only a status note
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            item_count: 0,
            items: None,
            message: Some(message.into()),
        }
    }

    /// Replace the status note
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// True when the envelope holds no list or an empty one
    pub fn has_no_items(&self) -> bool {
        self.items.as_ref().map_or(true, Vec::is_empty)
    }
}
