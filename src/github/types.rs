//! GitHub search API wire types
//!
//! These mirror the JSON returned by `/search/repositories`. They are
//! converted into [`RepositoryRecord`] / [`SearchOutcome`] right after
//! decoding so nothing above this module sees the nested wire shape.

use crate::search::{RepositoryRecord, SearchOutcome};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Longest description kept for a stored repository, in characters
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Top-level search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Option<Vec<RepositoryItem>>,
}

/// One repository entry in `items`
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub stargazers_count: i64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub forks_count: i64,
    pub updated_at: DateTime<Utc>,
}

/// Nested owner object; only the login is kept
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

impl From<RepositoryItem> for RepositoryRecord {
    fn from(item: RepositoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description.map(truncate_description),
            owner_login: item.owner.map(|o| o.login).unwrap_or_default(),
            star_count: item.stargazers_count,
            language: item.language,
            fork_count: item.forks_count,
            last_updated: item.updated_at,
        }
    }
}

impl From<SearchEnvelope> for SearchOutcome {
    fn from(envelope: SearchEnvelope) -> Self {
        Self {
            item_count: envelope.total_count,
            items: envelope
                .items
                .map(|items| items.into_iter().map(RepositoryRecord::from).collect()),
            message: None,
        }
    }
}

fn truncate_description(description: String) -> String {
    match description.char_indices().nth(MAX_DESCRIPTION_LEN) {
        Some((cut, _)) => description[..cut].to_string(),
        None => description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "total_count": 42,
        "incomplete_results": false,
        "items": [{
            "id": 1296269,
            "name": "tetris",
            "full_name": "octocat/tetris",
            "description": "Falling blocks",
            "owner": { "login": "octocat", "id": 1 },
            "stargazers_count": 80,
            "language": "Java",
            "forks_count": 9,
            "updated_at": "2024-01-26T19:14:43Z"
        }]
    }"#;

    #[test]
    fn test_decode_flattens_owner() {
        let envelope: SearchEnvelope = serde_json::from_str(BODY).unwrap();
        let outcome = SearchOutcome::from(envelope);

        assert_eq!(outcome.item_count, 42);
        let items = outcome.items.unwrap();
        assert_eq!(items.len(), 1);

        let record = &items[0];
        assert_eq!(record.id, 1296269);
        assert_eq!(record.owner_login, "octocat");
        assert_eq!(record.star_count, 80);
        assert_eq!(record.fork_count, 9);
        assert_eq!(record.language.as_deref(), Some("Java"));
        assert_eq!(record.last_updated.to_rfc3339(), "2024-01-26T19:14:43+00:00");
    }

    #[test]
    fn test_missing_items_stay_none() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"total_count": 0, "incomplete_results": false}"#).unwrap();
        assert!(SearchOutcome::from(envelope).items.is_none());

        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"total_count": 0, "items": []}"#).unwrap();
        assert_eq!(SearchOutcome::from(envelope).items, Some(vec![]));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let long = "é".repeat(MAX_DESCRIPTION_LEN + 10);
        let truncated = truncate_description(long);
        assert_eq!(truncated.chars().count(), MAX_DESCRIPTION_LEN);

        assert_eq!(truncate_description("short".to_string()), "short");
    }
}
