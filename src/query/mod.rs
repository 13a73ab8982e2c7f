//! Upstream query construction
//!
//! Turns the caller's terms, language filter and sort key into the path
//! sent to GitHub's repository search endpoint. The `+` and `:` characters
//! are search syntax (`tetris+language:java`) and are never escaped.

use crate::error::SearchError;

/// Path of GitHub's repository search endpoint
pub const SEARCH_PATH: &str = "/search/repositories";

/// Separator between the terms and the language qualifier
const LANGUAGE_QUALIFIER: &str = "+language:";

/// True for an empty or whitespace-only string
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Build the `q` value from the search terms and an optional language.
///
/// Fails with [`SearchError::InvalidArgument`] when `query` is absent or
/// blank. A blank language is ignored.
pub fn build_query(query: Option<&str>, language: Option<&str>) -> Result<String, SearchError> {
    let query = query.ok_or_else(|| {
        SearchError::InvalidArgument("Search query must not be null.".to_string())
    })?;

    if is_blank(query) {
        return Err(SearchError::InvalidArgument(
            "Search query must not be empty.".to_string(),
        ));
    }

    match language {
        Some(lang) if !is_blank(lang) => Ok(format!("{}{}{}", query, LANGUAGE_QUALIFIER, lang)),
        _ => Ok(query.to_string()),
    }
}

/// Build the request path for a built query and an optional sort key.
///
/// `sort` is only attached when present and non-blank.
pub fn search_path(query: &str, sort: Option<&str>) -> String {
    let mut path = format!("{}?q={}", SEARCH_PATH, encode_component(query));

    if let Some(sort) = sort.filter(|s| !is_blank(s)) {
        path.push_str("&sort=");
        path.push_str(&encode_component(sort));
    }

    path
}

/// Percent-encode a query component, leaving search syntax characters intact
fn encode_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%2B", "+")
        .replace("%3A", ":")
}
