//! HTTP request handlers

use super::state::AppState;
use crate::error::{SearchError, UpstreamError};
use crate::search::{SearchOutcome, SearchRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Status note attached to a successful search
pub const SEARCH_SUCCESS_MESSAGE: &str = "Repositories fetched and saved successfully";

/// Status note attached to a successful saved listing
pub const SAVED_SUCCESS_MESSAGE: &str = "Saved repositories fetched successfully";

/// `POST /api/github/search`
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, SearchError> {
    let Json(request) =
        payload.map_err(|rejection| SearchError::InvalidArgument(rejection.body_text()))?;
    let outcome = state.search.search(&request).await?;
    Ok(outcome_response(outcome, SEARCH_SUCCESS_MESSAGE))
}

/// `GET /api/github/saved`
pub async fn saved(State(state): State<AppState>) -> Result<Response, SearchError> {
    let outcome = state.search.list_saved().await?;
    Ok(outcome_response(Some(outcome), SAVED_SUCCESS_MESSAGE))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "upstream": state.settings.github.base_url,
    }))
}

/// Map an outcome to 404 (absent), 204 (no items) or 200 with `message` set
fn outcome_response(outcome: Option<SearchOutcome>, message: &str) -> Response {
    match outcome {
        None => StatusCode::NOT_FOUND.into_response(),
        Some(outcome) if outcome.has_no_items() => StatusCode::NO_CONTENT.into_response(),
        Some(outcome) => (StatusCode::OK, Json(outcome.with_message(message))).into_response(),
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            SearchError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            SearchError::Upstream(UpstreamError::Http { status, message }) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                upstream_message(message),
            ),
            SearchError::Upstream(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            SearchError::Store(e) => {
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(SearchOutcome::message_only(message))).into_response()
    }
}

/// GitHub error bodies are JSON with a `message` field; fall back to the raw body
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
