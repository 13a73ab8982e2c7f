//! Web server module
//!
//! Exposes the search and saved-listing endpoints over HTTP.

mod handlers;
mod routes;
mod state;

pub use handlers::{SAVED_SUCCESS_MESSAGE, SEARCH_SUCCESS_MESSAGE};
pub use routes::create_router;
pub use state::AppState;
