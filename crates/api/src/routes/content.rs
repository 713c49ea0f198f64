//! Route definitions for the newsletter content read API.
//!
//! Mounted under `/api/v1` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content routes.
///
/// ```text
/// GET    /content                  -> get_content (?issue)
/// GET    /issues/{issue}/sections  -> get_sections (?expanded, full)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/content", get(content::get_content))
        .route("/issues/{issue}/sections", get(content::get_sections))
}
