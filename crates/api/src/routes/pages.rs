//! Route definitions for the HTML pages (root level, not under `/api/v1`).

use axum::routing::get;
use axum::Router;

use crate::handlers::page;
use crate::state::AppState;

/// Page routes.
///
/// ```text
/// GET    /                  -> front_page (?expanded, full)
/// GET    /issues/{issue}    -> issue_page (?expanded, full)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::front_page))
        .route("/issues/{issue}", get(page::issue_page))
}
