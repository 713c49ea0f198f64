pub mod content;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content                                         issue + column content (?issue=)
/// /issues/{issue}/sections                         resolved sections (?expanded=, full=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(content::router())
}
