//! Handlers for the server-rendered issue pages.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use newsletter_core::issue::parse_issue_number;
use newsletter_core::types::IssueNumber;
use newsletter_core::view::LoadState;

use crate::error::AppError;
use crate::handlers::content::load_issue_content;
use crate::page::{render_error_page, render_issue_page};
use crate::query::ViewParams;
use crate::state::AppState;

/// GET /?expanded=&full=
///
/// Render the configured current issue.
pub async fn front_page(State(state): State<AppState>, Query(params): Query<ViewParams>) -> Response {
    let issue_number = state.config.current_issue;
    render_page(&state, issue_number, &params, "/").await
}

/// GET /issues/{issue}?expanded=&full=
///
/// Render any issue by number.
pub async fn issue_page(
    State(state): State<AppState>,
    Path(issue): Path<String>,
    Query(params): Query<ViewParams>,
) -> Response {
    let issue_number = match parse_issue_number(Some(&issue)) {
        Ok(n) => n,
        Err(err) => {
            let (status, _, message) = AppError::from(err).classify();
            return (status, Html(render_error_page(&message))).into_response();
        }
    };
    let base_path = format!("/issues/{issue_number}");
    render_page(&state, issue_number, &params, &base_path).await
}

/// Load `issue_number` and render it with the view state from `params`.
///
/// A client that navigates away drops the connection, and axum drops the
/// handler future with it, so a load never completes for an abandoned
/// request.
async fn render_page(
    state: &AppState,
    issue_number: IssueNumber,
    params: &ViewParams,
    base_path: &str,
) -> Response {
    let (status, load_state) = match load_issue_content(&state.pool, issue_number).await {
        Ok(content) => (StatusCode::OK, LoadState::Loaded(content)),
        Err(err) => {
            let (status, _, message) = err.classify();
            (status, LoadState::Failed(message))
        }
    };

    let view = params.view_state();
    let html = render_issue_page(issue_number, &load_state, &view, base_path);
    (status, Html(html)).into_response()
}
