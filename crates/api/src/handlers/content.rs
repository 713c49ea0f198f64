//! Handlers for the newsletter content read API.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use newsletter_core::error::CoreError;
use newsletter_core::issue::parse_issue_number;
use newsletter_core::resolver::{count_unknown_sections, resolve_sections, ResolvedSection};
use newsletter_core::types::IssueNumber;
use newsletter_core::view::ExpandState;
use newsletter_db::models::column_content::ColumnContent;
use newsletter_db::models::issue::NewsletterIssue;
use newsletter_db::repositories::{ColumnContentRepo, IssueRepo};
use newsletter_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::query::{IssueParams, ViewParams};
use crate::response::{DataResponse, IssueContentResponse};
use crate::state::AppState;

/// Everything stored for one issue.
#[derive(Debug, Clone)]
pub struct IssueContent {
    pub issue: NewsletterIssue,
    pub rows: Vec<ColumnContent>,
}

impl IssueContent {
    /// Resolve the stored rows into renderable sections.
    pub fn sections(&self, expand: &ExpandState) -> Vec<ResolvedSection> {
        let unknown = count_unknown_sections(&self.rows);
        if unknown > 0 {
            tracing::debug!(
                issue_number = self.issue.issue_number,
                unknown,
                "Skipping rows with unknown section names"
            );
        }
        resolve_sections(self.issue.issue_number, &self.rows, expand)
    }
}

/// Load an issue and its column content.
///
/// Both reads run concurrently. A missing issue is reported as not found
/// even when orphan content rows exist; those rows are discarded.
pub async fn load_issue_content(
    pool: &DbPool,
    issue_number: IssueNumber,
) -> AppResult<IssueContent> {
    let (issue, rows) = tokio::try_join!(
        IssueRepo::find_by_number(pool, issue_number),
        ColumnContentRepo::list_by_issue(pool, issue_number),
    )?;

    let issue = issue.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Newsletter issue",
            id: issue_number,
        })
    })?;

    Ok(IssueContent { issue, rows })
}

/// GET /content?issue=
///
/// Return the issue row and all of its column content rows.
pub async fn get_content(
    State(state): State<AppState>,
    Query(params): Query<IssueParams>,
) -> AppResult<impl IntoResponse> {
    let issue_number = parse_issue_number(params.issue.as_deref())?;

    let content = load_issue_content(&state.pool, issue_number).await?;

    tracing::debug!(
        issue_number,
        rows = content.rows.len(),
        "Served issue content"
    );

    Ok(Json(IssueContentResponse {
        newsletter_issue: content.issue,
        column_content: content.rows,
    }))
}

/// GET /issues/{issue}/sections?expanded=&full=
///
/// Return the resolved section blocks for an issue, honouring the given
/// expand state.
pub async fn get_sections(
    State(state): State<AppState>,
    Path(issue): Path<String>,
    Query(params): Query<ViewParams>,
) -> AppResult<impl IntoResponse> {
    let issue_number = parse_issue_number(Some(&issue))?;

    let content = load_issue_content(&state.pool, issue_number).await?;
    let view = params.view_state();

    Ok(Json(DataResponse {
        data: content.sections(&view.expand),
    }))
}
