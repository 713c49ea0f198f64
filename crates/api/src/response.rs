//! Shared response envelope types for API handlers.

use serde::Serialize;

use newsletter_db::models::column_content::ColumnContent;
use newsletter_db::models::issue::NewsletterIssue;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body of `GET /api/v1/content`: the issue row and every column content
/// row stored for it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueContentResponse {
    pub newsletter_issue: NewsletterIssue,
    pub column_content: Vec<ColumnContent>,
}
