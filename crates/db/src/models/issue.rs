use newsletter_core::types::{IssueNumber, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `newsletter_issues` table.
///
/// `editors_note` is pre-sanitized HTML.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NewsletterIssue {
    pub issue_number: IssueNumber,
    pub publication_date: Option<String>,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub editors_note: Option<String>,
    pub cover_image: Option<String>,
    pub created_at: Timestamp,
}
