//! Repository for the `newsletter_issues` table.

use newsletter_core::types::IssueNumber;
use sqlx::PgPool;

use crate::models::issue::NewsletterIssue;

/// Column list for newsletter_issues queries.
const COLUMNS: &str = "issue_number, publication_date, headline, subheadline, \
    editors_note, cover_image, created_at";

/// Read access to newsletter issues.
pub struct IssueRepo;

impl IssueRepo {
    /// Find an issue by its issue number.
    pub async fn find_by_number(
        pool: &PgPool,
        issue_number: IssueNumber,
    ) -> Result<Option<NewsletterIssue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM newsletter_issues WHERE issue_number = $1");
        sqlx::query_as::<_, NewsletterIssue>(&query)
            .bind(issue_number)
            .fetch_optional(pool)
            .await
    }
}
