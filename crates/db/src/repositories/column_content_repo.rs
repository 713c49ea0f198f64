//! Repository for the `column_content` table.

use newsletter_core::types::IssueNumber;
use sqlx::PgPool;

use crate::models::column_content::ColumnContent;

/// Column list for column_content queries.
const COLUMNS: &str = "id, issue_number, section_name, preview_text, full_text, \
    display_order, created_at";

/// Read access to per-section column content.
pub struct ColumnContentRepo;

impl ColumnContentRepo {
    /// List every content row of an issue, in editorial order within each
    /// section. Returns an empty list for unknown issues.
    pub async fn list_by_issue(
        pool: &PgPool,
        issue_number: IssueNumber,
    ) -> Result<Vec<ColumnContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM column_content
             WHERE issue_number = $1
             ORDER BY section_name, display_order, id"
        );
        let rows = sqlx::query_as::<_, ColumnContent>(&query)
            .bind(issue_number)
            .fetch_all(pool)
            .await?;
        tracing::debug!(issue_number, rows = rows.len(), "Loaded column content");
        Ok(rows)
    }
}
