use newsletter_core::resolver::ColumnRow;
use newsletter_core::types::{DbId, IssueNumber, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `column_content` table.
///
/// `preview_text` and `full_text` are pre-sanitized HTML, except in the
/// Hallucination section where `full_text` is an image URL.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ColumnContent {
    pub id: DbId,
    pub issue_number: Option<IssueNumber>,
    pub section_name: Option<String>,
    pub preview_text: Option<String>,
    pub full_text: String,
    pub display_order: i32,
    pub created_at: Timestamp,
}

impl ColumnRow for ColumnContent {
    fn id(&self) -> DbId {
        self.id
    }

    fn issue_number(&self) -> Option<IssueNumber> {
        self.issue_number
    }

    fn section_name(&self) -> Option<&str> {
        self.section_name.as_deref()
    }

    fn preview_text(&self) -> Option<&str> {
        self.preview_text.as_deref()
    }

    fn full_text(&self) -> &str {
        &self.full_text
    }
}
