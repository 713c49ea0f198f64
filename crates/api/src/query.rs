//! Shared query parameter types for API and page handlers.

use serde::Deserialize;

use newsletter_core::view::ViewState;

/// `?issue=` as received. Kept as a raw string so a missing or malformed
/// value is reported by our own validation instead of a generic
/// extractor rejection.
#[derive(Debug, Deserialize)]
pub struct IssueParams {
    pub issue: Option<String>,
}

/// Presentation state threaded through the page URL
/// (`?expanded=fine-tuning,alignment&full=alignment`).
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    pub expanded: Option<String>,
    pub full: Option<String>,
}

impl ViewParams {
    pub fn view_state(&self) -> ViewState {
        ViewState::from_query(self.expanded.as_deref(), self.full.as_deref())
    }
}
