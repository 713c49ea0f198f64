//! Issue identifier validation.

use crate::error::CoreError;
use crate::types::IssueNumber;

/// Issue shown on the front page when `CURRENT_ISSUE` is not configured.
pub const DEFAULT_CURRENT_ISSUE: IssueNumber = 1222;

pub const MSG_ISSUE_REQUIRED: &str = "Issue number is required";
pub const MSG_ISSUE_NOT_INTEGER: &str = "Issue number must be an integer";

/// Parse the raw `issue` query parameter.
///
/// Missing or blank values and anything that is not a plain base-10
/// integer are rejected, so the store is never queried with a bad key.
pub fn parse_issue_number(raw: Option<&str>) -> Result<IssueNumber, CoreError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(CoreError::Validation(MSG_ISSUE_REQUIRED.to_string()));
    }
    raw.parse::<IssueNumber>()
        .map_err(|_| CoreError::Validation(MSG_ISSUE_NOT_INTEGER.to_string()))
}
