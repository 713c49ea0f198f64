use crate::types::IssueNumber;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} {id}")]
    NotFound { entity: &'static str, id: IssueNumber },

    #[error("Validation failed: {0}")]
    Validation(String),
}
