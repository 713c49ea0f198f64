//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod column_content_repo;
pub mod issue_repo;

pub use column_content_repo::ColumnContentRepo;
pub use issue_repo::IssueRepo;
