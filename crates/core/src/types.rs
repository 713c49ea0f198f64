/// Newsletter issues are keyed by their published issue number (PostgreSQL INTEGER).
pub type IssueNumber = i32;

/// Surrogate keys are PostgreSQL SERIAL.
pub type DbId = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
