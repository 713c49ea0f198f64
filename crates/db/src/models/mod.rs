//! Row structs for the two newsletter tables.
//!
//! Both tables are written by the editorial pipeline; this crate only
//! reads them, so there are no create or update DTOs.

pub mod column_content;
pub mod issue;
