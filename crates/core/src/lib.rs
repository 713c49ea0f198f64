//! Domain logic for the Context Window newsletter reader.
//!
//! This crate has no database or HTTP dependencies: it holds the section
//! registry, the resolver that turns raw column rows into renderable
//! section blocks, and the per-viewer presentation state.

pub mod error;
pub mod html;
pub mod issue;
pub mod resolver;
pub mod section;
pub mod types;
pub mod view;
