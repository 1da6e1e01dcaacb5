//! REST API endpoint implementations.

pub mod pfdcm;
pub mod queries;

pub use pfdcm::{about, pacs_status};
pub use queries::{create_or_reuse_query, wait_for_result};
