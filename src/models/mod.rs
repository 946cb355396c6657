// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod query;
pub mod result_item;

pub use query::Query;
pub use result_item::{ResultItem, SearchRequest, SearchResponse};
