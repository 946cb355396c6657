// file: src/api/mod.rs
// description: search API client module exports
// reference: internal module structure

pub mod client;

pub use client::{HttpSearchApi, SearchApi};
