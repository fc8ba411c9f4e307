//! Application layer
//!
//! Use cases sitting between the HTTP handlers and the domain ports.

pub mod catalog_service;

pub use catalog_service::{CatalogService, MAX_PAGE_SIZE};
