//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing. The
//! mocks are plain in-memory port implementations that record what they
//! were asked to do, so tests can assert on effective queries and insert
//! ordering without a database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
