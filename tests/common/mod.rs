//! Common test utilities for cache-users integration tests

#[allow(dead_code)]
pub mod fixtures;

pub use fixtures::*;
