//! Test utilities for the admin client crates.
//!
//! Provides an in-memory stand-in for the remote REST API and a loader for
//! the JSON record fixtures under `fixtures/`.
//! Import in `#[cfg(test)]` blocks and integration tests only, never in production code.

pub mod fixture;
pub mod memory;

pub use memory::{Call, MemoryStore, Op};
