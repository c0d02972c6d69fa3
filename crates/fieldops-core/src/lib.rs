//! Ambient plumbing shared by the admin client crates: configuration loading,
//! tracing setup and the fetch error taxonomy.

pub mod config;
pub mod error;
pub mod tracing;
