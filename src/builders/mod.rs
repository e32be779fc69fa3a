//! Builders
//!
//! Fluent builders for Person API configuration.

pub mod config;

pub use config::{person_api_config, PersonApiConfigBuilder};
