//! Person API Types
//!
//! Core type definitions for the Person API client.

pub mod auth;
pub mod config;
pub mod lookup;
pub mod person;

pub use auth::*;
pub use config::*;
pub use lookup::*;
pub use person::*;
