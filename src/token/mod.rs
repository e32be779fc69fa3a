//! Token Management
//!
//! Access token ownership and renewal.

pub mod manager;

pub use manager::{CredentialManager, CredentialState};
