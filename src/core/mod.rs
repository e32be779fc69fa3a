//! Person API Core Components
//!
//! Core infrastructure shared by the credential manager and the directory
//! services.

pub mod transport;

pub use transport::*;
