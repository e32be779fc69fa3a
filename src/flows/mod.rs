//! Authorization Flows
//!
//! The Person API only issues tokens through the client-credentials grant.

pub mod client_credentials;

pub use client_credentials::{ClientCredentialsFlow, ClientCredentialsFlowImpl};
