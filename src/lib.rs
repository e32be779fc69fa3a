//! Person API Integration Module
//!
//! Client for the Person API directory service, authenticated through the
//! OAuth2 client-credentials grant.
//!
//! # Features
//!
//! - Client Credentials token exchange (RFC 6749 Section 4.4)
//! - Manual token refresh, safe against concurrent queries
//! - Person lookup by user id, UUID, primary email or primary username
//! - Full directory listing over the cursor-paginated `/v2/users` endpoint
//! - LDAP group membership filtering
//!
//! # Example
//!
//! ```rust,ignore
//! use integrations_person_api::{person_api_config, PersonApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = person_api_config()
//!         .client_id("my-client-id")
//!         .client_secret("my-client-secret")
//!         .base_url("https://person.api.sso.mozilla.com")
//!         .auth_url("https://auth.mozilla.auth0.com/oauth/token")
//!         .build()?;
//!
//!     // Fetches the first access token.
//!     let client = PersonApiClient::new(config).await?;
//!
//!     let person = client.get_person_by_email("jdoe@example.com").await?;
//!     println!("{:?}", person.user_id());
//!
//!     let engineers = client.get_persons_in_groups(["team_eng"]).await?;
//!     println!("{} engineers", engineers.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `types`: configuration, token exchange bodies, person records, lookup kinds
//! - `error`: error hierarchy
//! - `core`: HTTP transport abstraction
//! - `flows`: client-credentials token exchange
//! - `token`: credential manager guarding the shared access token
//! - `pagination`: cursor handling for the user listing
//! - `services`: directory queries
//! - `builders`: fluent configuration builder
//! - `client`: high-level client combining all of the above

pub mod builders;
pub mod client;
pub mod core;
pub mod error;
pub mod flows;
pub mod pagination;
pub mod services;
pub mod token;
pub mod types;

// Re-export main client
pub use client::PersonApiClient;

// Re-export builders
pub use builders::{person_api_config, PersonApiConfigBuilder};

// Re-export errors
pub use error::{
    AuthError, ConfigurationError, NetworkError, PersonApiError, PersonApiResult,
    SerializationError,
};

// Re-export types
pub use types::{
    // Config
    ClientCredentials, PersonApiConfig, DEFAULT_AUDIENCE, DEFAULT_SCOPE,
    // Auth
    AuthRequest, AuthResponse,
    // Directory
    AccessInformation, AccessValues, Attribute, LookupKind, Metadata, Person, StandardAttribute,
};

// Re-export core components
pub use crate::core::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, MockHttpTransport,
    ReqwestHttpTransport,
};

// Re-export flows and token management
pub use flows::{ClientCredentialsFlow, ClientCredentialsFlowImpl};
pub use token::{CredentialManager, CredentialState};

// Re-export pagination and services
pub use pagination::{NextPage, UsersPage};
pub use services::PersonsService;
