//! Configuration Types
//!
//! Person API client configuration types.

use secrecy::SecretString;
use std::time::Duration;

use crate::core::DEFAULT_MAX_RESPONSE_SIZE;

/// Audience requested for Person API tokens.
pub const DEFAULT_AUDIENCE: &str = "api.sso.mozilla.com";

/// Scope requested for Person API tokens.
pub const DEFAULT_SCOPE: &str = "classification:public display:public";

/// Person API client configuration.
#[derive(Clone, Debug)]
pub struct PersonApiConfig {
    /// Client credentials.
    pub credentials: ClientCredentials,
    /// Directory API base URL, without trailing slash.
    pub base_url: String,
    /// Authorization (token) endpoint URL.
    pub auth_url: String,
    /// Audience sent with every token request.
    pub audience: String,
    /// Scope sent with every token request.
    pub scope: String,
    /// Timeout for the default HTTP transport.
    pub timeout: Option<Duration>,
    /// Maximum accepted response body size for the default HTTP transport.
    pub max_response_size: usize,
}

impl PersonApiConfig {
    /// Create a configuration with default audience and scope.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        base_url: impl Into<String>,
        auth_url: impl Into<String>,
    ) -> Self {
        Self {
            credentials: ClientCredentials {
                client_id: client_id.into(),
                client_secret: SecretString::new(client_secret.into()),
            },
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_url: auth_url.into(),
            audience: DEFAULT_AUDIENCE.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            timeout: None,
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }

    /// Join a path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Client credentials for the client-credentials grant.
#[derive(Clone)]
pub struct ClientCredentials {
    /// Client identifier.
    pub client_id: String,
    /// Client secret.
    pub client_secret: SecretString,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let config = PersonApiConfig::new(
            "id",
            "secret",
            "https://person.api.example.com/",
            "https://auth.example.com/oauth/token",
        );
        assert_eq!(config.base_url, "https://person.api.example.com");
        assert_eq!(
            config.endpoint("/v2/users"),
            "https://person.api.example.com/v2/users"
        );
        assert_eq!(config.audience, DEFAULT_AUDIENCE);
        assert_eq!(config.scope, DEFAULT_SCOPE);
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let config = PersonApiConfig::new("id", "hunter2", "https://a.example", "https://b.example");
        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }
}
