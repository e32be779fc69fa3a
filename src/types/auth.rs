//! Authorization Types
//!
//! Request and response bodies for the client-credentials token exchange.

use serde::{Deserialize, Serialize};

/// Grant type sent with every token request.
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

/// Token request body, posted as JSON to the authorization endpoint.
#[derive(Clone, Serialize)]
pub struct AuthRequest<'a> {
    pub audience: &'a str,
    pub scope: &'a str,
    pub grant_type: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

impl<'a> AuthRequest<'a> {
    /// Build a client-credentials request.
    pub fn client_credentials(
        audience: &'a str,
        scope: &'a str,
        client_id: &'a str,
        client_secret: &'a str,
    ) -> Self {
        Self {
            audience,
            scope,
            grant_type: CLIENT_CREDENTIALS_GRANT,
            client_id,
            client_secret,
        }
    }
}

impl std::fmt::Debug for AuthRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("audience", &self.audience)
            .field("scope", &self.scope)
            .field("grant_type", &self.grant_type)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Token response from the authorization endpoint.
#[derive(Clone, Deserialize, Serialize)]
pub struct AuthResponse {
    /// Access token.
    pub access_token: String,
    /// Granted scopes.
    #[serde(default)]
    pub scope: Option<String>,
    /// Lifetime in seconds. Parsed, never acted upon.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"[REDACTED]")
            .field("scope", &self.scope)
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}
