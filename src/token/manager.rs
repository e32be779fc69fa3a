//! Credential Manager
//!
//! Holds the current access token behind an async reader/writer lock.
//! Readers keep the read guard for the whole of their network activity, so
//! a refresh waits for in-flight queries and blocks new ones until the
//! swapped token is in place.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, info};

use crate::error::PersonApiResult;
use crate::flows::ClientCredentialsFlow;

/// Mutable credential state guarded by the manager's lock.
pub struct CredentialState {
    access_token: SecretString,
}

impl CredentialState {
    /// The bearer token to send with directory requests.
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

impl std::fmt::Debug for CredentialState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialState")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Owns the access token and the flow used to renew it.
pub struct CredentialManager<F: ClientCredentialsFlow> {
    flow: Arc<F>,
    auth_url: String,
    state: RwLock<CredentialState>,
}

impl<F: ClientCredentialsFlow> CredentialManager<F> {
    /// Fetch the first token and build the manager.
    ///
    /// Any fetch failure is reported as an authentication error and no
    /// manager is returned.
    pub async fn initialize(flow: Arc<F>, auth_url: impl Into<String>) -> PersonApiResult<Self> {
        let auth_url = auth_url.into();
        let access_token = flow
            .fetch_access_token(&auth_url)
            .await
            .map_err(|e| e.into_auth_error())?;

        debug!(auth_url = %auth_url, "Obtained initial access token");

        Ok(Self {
            flow,
            auth_url,
            state: RwLock::new(CredentialState {
                access_token: SecretString::new(access_token),
            }),
        })
    }

    /// Replace the stored token with a freshly fetched one.
    ///
    /// The write lock is held across the token request. On failure the
    /// previous token stays in place.
    pub async fn refresh(&self) -> PersonApiResult<()> {
        let mut state = self.state.write().await;

        let access_token = self
            .flow
            .fetch_access_token(&self.auth_url)
            .await
            .map_err(|e| e.into_auth_error())?;

        state.access_token = SecretString::new(access_token);
        info!(auth_url = %self.auth_url, "Access token refreshed");
        Ok(())
    }

    /// Acquire shared access to the credential state.
    pub async fn read(&self) -> RwLockReadGuard<'_, CredentialState> {
        self.state.read().await
    }

    /// Fetch a token from an arbitrary endpoint without touching the stored one.
    pub async fn fetch_access_token(&self, auth_url: &str) -> PersonApiResult<String> {
        self.flow.fetch_access_token(auth_url).await
    }

    /// Copy of the current token.
    pub async fn current_access_token(&self) -> SecretString {
        let state = self.read().await;
        SecretString::new(state.access_token().to_string())
    }
}
