//! Client Credentials Flow
//!
//! RFC 6749 Section 4.4 grant, with the JSON request body the Person API's
//! authorization endpoint expects.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::debug;

use crate::core::{HttpRequest, HttpTransport};
use crate::error::{AuthError, PersonApiError, SerializationError};
use crate::types::{AuthRequest, AuthResponse, PersonApiConfig};

/// Client Credentials Flow interface.
#[async_trait]
pub trait ClientCredentialsFlow: Send + Sync {
    /// Exchange the client credentials for an access token at `auth_url`.
    async fn fetch_access_token(&self, auth_url: &str) -> Result<String, PersonApiError>;
}

/// Client Credentials Flow implementation.
pub struct ClientCredentialsFlowImpl<T: HttpTransport> {
    config: Arc<PersonApiConfig>,
    transport: Arc<T>,
}

impl<T: HttpTransport> ClientCredentialsFlowImpl<T> {
    /// Create new Client Credentials Flow.
    pub fn new(config: Arc<PersonApiConfig>, transport: Arc<T>) -> Self {
        Self { config, transport }
    }

    fn build_request_body(&self) -> Result<Vec<u8>, PersonApiError> {
        let request = AuthRequest::client_credentials(
            &self.config.audience,
            &self.config.scope,
            &self.config.credentials.client_id,
            self.config.credentials.client_secret.expose_secret(),
        );

        serde_json::to_vec(&request).map_err(|e| {
            SerializationError::Encode {
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl<T: HttpTransport> ClientCredentialsFlow for ClientCredentialsFlowImpl<T> {
    async fn fetch_access_token(&self, auth_url: &str) -> Result<String, PersonApiError> {
        let body = self.build_request_body()?;

        debug!(
            auth_url,
            client_id = %self.config.credentials.client_id,
            audience = %self.config.audience,
            "Requesting access token"
        );

        let response = self.transport.send(HttpRequest::json_post(auth_url, body)).await?;

        if response.is_error() {
            return Err(AuthError::Rejected {
                status: response.status,
            }
            .into());
        }

        let auth_response: AuthResponse = serde_json::from_slice(&response.body)
            .map_err(|e| SerializationError::decode("token response", e))?;

        Ok(auth_response.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HttpMethod, HttpResponse, MockHttpTransport};

    const AUTH_URL: &str = "https://auth.example.com/oauth/token";

    fn create_flow() -> (ClientCredentialsFlowImpl<MockHttpTransport>, Arc<MockHttpTransport>) {
        let config = Arc::new(PersonApiConfig::new(
            "test-client",
            "test-secret",
            "https://person.api.example.com",
            AUTH_URL,
        ));
        let transport = Arc::new(MockHttpTransport::new());
        (
            ClientCredentialsFlowImpl::new(config, transport.clone()),
            transport,
        )
    }

    #[tokio::test]
    async fn test_fetch_access_token() {
        let (flow, transport) = create_flow();
        transport.queue_token_response("token-1");

        let token = flow.fetch_access_token(AUTH_URL).await.unwrap();
        assert_eq!(token, "token-1");

        let request = transport.get_last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, AUTH_URL);
        assert_eq!(request.header("content-type"), Some("application/json"));

        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "audience": "api.sso.mozilla.com",
                "scope": "classification:public display:public",
                "grant_type": "client_credentials",
                "client_id": "test-client",
                "client_secret": "test-secret",
            })
        );
    }

    #[tokio::test]
    async fn test_fetch_uses_given_url() {
        let (flow, transport) = create_flow();
        transport.queue_token_response("token-2");

        flow.fetch_access_token("https://other.example.com/token")
            .await
            .unwrap();
        assert_eq!(
            transport.get_last_request().unwrap().url,
            "https://other.example.com/token"
        );
    }

    #[tokio::test]
    async fn test_rejected_status() {
        let (flow, transport) = create_flow();
        transport.queue_json_response(403, &serde_json::json!({"error": "access_denied"}));

        let result = flow.fetch_access_token(AUTH_URL).await;
        assert!(matches!(
            result,
            Err(PersonApiError::Auth(AuthError::Rejected { status: 403 }))
        ));
    }

    #[tokio::test]
    async fn test_unparsable_body() {
        let (flow, transport) = create_flow();
        transport.queue_response(HttpResponse::new(200, "<html>oops</html>"));

        let result = flow.fetch_access_token(AUTH_URL).await;
        assert!(matches!(
            result,
            Err(PersonApiError::Serialization(SerializationError::Decode { .. }))
        ));
    }
}
