//! Person API Client
//!
//! High-level client combining credential management and directory queries.

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use crate::core::{HttpRequest, HttpTransport, ReqwestHttpTransport, DEFAULT_TIMEOUT};
use crate::error::{PersonApiError, PersonApiResult, SerializationError};
use crate::flows::ClientCredentialsFlowImpl;
use crate::services::PersonsService;
use crate::token::{CredentialManager, CredentialState};
use crate::types::{LookupKind, Person, PersonApiConfig};

/// Client for the Person API directory service.
///
/// Construction fetches the first access token, so a returned client is
/// always ready to query. The client is `Send + Sync`; share it through an
/// `Arc` to query from many tasks at once.
pub struct PersonApiClient<T: HttpTransport = ReqwestHttpTransport> {
    config: Arc<PersonApiConfig>,
    transport: Arc<T>,
    credentials: CredentialManager<ClientCredentialsFlowImpl<T>>,
}

impl PersonApiClient<ReqwestHttpTransport> {
    /// Create a client using the reqwest transport.
    pub async fn new(config: PersonApiConfig) -> PersonApiResult<Self> {
        let transport = ReqwestHttpTransport::with_options(
            config.timeout.unwrap_or(DEFAULT_TIMEOUT),
            config.max_response_size,
        )?;
        Self::with_transport(config, transport).await
    }

    /// Create a client from `PERSON_API_*` environment variables.
    pub async fn from_env() -> PersonApiResult<Self> {
        Self::new(PersonApiConfig::from_env()?).await
    }
}

impl<T: HttpTransport> PersonApiClient<T> {
    /// Create a client with a custom transport.
    pub async fn with_transport(config: PersonApiConfig, transport: T) -> PersonApiResult<Self> {
        let config = Arc::new(config);
        let transport = Arc::new(transport);
        let flow = Arc::new(ClientCredentialsFlowImpl::new(
            config.clone(),
            transport.clone(),
        ));
        let credentials = CredentialManager::initialize(flow, config.auth_url.clone()).await?;

        Ok(Self {
            config,
            transport,
            credentials,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &PersonApiConfig {
        &self.config
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Gets the persons service.
    pub fn persons(&self) -> PersonsService<'_, T> {
        PersonsService::new(self)
    }

    pub(crate) fn credentials(&self) -> &CredentialManager<ClientCredentialsFlowImpl<T>> {
        &self.credentials
    }

    // ========== Credentials ==========

    /// Fetch a new access token and swap it in.
    ///
    /// Blocks all queries until the token request completes.
    pub async fn refresh_access_token(&self) -> PersonApiResult<()> {
        self.credentials.refresh().await
    }

    /// Request a token from `auth_url` with this client's credentials.
    ///
    /// The stored token is left untouched.
    pub async fn fetch_access_token(&self, auth_url: &str) -> PersonApiResult<String> {
        self.credentials.fetch_access_token(auth_url).await
    }

    /// Copy of the token currently used for queries.
    pub async fn current_access_token(&self) -> SecretString {
        self.credentials.current_access_token().await
    }

    // ========== Directory ==========

    /// Look up a person by identifier.
    pub async fn get_person(&self, kind: LookupKind, value: &str) -> PersonApiResult<Person> {
        self.persons().get(kind, value).await
    }

    pub async fn get_person_by_user_id(&self, user_id: &str) -> PersonApiResult<Person> {
        self.get_person(LookupKind::UserId, user_id).await
    }

    pub async fn get_person_by_uuid(&self, uuid: &str) -> PersonApiResult<Person> {
        self.get_person(LookupKind::Uuid, uuid).await
    }

    pub async fn get_person_by_email(&self, primary_email: &str) -> PersonApiResult<Person> {
        self.get_person(LookupKind::PrimaryEmail, primary_email).await
    }

    pub async fn get_person_by_username(&self, primary_username: &str) -> PersonApiResult<Person> {
        self.get_person(LookupKind::PrimaryUsername, primary_username)
            .await
    }

    /// List every person in the directory.
    pub async fn get_all_users(&self) -> PersonApiResult<Vec<Person>> {
        self.persons().list_all().await
    }

    /// List people in at least one of the given LDAP groups.
    pub async fn get_persons_in_groups<I, S>(&self, groups: I) -> PersonApiResult<Vec<Person>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.persons().list_in_groups(groups).await
    }

    /// Authenticated GET of `path`, decoded as JSON.
    ///
    /// Takes the credential state by reference so callers decide how long
    /// the read lock is held.
    pub(crate) async fn get_json<R: DeserializeOwned>(
        &self,
        credentials: &CredentialState,
        path: &str,
        target: &'static str,
    ) -> PersonApiResult<R> {
        let url = self.config.endpoint(path);
        debug!(url = %url, "Sending directory request");

        let response = self
            .transport
            .send(HttpRequest::authorized_get(url, credentials.access_token()))
            .await?;

        if response.is_error() {
            return Err(PersonApiError::Api {
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| SerializationError::decode(target, e).into())
    }
}
