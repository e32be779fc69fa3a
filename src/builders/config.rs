//! Configuration Builder
//!
//! Fluent builder for Person API configuration.

use std::time::Duration;
use url::Url;

use crate::core::DEFAULT_MAX_RESPONSE_SIZE;
use crate::error::{ConfigurationError, PersonApiError};
use crate::types::{PersonApiConfig, DEFAULT_AUDIENCE, DEFAULT_SCOPE};

/// Person API configuration builder.
#[derive(Default)]
pub struct PersonApiConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    base_url: Option<String>,
    auth_url: Option<String>,
    audience: Option<String>,
    scope: Option<String>,
    timeout: Option<Duration>,
    max_response_size: Option<usize>,
}

impl PersonApiConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set client ID.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set client secret.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set directory API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set authorization endpoint URL.
    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = Some(url.into());
        self
    }

    /// Override the token audience.
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Override the token scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum response size for the default transport.
    pub fn max_response_size(mut self, bytes: usize) -> Self {
        self.max_response_size = Some(bytes);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<PersonApiConfig, PersonApiError> {
        let client_id = required(self.client_id, "client_id")?;
        let client_secret = required(self.client_secret, "client_secret")?;
        let base_url = required(self.base_url, "base_url")?;
        let auth_url = required(self.auth_url, "auth_url")?;

        validate_url(&base_url)?;
        validate_url(&auth_url)?;

        if self.max_response_size == Some(0) {
            return Err(ConfigurationError::InvalidValue {
                field: "max_response_size".to_string(),
                message: "must be greater than zero".to_string(),
            }
            .into());
        }

        let mut config = PersonApiConfig::new(client_id, client_secret, base_url, auth_url);
        config.audience = self.audience.unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());
        config.scope = self.scope.unwrap_or_else(|| DEFAULT_SCOPE.to_string());
        config.timeout = self.timeout;
        config.max_response_size = self.max_response_size.unwrap_or(DEFAULT_MAX_RESPONSE_SIZE);

        Ok(config)
    }
}

impl PersonApiConfig {
    /// Create a configuration builder.
    pub fn builder() -> PersonApiConfigBuilder {
        PersonApiConfigBuilder::new()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `PERSON_API_CLIENT_ID`, `PERSON_API_CLIENT_SECRET`,
    /// `PERSON_API_BASE_URL` and `PERSON_API_AUTH_URL`, plus the optional
    /// `PERSON_API_AUDIENCE`, `PERSON_API_SCOPE` and `PERSON_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, PersonApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, PersonApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = PersonApiConfigBuilder::new();

        if let Some(id) = lookup("PERSON_API_CLIENT_ID") {
            builder = builder.client_id(id);
        }
        if let Some(secret) = lookup("PERSON_API_CLIENT_SECRET") {
            builder = builder.client_secret(secret);
        }
        if let Some(url) = lookup("PERSON_API_BASE_URL") {
            builder = builder.base_url(url);
        }
        if let Some(url) = lookup("PERSON_API_AUTH_URL") {
            builder = builder.auth_url(url);
        }
        if let Some(audience) = lookup("PERSON_API_AUDIENCE") {
            builder = builder.audience(audience);
        }
        if let Some(scope) = lookup("PERSON_API_SCOPE") {
            builder = builder.scope(scope);
        }
        if let Some(timeout) = lookup("PERSON_API_TIMEOUT_SECS") {
            let secs = timeout
                .parse::<u64>()
                .map_err(|e| ConfigurationError::InvalidValue {
                    field: "PERSON_API_TIMEOUT_SECS".to_string(),
                    message: e.to_string(),
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }
}

/// Create a new configuration builder.
pub fn person_api_config() -> PersonApiConfigBuilder {
    PersonApiConfigBuilder::new()
}

fn required(value: Option<String>, field: &str) -> Result<String, ConfigurationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigurationError::MissingRequired {
            field: field.to_string(),
        })
}

fn validate_url(url: &str) -> Result<(), ConfigurationError> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigurationError::InvalidEndpoint {
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn complete_builder() -> PersonApiConfigBuilder {
        person_api_config()
            .client_id("client")
            .client_secret("secret")
            .base_url("https://person.api.example.com/")
            .auth_url("https://auth.example.com/oauth/token")
    }

    #[test]
    fn test_build_with_defaults() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.credentials.client_id, "client");
        assert_eq!(config.credentials.client_secret.expose_secret(), "secret");
        assert_eq!(config.base_url, "https://person.api.example.com");
        assert_eq!(config.auth_url, "https://auth.example.com/oauth/token");
        assert_eq!(config.audience, DEFAULT_AUDIENCE);
        assert_eq!(config.scope, DEFAULT_SCOPE);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_build_with_overrides() {
        let config = complete_builder()
            .audience("api.test.sso.example.com")
            .scope("classification:staff_only")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.audience, "api.test.sso.example.com");
        assert_eq!(config.scope, "classification:staff_only");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_missing_required_field() {
        let result = person_api_config()
            .client_id("client")
            .client_secret("secret")
            .base_url("https://person.api.example.com")
            .build();
        assert!(matches!(
            result,
            Err(PersonApiError::Configuration(ConfigurationError::MissingRequired { ref field }))
                if field == "auth_url"
        ));
    }

    #[test]
    fn test_invalid_url() {
        let result = complete_builder().base_url("not a url").build();
        assert!(matches!(
            result,
            Err(PersonApiError::Configuration(ConfigurationError::InvalidEndpoint { .. }))
        ));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("PERSON_API_CLIENT_ID", "env-client"),
            ("PERSON_API_CLIENT_SECRET", "env-secret"),
            ("PERSON_API_BASE_URL", "https://person.api.example.com"),
            ("PERSON_API_AUTH_URL", "https://auth.example.com/oauth/token"),
            ("PERSON_API_TIMEOUT_SECS", "12"),
        ]
        .into_iter()
        .collect();

        let config =
            PersonApiConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(config.credentials.client_id, "env-client");
        assert_eq!(config.timeout, Some(Duration::from_secs(12)));
        assert_eq!(config.audience, DEFAULT_AUDIENCE);
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = PersonApiConfig::from_lookup(|name| match name {
            "PERSON_API_TIMEOUT_SECS" => Some("soon".to_string()),
            _ => Some("https://example.com".to_string()),
        });
        assert!(matches!(
            result,
            Err(PersonApiError::Configuration(ConfigurationError::InvalidValue { .. }))
        ));
    }
}
