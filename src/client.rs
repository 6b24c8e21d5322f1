//! Top-level API client

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::participants::ParticipantsService;
use std::time::Duration;
use url::Url;

/// Client for a meeting participants API
///
/// Cheap to share behind a reference; concurrent calls are safe because
/// every traversal owns its own accumulator.
#[derive(Debug)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Create a client with a bearer token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .bearer_token(token)
            .build()
    }

    /// Create a client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Access the meeting participants resource
    pub fn participants(&self) -> ParticipantsService<'_> {
        ParticipantsService::new(&self.http)
    }

    /// The underlying HTTP transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Builder for [`Client`]
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    auth: AuthConfig,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Set the API base URL (required)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Authenticate with a bearer token
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthConfig::bearer(token);
        self
    }

    /// Set the authentication config directly
    #[must_use]
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client, validating the base URL
    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::config("base URL is required"))?;
        Url::parse(&base_url)?;

        let mut config = HttpClientConfig::builder()
            .base_url(base_url)
            .auth(self.auth);
        if let Some(timeout) = self.timeout {
            config = config.timeout(timeout);
        }
        if let Some(agent) = self.user_agent {
            config = config.user_agent(agent);
        }

        Ok(Client {
            http: HttpClient::with_config(config.build())?,
        })
    }
}
