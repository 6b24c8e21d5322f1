//! Request authentication
//!
//! Supports: None, Bearer, Basic
//!
//! The source APIs use a static access token, so there is no token refresh
//! or caching here; the configured credentials are applied to every
//! outgoing request as-is.

use reqwest::RequestBuilder;

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password, if any
        password: Option<String>,
    },
}

impl AuthConfig {
    /// Create a bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Create an HTTP Basic config
    pub fn basic(username: impl Into<String>, password: Option<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password,
        }
    }

    /// Apply this configuration to an outgoing request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Self::None => req,
            Self::Bearer { token } => req.bearer_auth(token),
            Self::Basic { username, password } => req.basic_auth(username, password.as_ref()),
        }
    }

    /// Check whether any credentials are configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert!(AuthConfig::default().is_none());
        assert!(!AuthConfig::bearer("tok").is_none());
    }

    #[test]
    fn test_bearer_header() {
        let client = reqwest::Client::new();
        let req = AuthConfig::bearer("secret")
            .apply(client.get("https://example.com"))
            .build()
            .unwrap();
        assert_eq!(
            req.headers().get("authorization").unwrap(),
            "Bearer secret"
        );
    }

    #[test]
    fn test_basic_header() {
        let client = reqwest::Client::new();
        let req = AuthConfig::basic("user", Some("pass".to_string()))
            .apply(client.get("https://example.com"))
            .build()
            .unwrap();
        let value = req.headers().get("authorization").unwrap().to_str().unwrap();
        assert!(value.starts_with("Basic "));
    }
}
