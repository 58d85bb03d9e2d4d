//! Identity platform configuration.
//!
//! Built once at application start and handed to [`AuthClient`](crate::AuthClient);
//! nothing in this crate reads ambient state after construction.

use url::Url;

/// Base URL of the hosted Identity Toolkit API.
pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

/// Where the platform sends federated popups back to once the provider
/// has finished. Must be an authorized redirect URI of the project.
pub const DEFAULT_CONTINUE_URI: &str = "http://localhost:8080/auth/callback";

/// Identity platform project configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Browser API key of the platform project. Identifies the project,
    /// grants no privileged access.
    pub api_key: String,
    /// Base URL the `accounts:*` operations are rooted at.
    pub endpoint: Url,
    /// Redirect target for federated sign-in popups.
    pub continue_uri: Url,
}

impl AuthConfig {
    /// Config for the given project key, with the hosted endpoint.
    pub fn new(api_key: impl Into<String>, continue_uri: Url) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            continue_uri,
        }
    }

    /// Point the client at a different endpoint, e.g. a local emulator.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Create config from environment variables.
    ///
    /// `AUTH_API_KEY` is required; `AUTH_ENDPOINT` and `AUTH_CONTINUE_URI`
    /// fall back to the hosted endpoint and the local dev callback.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("AUTH_API_KEY").map_err(|_| "AUTH_API_KEY not set")?;
        let endpoint = std::env::var("AUTH_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let continue_uri = std::env::var("AUTH_CONTINUE_URI")
            .unwrap_or_else(|_| DEFAULT_CONTINUE_URI.to_string());

        Ok(Self {
            api_key,
            endpoint: Url::parse(&endpoint).map_err(|e| e.to_string())?,
            continue_uri: Url::parse(&continue_uri).map_err(|e| e.to_string())?,
        })
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_hosted_endpoint() {
        let continue_uri = Url::parse("https://app.example.com/auth/callback").unwrap();
        let config = AuthConfig::new("key-123", continue_uri.clone());

        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.endpoint.as_str(), "https://identitytoolkit.googleapis.com/");
        assert_eq!(config.continue_uri, continue_uri);
    }

    #[test]
    fn test_with_endpoint_overrides_default() {
        let continue_uri = Url::parse("http://localhost:8080/auth/callback").unwrap();
        let emulator = Url::parse("http://localhost:9099").unwrap();
        let config = AuthConfig::new("key-123", continue_uri).with_endpoint(emulator.clone());

        assert_eq!(config.endpoint, emulator);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_from_env_applies_defaults() {
        std::env::set_var("AUTH_API_KEY", "env-key");
        std::env::remove_var("AUTH_ENDPOINT");
        std::env::remove_var("AUTH_CONTINUE_URI");

        let config = AuthConfig::from_env().unwrap();

        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.endpoint.as_str(), "https://identitytoolkit.googleapis.com/");
        assert_eq!(config.continue_uri.as_str(), "http://localhost:8080/auth/callback");
    }
}
