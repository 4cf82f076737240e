use std::{fmt, time::Duration};

use crate::error::{Error, Result};

/// Base URL of the live API
pub const DEFAULT_ENDPOINT: &str = "https://api.stripe.com/v1";

/// Environment variable holding the secret API key
pub const API_KEY_ENV: &str = "STRIPE_API_KEY";

/// Environment variable overriding [`DEFAULT_ENDPOINT`]
pub const ENDPOINT_ENV: &str = "STRIPE_API_BASE";

/// Configuration for a [`Client`](crate::Client)
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL, including the version prefix
    pub endpoint: String,

    /// Secret API key, sent as a bearer token
    pub api_key: String,

    /// Timeout applied to each request (none by default)
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new configuration for the live endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    /// Read the API key (and optionally the endpoint) from the environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", API_KEY_ENV)))?;

        let mut config = Self::new(api_key);
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|e| !e.is_empty()) {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// Set the base URL (e.g. a local mock server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether the key is a test-mode key
    pub fn is_test_mode(&self) -> bool {
        self.api_key.starts_with("sk_test_")
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
