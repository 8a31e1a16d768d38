//! Client Configuration

use std::time::Duration;

/// Configuration for the back-office client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the back-office API
    pub base_url: String,

    /// Bearer token for the current admin session
    pub bearer_token: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,
}

impl Config {
    /// Create a new configuration with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            bearer_token: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("bo-admin/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the session bearer token
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
