//! Authentication support
//!
//! The admin session's bearer token is issued elsewhere (login flow);
//! this module only attaches it to outgoing requests.

use std::fmt;
use std::sync::Arc;

/// Source of the session bearer token
pub trait TokenSource: Send + Sync + fmt::Debug {
    /// Current bearer token, if the session is authenticated
    fn bearer_token(&self) -> Option<String>;
}

/// Fixed token for the lifetime of the session
#[derive(Clone)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenSource for SessionToken {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl fmt::Debug for SessionToken {
    // Never print the token itself
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Unauthenticated session
#[derive(Debug, Clone, Copy)]
pub struct Anonymous;

impl TokenSource for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// HTTP client wrapper that attaches the Authorization header
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    http_client: reqwest::Client,
    token_source: Arc<dyn TokenSource>,
}

impl AuthenticatedClient {
    pub fn new(http_client: reqwest::Client, token_source: Arc<dyn TokenSource>) -> Self {
        Self {
            http_client,
            token_source,
        }
    }

    /// Get a request builder with the Authorization header set
    pub fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http_client.request(method, url);
        if let Some(token) = self.token_source.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}
