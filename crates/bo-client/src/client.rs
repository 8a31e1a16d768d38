//! High-level roles client

use crate::auth::{Anonymous, AuthenticatedClient, SessionToken, TokenSource};
use crate::config::Config;
use crate::dto::{AddRoleRequest, CreatedRole, Envelope, MutateRoleRequest, Role};
use crate::error::{Error, Result};
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

/// Roles endpoint paths
pub const GET_ROLES: &str = "/api/roles";
pub const ADD_ROLE: &str = "/api/roles/add";
pub const UPDATE_ROLE: &str = "/api/roles/update";
pub const DELETE_ROLE: &str = "/api/roles/delete";

/// Back-office roles API client
///
/// Thin typed wrapper over the four role CRUD endpoints. Calls are
/// fire-and-forget from the caller's perspective: no retries, one
/// error per failed request.
#[derive(Debug, Clone)]
pub struct RolesClient {
    config: Arc<Config>,
    auth: AuthenticatedClient,
}

impl RolesClient {
    /// Create a new roles client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let token_source: Arc<dyn TokenSource> = match &config.bearer_token {
            Some(token) => Arc::new(SessionToken::new(token.clone())),
            None => Arc::new(Anonymous),
        };

        Ok(Self {
            config: Arc::new(config),
            auth: AuthenticatedClient::new(http_client, token_source),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Unwrap a response into its envelope.
    ///
    /// Non-2xx statuses map to typed errors; a 2xx envelope with
    /// `isSuccess: false` maps to [`Error::Api`] carrying the
    /// server-provided message.
    async fn unwrap_envelope<T>(response: reqwest::Response) -> Result<Envelope<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::from_status(status, body));
        }

        let envelope: Envelope<T> = response.json().await?;
        if !envelope.is_success {
            let message = envelope
                .error_message
                .unwrap_or_else(|| "request rejected by server".to_string());
            return Err(Error::Api(message));
        }

        Ok(envelope)
    }

    /// List all roles
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        let response = self
            .auth
            .request(Method::GET, &self.url(GET_ROLES))
            .send()
            .await?;

        let envelope = Self::unwrap_envelope::<Vec<Role>>(response).await?;
        let roles = envelope.result.unwrap_or_default();
        debug!(count = roles.len(), "listed roles");
        Ok(roles)
    }

    /// Create a new role
    pub async fn add_role(&self, role_name: &str) -> Result<CreatedRole> {
        let body = AddRoleRequest {
            role_name: role_name.to_string(),
        };
        let response = self
            .auth
            .request(Method::POST, &self.url(ADD_ROLE))
            .json(&body)
            .send()
            .await?;

        let envelope = Self::unwrap_envelope::<CreatedRole>(response).await?;
        let created = envelope
            .result
            .ok_or_else(|| Error::Other("add role response had no result".to_string()))?;
        debug!(role_name = %created.role_name, "role created");
        Ok(created)
    }

    /// Rename an existing role
    pub async fn update_role(&self, role_id: i64, role_name: &str) -> Result<()> {
        let body = MutateRoleRequest {
            role_id,
            role_name: role_name.to_string(),
        };
        let response = self
            .auth
            .request(Method::POST, &self.url(UPDATE_ROLE))
            .json(&body)
            .send()
            .await?;

        Self::unwrap_envelope::<serde_json::Value>(response).await?;
        debug!(role_id, "role updated");
        Ok(())
    }

    /// Delete a role
    pub async fn delete_role(&self, role_id: i64, role_name: &str) -> Result<()> {
        let body = MutateRoleRequest {
            role_id,
            role_name: role_name.to_string(),
        };
        let response = self
            .auth
            .request(Method::POST, &self.url(DELETE_ROLE))
            .json(&body)
            .send()
            .await?;

        Self::unwrap_envelope::<serde_json::Value>(response).await?;
        debug!(role_id, "role deleted");
        Ok(())
    }
}
