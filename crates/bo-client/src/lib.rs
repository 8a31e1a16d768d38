//! # Back-Office Roles Client
//!
//! Typed HTTP client for the back-office role administration
//! endpoints. Every call carries the session bearer token and unwraps
//! the `{ isSuccess, result, errorMessage }` envelope the backend
//! speaks.
//!
//! ```rust,no_run
//! use bo_client::{Config, RolesClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("https://backoffice.example.com")
//!         .with_bearer_token("session-token");
//!
//!     let client = RolesClient::new(config)?;
//!     let roles = client.list_roles().await?;
//!     println!("{} roles", roles.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;

pub use client::RolesClient;
pub use config::Config;
pub use dto::{CreatedRole, Role};
pub use error::{Error, Result};
