//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PLANTIFY_HOST` - Bind address (default: 127.0.0.1)
//! - `PLANTIFY_PORT` - Listen port (default: 3000)
//! - `PLANTIFY_CATALOG_PATH` - JSON catalog file; the built-in demo
//!   catalog is used when unset
//! - `PLANTIFY_INITIAL_LOCATION` - Location fragment seeding the router
//!   at startup (e.g., `#/cart`); defaults to the landing view

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Optional path to a JSON catalog file
    pub catalog_path: Option<PathBuf>,
    /// Location fragment read once at startup to seed the router
    pub initial_location: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PLANTIFY_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PLANTIFY_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PLANTIFY_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PLANTIFY_PORT".to_string(), e.to_string()))?;
        let catalog_path = get_optional_env("PLANTIFY_CATALOG_PATH").map(PathBuf::from);
        let initial_location = get_env_or_default("PLANTIFY_INITIAL_LOCATION", "");

        Ok(Self {
            host,
            port,
            catalog_path,
            initial_location,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            catalog_path: None,
            initial_location: String::new(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
