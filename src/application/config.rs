/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

/// Username/password pair used for the login exchange
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// TPP username
    pub username: String,
    /// TPP password
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Configuration for the REST API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RestApiConfig {
    /// Base URL of the TPP server, e.g. `https://tpp.example.com`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

/// Main configuration for the TPP client
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Number of records requested per page from list endpoints
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first if present. Recognised variables:
    /// `VENAFI_TPP_ADDR`, `VENAFI_TPP_USERNAME`, `VENAFI_TPP_PASSWORD`,
    /// `VENAFI_TPP_TIMEOUT` and `VENAFI_TPP_PAGE_SIZE`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("VENAFI_TPP_ADDR", String::new());
        let username = get_env_or_default("VENAFI_TPP_USERNAME", String::new());
        let password = get_env_or_default("VENAFI_TPP_PASSWORD", String::new());

        if base_url.is_empty() {
            error!("VENAFI_TPP_ADDR not found in environment variables or .env file");
        }
        if username.is_empty() {
            error!("VENAFI_TPP_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("VENAFI_TPP_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("VENAFI_TPP_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            page_size: get_env_or_default("VENAFI_TPP_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Creates a configuration from explicit values and default settings
    pub fn with_credentials(base_url: &str, username: &str, password: &str) -> Self {
        Config {
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
