/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;
use tracing::debug;

/// Entry point of the crate
///
/// Every service trait in [`crate::application::interfaces`] is implemented
/// for `Client`. Creating a client does not contact the server; the first
/// call logs in. The client is cheap to clone and all clones share one
/// session.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from an explicit configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        debug!("Creating client for {}", config.rest_api.base_url);
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client from the environment (see [`Config::new`])
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Request pipeline used by the services
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Drops the cached credential; the next call logs in again
    pub async fn logout(&self) -> Result<(), AppError> {
        self.http_client.logout().await
    }
}
