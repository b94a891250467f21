/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authentication module for the TPP API
//!
//! Holds the session credential and performs the login exchange against
//! `/vedsdk/authorize/`. The credential is obtained lazily and cached; the
//! login step is serialized so that concurrent first use results in exactly
//! one exchange.

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::auth::{AuthorizeRequest, AuthorizeResponse, Session};
use crate::model::http::make_http_request;
use reqwest::{Client, Method, Url};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

/// Authentication manager for the TPP API
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    login_url: Url,
    session: RwLock<Option<Session>>,
    login_lock: Mutex<()>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials
    /// * `client` - HTTP client shared with the request pipeline
    /// * `login_url` - Absolute URL of the login endpoint
    pub fn new(config: Arc<Config>, client: Client, login_url: Url) -> Self {
        Self {
            config,
            client,
            login_url,
            session: RwLock::new(None),
            login_lock: Mutex::new(()),
        }
    }

    /// Gets the cached session, logging in first if there is none
    ///
    /// # Returns
    /// * `Ok(Session)` - Cached or freshly obtained session
    /// * `Err(AppError::Authentication)` - If the login exchange fails
    pub async fn get_session(&self) -> Result<Session, AppError> {
        if let Some(session) = self.cached().await {
            return Ok(session);
        }

        let _guard = self.login_lock.lock().await;

        // Another task may have finished logging in while we waited.
        if let Some(session) = self.cached().await {
            return Ok(session);
        }

        info!("No active session, logging in");
        let session = self.authorize().await?;
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    /// Performs a login exchange and replaces the cached session
    pub async fn login(&self) -> Result<Session, AppError> {
        let _guard = self.login_lock.lock().await;
        let session = self.authorize().await?;
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    /// Clears the cached session
    pub async fn logout(&self) -> Result<(), AppError> {
        let mut session = self.session.write().await;
        *session = None;
        info!("Session cleared");
        Ok(())
    }

    /// Whether a session is currently cached
    pub async fn has_session(&self) -> bool {
        self.session.read().await.is_some()
    }

    async fn cached(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    async fn authorize(&self) -> Result<Session, AppError> {
        let username = self.config.credentials.username.as_str();
        let body = AuthorizeRequest {
            username,
            password: &self.config.credentials.password,
        };

        debug!("Sending login request to: {}", self.login_url);

        let response = make_http_request(
            &self.client,
            Method::POST,
            self.login_url.clone(),
            &[],
            None,
            Some(&body),
        )
        .await
        .map_err(|e| {
            error!("Login request failed: {}", e);
            AppError::Authentication(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::Authentication(format!(
                "login rejected with status {status}"
            )));
        }

        let buffer = response
            .bytes()
            .await
            .map_err(|e| AppError::Authentication(e.to_string()))?;
        let parsed: AuthorizeResponse = serde_json::from_slice(&buffer)
            .map_err(|e| AppError::Authentication(format!("malformed login response: {e}")))?;

        if parsed.api_key.is_empty() {
            return Err(AppError::Authentication(
                "login response did not contain an API key".to_string(),
            ));
        }

        info!("✓ Login successful for user: {}", username);
        Ok(Session::from_response(parsed))
    }
}
