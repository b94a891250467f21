/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authenticated request pipeline
//!
//! Every call goes through [`HttpClient::execute`], which makes sure a session
//! credential is cached (logging in transparently when it is not), resolves the
//! path against the configured base URL, and sends the request. The decoding
//! stages on top of it translate the response into a payload or an [`AppError`]:
//!
//! - status above 400: [`AppError::HttpStatus`]
//! - status 400 with a structured error body: [`AppError::Domain`]
//! - status 400 without one: [`AppError::HttpStatus`]
//! - envelope with a non-success code: [`AppError::Domain`]
//! - malformed JSON otherwise: [`AppError::Decode`]

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::constants::{API_KEY_HEADER, AUTHORIZE_PATH, DOMAIN_ERROR_STATUS, USER_AGENT};
use crate::error::{AppError, ResultCode};
use crate::model::auth::Session;
use crate::model::envelope::{Paged, ResultEnvelope, ServiceErrorBody};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, trace};

/// Query parameters attached to a request
pub type QueryParams<'a> = [(&'a str, String)];

/// HTTP client for the TPP API with automatic authentication
///
/// The session credential is obtained lazily on the first request and cached
/// for the lifetime of the client. Concurrent first use triggers a single login.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
    base_url: Url,
}

impl HttpClient {
    /// Creates a new client without performing authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the base URL is invalid or the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let base_url = Url::parse(&config.rest_api.base_url).map_err(|e| {
            AppError::InvalidInput(format!(
                "error parsing TPP base URL {:?}: {e}",
                config.rest_api.base_url
            ))
        })?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder.build()?;

        let login_url = resolve(&base_url, AUTHORIZE_PATH)?;
        let auth = Arc::new(Auth::new(config.clone(), http_client.clone(), login_url));

        Ok(Self {
            auth,
            http_client,
            config,
            base_url,
        })
    }

    /// Returns the configuration used by this client
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the base URL every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Makes sure a session credential is cached, logging in if needed
    pub async fn ensure_credential(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Drops the cached credential; the next call logs in again
    pub async fn logout(&self) -> Result<(), AppError> {
        self.auth.logout().await
    }

    /// Sends an authenticated request
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path resolved against the base URL
    /// * `params` - Optional query parameters
    /// * `body` - Optional body, serialized as JSON
    ///
    /// # Returns
    /// * `Ok(Response)` - Response with a status of 400 or below
    /// * `Err(AppError)` - Authentication, transport or status failure
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: Option<&QueryParams<'_>>,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let session = self.ensure_credential().await?;
        let url = resolve(&self.base_url, path)?;
        let headers = [(API_KEY_HEADER, session.api_key.as_str())];

        make_http_request(&self.http_client, method, url, &headers, params, body).await
    }

    /// Sends an authenticated request and decodes the JSON response into `T`
    pub async fn execute_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<&QueryParams<'_>>,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let response = self.execute(method, path, params, body).await?;
        let status = response.status();
        let buffer = response.bytes().await?;
        trace!("Response body: {}", String::from_utf8_lossy(&buffer));

        if status.as_u16() == DOMAIN_ERROR_STATUS {
            return Err(service_error(status, &buffer));
        }

        Ok(serde_json::from_slice(&buffer)?)
    }

    /// Sends an authenticated request to an endpoint that wraps its payload in
    /// a result envelope of type `E`
    ///
    /// The body is read once into memory. The envelope is decoded first; on a
    /// non-success code the buffer is dropped and a domain error is returned.
    /// Otherwise the payload `T` is decoded from the same bytes.
    pub async fn execute_with_envelope<E, B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        E: ResultEnvelope,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(method, path, None, body).await?;
        let status = response.status();
        let buffer = response.bytes().await?;
        trace!("Response body: {}", String::from_utf8_lossy(&buffer));

        let envelope: E = match serde_json::from_slice(&buffer) {
            Ok(envelope) => envelope,
            Err(_) if status.as_u16() == DOMAIN_ERROR_STATUS => return Err(status_error(status)),
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = envelope.into_result() {
            debug!("{} {} reported {}", path, status, e);
            return Err(e);
        }

        if status.as_u16() == DOMAIN_ERROR_STATUS {
            return Err(status_error(status));
        }

        Ok(serde_json::from_slice(&buffer)?)
    }

    /// Collects every record of a paged list endpoint
    ///
    /// Requests are issued with `limit`/`offset`, advancing the offset by the
    /// limit each time, until a page comes back without a continuation marker.
    /// Short or empty pages do not end the loop on their own.
    pub async fn execute_paged<P: Paged>(
        &self,
        path: &str,
        limit: u32,
    ) -> Result<Vec<P::Item>, AppError> {
        if limit == 0 {
            return Err(AppError::InvalidInput(
                "page size must be greater than zero".to_string(),
            ));
        }

        let mut results = Vec::new();
        let mut offset: u64 = 0;

        loop {
            let params = [("limit", limit.to_string()), ("offset", offset.to_string())];
            let page: P = self
                .execute_json(Method::GET, path, Some(&params[..]), None::<&()>)
                .await?;

            let has_more = page.has_more();
            let items = page.into_items();
            debug!("Page at offset {} returned {} records", offset, items.len());
            results.extend(items);

            if !has_more {
                break;
            }
            offset += u64::from(limit);
        }

        Ok(results)
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.execute_json(Method::GET, path, None, None::<&()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute_json(Method::POST, path, None, Some(body)).await
    }
}

/// Resolves `path` against `base` the way a browser resolves a link
pub fn resolve(base: &Url, path: &str) -> Result<Url, AppError> {
    base.join(path)
        .map_err(|e| AppError::InvalidInput(format!("error parsing URL path {path:?}: {e}")))
}

/// Makes a single HTTP request
///
/// Sets `Accept: application/json`, serializes `body` as JSON when present and
/// appends `params` to the query string. Statuses above 400 are turned into
/// [`AppError::HttpStatus`]; everything else is handed back to the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, ...)
/// * `url` - Full URL to request
/// * `headers` - Extra `(name, value)` headers
/// * `params` - Optional query parameters
/// * `body` - Optional request body
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: Url,
    headers: &[(&str, &str)],
    params: Option<&QueryParams<'_>>,
    body: Option<&B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header(ACCEPT, "application/json");

    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    if let Some(params) = params {
        request = request.query(params);
    }

    if let Some(body) = body {
        let payload = serde_json::to_vec(body)
            .map_err(|e| AppError::InvalidInput(format!("error encoding request body: {e}")))?;
        trace!("Request body: {}", String::from_utf8_lossy(&payload));
        request = request
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(payload);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.as_u16() > DOMAIN_ERROR_STATUS {
        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status, body);
        return Err(status_error(status));
    }

    Ok(response)
}

fn status_error(status: StatusCode) -> AppError {
    AppError::HttpStatus {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

/// Interprets a 400 body of the form `{"Error": "..."}`
fn service_error(status: StatusCode, buffer: &[u8]) -> AppError {
    match serde_json::from_slice::<ServiceErrorBody>(buffer) {
        Ok(ServiceErrorBody {
            error: Some(message),
        }) if !message.is_empty() => AppError::Domain {
            code: ResultCode::Unspecified,
            message,
        },
        _ => status_error(status),
    }
}
