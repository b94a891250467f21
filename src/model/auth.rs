/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of the `/vedsdk/authorize/` login request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizeRequest<'a> {
    /// TPP username
    pub username: &'a str,
    /// TPP password
    pub password: &'a str,
}

/// Response from the login endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorizeResponse {
    /// Opaque API key to echo on later calls
    #[serde(rename = "APIKey")]
    pub api_key: String,
    /// Server-reported expiry, kept verbatim
    #[serde(rename = "ValidUntil", default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

/// Cached session credential
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// API key sent in the `X-Venafi-Api-Key` header
    pub api_key: String,
    /// Server-reported expiry, informational only
    pub valid_until: Option<String>,
    /// When the login exchange completed
    pub obtained_at: DateTime<Utc>,
}

impl Session {
    /// Builds a session from a login response, stamped with the current time
    #[must_use]
    pub fn from_response(response: AuthorizeResponse) -> Self {
        Self {
            api_key: response.api_key,
            valid_until: response.valid_until,
            obtained_at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api_key", &"********")
            .field("valid_until", &self.valid_until)
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}
