/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types returned by every operation of the crate

use crate::model::result_codes::{ConfigResult, VaultResult};
use std::fmt;
use thiserror::Error;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Result code attached to a domain error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    /// Code reported by a configuration endpoint
    Config(ConfigResult),
    /// Code reported by the X509 certificate store
    Vault(VaultResult),
    /// The endpoint reported an error message without a code
    Unspecified,
}

impl ResultCode {
    /// Numeric code, if the server sent one
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            ResultCode::Config(result) => Some(result.code()),
            ResultCode::Vault(result) => Some(result.code()),
            ResultCode::Unspecified => None,
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultCode::Config(result) => write!(f, "config result {result}"),
            ResultCode::Vault(result) => write!(f, "vault result {result}"),
            ResultCode::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Connection-level failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status outside the domain-error path
    #[error("unexpected status code response: {status} ({reason})")]
    HttpStatus {
        /// Status code received
        status: u16,
        /// Canonical reason phrase
        reason: String,
    },

    /// The server reported a failure through its result envelope
    #[error("domain error [{code}]: {message}")]
    Domain {
        /// Result code from the envelope
        code: ResultCode,
        /// Message from the envelope
        message: String,
    },

    /// Malformed JSON in an otherwise successful exchange
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The login exchange failed
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Caller supplied an unusable value
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// PEM, key or certificate parsing failed
    #[error("pem error: {0}")]
    Pem(String),

    /// Base64 payload could not be decoded
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The caller's identity was not present in the identity response
    #[error("username not found in identity output: {0}")]
    IdentityNotFound(String),
}

impl AppError {
    /// Builds a domain error from a configuration result
    pub fn config(result: ConfigResult, message: impl Into<String>) -> Self {
        AppError::Domain {
            code: ResultCode::Config(result),
            message: message.into(),
        }
    }

    /// Builds a domain error from a vault result; the message is the code's description
    pub fn vault(result: VaultResult) -> Self {
        AppError::Domain {
            code: ResultCode::Vault(result),
            message: result.description().to_string(),
        }
    }

    /// Numeric domain code, if this is a domain error that carries one
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            AppError::Domain { code, .. } => code.code(),
            _ => None,
        }
    }

    /// HTTP status, if this error was caused by one
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::HttpStatus { status, .. } => Some(*status),
            AppError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<pem::PemError> for AppError {
    fn from(e: pem::PemError) -> Self {
        AppError::Pem(e.to_string())
    }
}

impl From<pkcs8::Error> for AppError {
    fn from(e: pkcs8::Error) -> Self {
        AppError::Pem(e.to_string())
    }
}

impl From<pkcs8::der::Error> for AppError {
    fn from(e: pkcs8::der::Error) -> Self {
        AppError::Pem(e.to_string())
    }
}
