/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::result_codes::{ConfigResult, VaultResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A result envelope: a result code sharing the JSON object with the payload
pub trait ResultEnvelope: DeserializeOwned {
    /// `Ok(())` on success, the matching domain error otherwise
    fn into_result(self) -> Result<(), AppError>;
}

/// Envelope used by the `/vedsdk/Config/*` endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigEnvelope {
    /// Result code
    pub result: ConfigResult,
    /// Error message, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultEnvelope for ConfigEnvelope {
    fn into_result(self) -> Result<(), AppError> {
        if self.result.is_success() {
            return Ok(());
        }
        let message = self
            .error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| self.result.description().to_string());
        Err(AppError::config(self.result, message))
    }
}

/// Envelope used by the `/vedsdk/X509CertificateStore/*` endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VaultEnvelope {
    /// Result code
    pub result: VaultResult,
}

impl ResultEnvelope for VaultEnvelope {
    fn into_result(self) -> Result<(), AppError> {
        if self.result.is_success() {
            Ok(())
        } else {
            Err(AppError::vault(self.result))
        }
    }
}

/// Error body returned with status 400 by endpoints without an envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceErrorBody {
    /// Error message
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// One page of a list endpoint
pub trait Paged: DeserializeOwned {
    /// Record type
    type Item;

    /// Whether the server signalled that more pages follow
    fn has_more(&self) -> bool;

    /// Consumes the page, returning its records
    fn into_items(self) -> Vec<Self::Item>;
}
