/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # TPP Client Prelude
//!
//! Brings the client, its configuration, every service trait and the
//! caller-facing types into scope with a single import.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tpp_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let me = client.current().await?;
//! ```
//!
//! Several services share method names (`retrieve` exists on the config,
//! certificate and vault services). With the prelude imported, call those
//! through the trait: `VaultService::retrieve(&client, handle)`.

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the TPP client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult, ResultCode};

/// Result code enumerations
pub use crate::model::result_codes::{ConfigResult, VaultResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Service interfaces implemented by [`Client`]
pub use crate::application::interfaces::{
    CaService, CertificateService, ConfigService, IdentityService, PolicyService, VaultService,
};

/// Request pipeline
pub use crate::model::http::HttpClient;

// ============================================================================
// DOMAIN TYPES
// ============================================================================

/// Caller-facing types
pub use crate::presentation::{
    CertificateFormat, CertificateRecord, ConfigAttribute, ConfigObject, Identity, ImportRequest,
    ImportedCertificate, KeyUsage, OpenSslCa, RetrieveOptions, RetrievedCertificate, SelfSignedCa,
    VaultHandle, VaultLookup, X509Data,
};

/// Certificates, keys and the PEM codec
pub use crate::crypto::{
    KeyCipher, KeyKind, PemBundle, PrivateKey, X509Certificate, decode_bundle,
    decode_certificate, decode_certificate_and_key, decode_private_key, encode_certificate,
    encode_private_key,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;
