/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::crypto::{KeyCipher, PrivateKey, X509Certificate};
use crate::presentation::serialization::tpp_datetime_opt;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// X.509 details of a certificate record
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct X509Data {
    /// Subject common name
    #[serde(rename = "CN", default)]
    pub common_name: String,
    /// Subject alternative names grouped by type (`DNS`, `IP`, ...)
    #[serde(rename = "SANS", default)]
    pub alt_names: BTreeMap<String, Vec<String>>,
    /// Serial number, hex
    #[serde(default)]
    pub serial: String,
    /// SHA-1 thumbprint, hex
    #[serde(default)]
    pub thumbprint: String,
    /// Start of validity
    #[serde(default, with = "tpp_datetime_opt")]
    pub valid_from: Option<DateTime<Utc>>,
    /// End of validity
    #[serde(default, with = "tpp_datetime_opt")]
    pub valid_to: Option<DateTime<Utc>>,
}

/// A certificate object as listed by `/vedsdk/certificates/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateRecord {
    /// Creation time of the object
    #[serde(default, with = "tpp_datetime_opt")]
    pub created_on: Option<DateTime<Utc>>,
    /// Distinguished name of the certificate object
    #[serde(rename = "DN", default)]
    pub dn: String,
    /// Object GUID
    #[serde(default)]
    pub guid: String,
    /// Leaf name
    #[serde(default)]
    pub name: String,
    /// DN of the containing policy folder
    #[serde(default)]
    pub parent_dn: String,
    /// Object class, normally `X509 Certificate`
    #[serde(default)]
    pub schema_class: String,
    /// Certificate details
    #[serde(rename = "X509", default)]
    pub x509: X509Data,
}

/// Download format requested from `/vedsdk/certificates/Retrieve`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CertificateFormat {
    /// PEM with a legacy-encrypted key
    #[serde(rename = "Base64")]
    Base64,
    /// PEM with a PKCS#8 encrypted key
    #[default]
    #[serde(rename = "Base64 (PKCS #8)")]
    Base64Pkcs8,
}

/// Options for certificate retrieval
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RetrieveOptions {
    /// Download format
    pub format: CertificateFormat,
    /// Whether the issuing chain is included
    pub include_chain: bool,
    /// Whether the private key is included
    pub include_private_key: bool,
    /// Password protecting the private key in transit
    pub password: String,
}

impl RetrieveOptions {
    /// Requests the private key, encrypted in transit under `password`
    #[must_use]
    pub fn with_private_key(password: impl Into<String>) -> Self {
        Self {
            include_private_key: true,
            password: password.into(),
            ..Self::default()
        }
    }
}

/// Result of a certificate retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedCertificate {
    /// The end-entity certificate
    pub certificate: X509Certificate,
    /// Issuing chain, when requested
    pub chain: Vec<X509Certificate>,
    /// Decrypted private key, when requested
    pub private_key: Option<PrivateKey>,
    /// File name suggested by the server
    pub filename: String,
}

/// A certificate to import under a policy folder
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// DN of the policy folder receiving the certificate
    pub policy_dn: String,
    /// Name of the new certificate object
    pub object_name: String,
    /// Certificate to import
    pub certificate: X509Certificate,
    /// Private key to import alongside the certificate
    pub private_key: Option<PrivateKey>,
    /// Password protecting the private key in transit
    pub password: String,
    /// Cipher used to protect the private key
    pub cipher: KeyCipher,
    /// Whether TPP reconciles the import with an existing object
    pub reconcile: bool,
}

/// Identifiers of an imported certificate
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ImportedCertificate {
    /// DN of the created certificate object
    #[serde(rename = "CertificateDN", default)]
    pub certificate_dn: String,
    /// Vault id of the certificate
    #[serde(default)]
    pub certificate_vault_id: i64,
    /// GUID of the created object
    #[serde(default)]
    pub guid: String,
    /// Vault id of the private key, zero when none was imported
    #[serde(default)]
    pub private_key_vault_id: i64,
}
