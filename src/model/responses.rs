/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::model::envelope::Paged;
use crate::presentation::certificate::CertificateRecord;
use crate::presentation::config::ConfigObject;
use crate::presentation::identity::Identity;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Payload carrying a single configuration object
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectResponse {
    /// The object
    #[serde(rename = "Object", default)]
    pub object: ConfigObject,
}

/// Payload of `/vedsdk/Config/DefaultDn`
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultDnResponse {
    /// Default DN
    #[serde(rename = "DefaultDN", default)]
    pub default_dn: String,
}

/// Payload of `/vedsdk/Config/Enumerate`
#[derive(Debug, Clone, Deserialize)]
pub struct EnumerateResponse {
    /// Child objects
    #[serde(rename = "Objects", default)]
    pub objects: Vec<ConfigObject>,
}

/// Payload of `/vedsdk/Config/Read`
#[derive(Debug, Clone, Deserialize)]
pub struct ReadResponse {
    /// Attribute values
    #[serde(rename = "Values", default)]
    pub values: Vec<String>,
}

/// One attribute of a `/vedsdk/Config/ReadAll` payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NameValues {
    /// Attribute name
    pub name: String,
    /// Attribute values
    #[serde(default)]
    pub values: Vec<String>,
}

/// Payload of `/vedsdk/Config/ReadAll`
#[derive(Debug, Clone, Deserialize)]
pub struct ReadAllResponse {
    /// Attributes
    #[serde(rename = "NameValues", default)]
    pub name_values: Vec<NameValues>,
}

impl ReadAllResponse {
    /// Folds the attribute list into a map; a repeated name keeps its last values
    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.name_values
            .into_iter()
            .map(|pair| (pair.name, pair.values))
            .collect()
    }
}

/// One page of `/vedsdk/certificates/`
#[derive(Debug, Clone, Deserialize)]
pub struct CertificatePage {
    /// Records on this page
    #[serde(rename = "Certificates", default)]
    pub certificates: Vec<CertificateRecord>,
    /// Range description, e.g. `Certificates 1 - 100`
    #[serde(rename = "DataRange", default)]
    pub data_range: String,
    /// Total number of records
    #[serde(rename = "TotalCount", default)]
    pub total_count: i64,
    /// Continuation marker; an empty array, object or string, `false`, a
    /// number, `null` or absence all mean this is the last page
    #[serde(rename = "_links", default)]
    pub links: Option<Value>,
}

impl Paged for CertificatePage {
    type Item = CertificateRecord;

    fn has_more(&self) -> bool {
        match &self.links {
            Some(Value::Array(links)) => !links.is_empty(),
            Some(Value::Object(links)) => !links.is_empty(),
            Some(Value::String(link)) => !link.is_empty(),
            Some(Value::Bool(more)) => *more,
            None | Some(Value::Null) | Some(Value::Number(_)) => false,
        }
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.certificates
    }
}

/// Payload of `/vedsdk/certificates/Retrieve`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateRetrieveResponse {
    /// Base64 of the downloaded file
    pub certificate_data: String,
    /// Suggested file name
    #[serde(default)]
    pub filename: String,
    /// Format of the downloaded file
    #[serde(default)]
    pub format: String,
}

/// Payload of `/vedsdk/X509CertificateStore/Add`
#[derive(Debug, Clone, Deserialize)]
pub struct VaultAddResponse {
    /// Id of the new entry
    #[serde(rename = "VaultId")]
    pub vault_id: i64,
}

/// Payload of the vault lookup endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct VaultIdsResponse {
    /// Matching ids
    #[serde(rename = "VaultIds", default)]
    pub vault_ids: Option<Vec<i64>>,
}

/// Payload of `/vedsdk/X509CertificateStore/Retrieve`
#[derive(Debug, Clone, Deserialize)]
pub struct VaultRetrieveResponse {
    /// Base64 of the stored certificate
    #[serde(rename = "CertificateString")]
    pub certificate_string: String,
}

/// Payload of `/vedsdk/Identity/Self`
#[derive(Debug, Clone, Deserialize)]
pub struct IdentitiesResponse {
    /// Identities of the caller
    #[serde(rename = "Identities", default)]
    pub identities: Vec<Identity>,
}

/// Payload of `/vedsdk/Identity/Validate`
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityValidateResponse {
    /// Validated identity
    #[serde(rename = "ID")]
    pub id: Identity,
}
