/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::certificate::CertificateFormat;
use crate::presentation::identity::Identity;
use serde::Serialize;
use std::collections::BTreeMap;

/// `Name`/`Value` pair seeding a new configuration object
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NameValue<'a> {
    /// Attribute name
    pub name: &'a str,
    /// Attribute value
    pub value: &'a str,
}

/// Body of `/vedsdk/Config/Create`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigCreateRequest<'a> {
    /// Object class
    pub class: &'a str,
    /// DN of the new object
    #[serde(rename = "ObjectDN")]
    pub object_dn: &'a str,
    /// Seed attributes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name_attribute_list: Vec<NameValue<'a>>,
}

impl<'a> ConfigCreateRequest<'a> {
    /// Builds the body, flattening the seed map in key order
    pub fn new(object_dn: &'a str, class: &'a str, seed: Option<&'a BTreeMap<String, String>>) -> Self {
        let name_attribute_list = seed
            .map(|seed| {
                seed.iter()
                    .map(|(name, value)| NameValue { name, value })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            class,
            object_dn,
            name_attribute_list,
        }
    }
}

/// Body of `/vedsdk/Config/IsValid`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigIsValidRequest<'a> {
    /// DN to check
    #[serde(rename = "ObjectDN", skip_serializing_if = "Option::is_none")]
    pub object_dn: Option<&'a str>,
    /// GUID to check
    #[serde(rename = "ObjectGUID", skip_serializing_if = "Option::is_none")]
    pub object_guid: Option<&'a str>,
}

/// Body of `/vedsdk/Config/Delete`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigDeleteRequest<'a> {
    /// DN to delete
    #[serde(rename = "ObjectDN")]
    pub object_dn: &'a str,
    /// 1 to delete children too, 0 otherwise
    #[serde(rename = "Recursive")]
    pub recursive: u8,
}

/// Body of `/vedsdk/Config/Enumerate`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigEnumerateRequest<'a> {
    /// DN whose children are listed
    #[serde(rename = "ObjectDN")]
    pub object_dn: &'a str,
    /// `"true"` or `"false"`
    #[serde(rename = "Recursive")]
    pub recursive: String,
    /// Optional name pattern
    #[serde(rename = "Pattern", skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'a str>,
}

/// Body of the attribute endpoints (`AddValue`, `ClearAttribute`, `Read`)
#[derive(Debug, Clone, Serialize)]
pub struct ConfigAttributeRequest<'a> {
    /// Target DN
    #[serde(rename = "ObjectDN")]
    pub object_dn: &'a str,
    /// Attribute name
    #[serde(rename = "AttributeName")]
    pub attribute_name: &'a str,
    /// Value to add, only for `AddValue`
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
}

/// Body carrying only a DN, used by `/vedsdk/Config/ReadAll`
#[derive(Debug, Clone, Serialize)]
pub struct ObjectDnRequest<'a> {
    /// Target DN
    #[serde(rename = "ObjectDN")]
    pub object_dn: &'a str,
}

/// One attribute of a `/vedsdk/Config/Write` body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeData<'a> {
    /// Attribute name
    pub name: &'a str,
    /// Attribute values
    pub value: &'a [String],
}

/// Body of `/vedsdk/Config/Write`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigWriteRequest<'a> {
    /// Target DN
    #[serde(rename = "ObjectDN")]
    pub object_dn: &'a str,
    /// Attributes to write
    #[serde(rename = "AttributeData")]
    pub attribute_data: Vec<AttributeData<'a>>,
}

/// Body of `/vedsdk/certificates/Retrieve`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateRetrieveRequest<'a> {
    /// DN of the certificate object
    #[serde(rename = "CertificateDN")]
    pub certificate_dn: &'a str,
    /// Download format
    pub format: CertificateFormat,
    /// Whether to include the chain
    pub include_chain: bool,
    /// Whether to include the private key
    pub include_private_key: bool,
    /// Password protecting the private key
    #[serde(skip_serializing_if = "str::is_empty")]
    pub password: &'a str,
}

/// Body of `/vedsdk/certificates/Import`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateImportRequest<'a> {
    /// Target policy folder
    #[serde(rename = "PolicyDN")]
    pub policy_dn: &'a str,
    /// Name of the certificate object
    pub object_name: &'a str,
    /// PEM-encoded certificate
    pub certificate_data: String,
    /// Password protecting the private key
    #[serde(skip_serializing_if = "str::is_empty")]
    pub password: &'a str,
    /// PEM-encoded, encrypted private key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_data: Option<String>,
    /// Whether to reconcile with an existing object
    pub reconcile: bool,
}

/// Body of `/vedsdk/X509CertificateStore/Add`
#[derive(Debug, Clone, Serialize)]
pub struct VaultAddRequest<'a> {
    /// Base64 of the PEM-encoded certificate
    #[serde(rename = "CertificateString")]
    pub certificate_string: String,
    /// Owner of the new entry
    #[serde(rename = "OwnerDN")]
    pub owner_dn: &'a str,
    /// Protection key name
    #[serde(rename = "ProtectionKey")]
    pub protection_key: &'a str,
}

/// Body of `/vedsdk/X509CertificateStore/Lookup`
#[derive(Debug, Clone, Default, Serialize)]
pub struct VaultLookupRequest<'a> {
    /// Base64 of the PEM-encoded certificate
    #[serde(rename = "CertificateString", skip_serializing_if = "Option::is_none")]
    pub certificate_string: Option<String>,
    /// Owner DN
    #[serde(rename = "OwnerDN", skip_serializing_if = "Option::is_none")]
    pub owner_dn: Option<&'a str>,
    /// Attribute name
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    /// Attribute value
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
}

/// Body of `/vedsdk/X509CertificateStore/LookupExpiring`
#[derive(Debug, Clone, Serialize)]
pub struct VaultLookupExpiringRequest<'a> {
    /// Days until expiration
    #[serde(rename = "DaysToExpiration")]
    pub days_to_expiration: u32,
    /// Owner DN
    #[serde(rename = "OwnerDN")]
    pub owner_dn: &'a str,
}

/// Body of `/vedsdk/X509CertificateStore/Retrieve` and `Remove`
#[derive(Debug, Clone, Serialize)]
pub struct VaultEntryRequest<'a> {
    /// Vault id
    #[serde(rename = "VaultId")]
    pub vault_id: i64,
    /// Owner DN, only for `Remove`
    #[serde(rename = "OwnerDN", skip_serializing_if = "Option::is_none")]
    pub owner_dn: Option<&'a str>,
}

/// Body of `/vedsdk/Identity/Validate`
#[derive(Debug, Clone, Serialize)]
pub struct IdentityValidateRequest<'a> {
    /// Identity to validate
    #[serde(rename = "ID")]
    pub id: &'a Identity,
}
