/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A TPP identity (user or group)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Identity {
    /// Full distinguished name of the identity
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    /// Whether the identity is a container
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_container: bool,
    /// Whether the identity is a group
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_group: bool,
    /// Short name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Identity provider prefix, e.g. `local`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    /// Name including the provider prefix
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefixed_name: String,
    /// Universal id including the provider prefix, used as a `Contact` value
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefixed_universal: String,
    /// Universal id
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub universal: String,
}
