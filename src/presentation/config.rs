/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Attribute definition attached to a configuration object
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigAttribute {
    /// Attribute syntax identifier
    #[serde(default)]
    pub syntax: i32,
    /// Attribute property flags
    #[serde(default)]
    pub property: i32,
    /// Attribute name
    #[serde(default)]
    pub name: String,
}

/// A named, classed, attributed node in the TPP object tree
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ConfigObject {
    /// GUID path from the root
    #[serde(rename = "AbsoluteGUID", default, skip_serializing_if = "String::is_empty")]
    pub absolute_guid: String,
    /// Attribute definitions, when requested
    #[serde(rename = "AttributeList", default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_list: Vec<ConfigAttribute>,
    /// Distinguished name, e.g. `\VED\Policy\Team`
    #[serde(rename = "DN", default, skip_serializing_if = "String::is_empty")]
    pub dn: String,
    /// Numeric object id
    #[serde(rename = "Id", default, skip_serializing_if = "is_zero")]
    pub id: i64,
    /// Object GUID
    #[serde(rename = "GUID", default, skip_serializing_if = "String::is_empty")]
    pub guid: String,
    /// Leaf name
    #[serde(rename = "Name", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Parent DN
    #[serde(rename = "Parent", default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    /// Object revision
    #[serde(rename = "Revision", default, skip_serializing_if = "is_zero")]
    pub revision: i64,
    /// Object class
    #[serde(rename = "TypeName", default, skip_serializing_if = "String::is_empty")]
    pub class: String,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}
