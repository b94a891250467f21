/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::crypto::X509Certificate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an entry in the certificate vault
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultHandle(pub i64);

impl VaultHandle {
    /// Numeric vault id
    #[must_use]
    pub fn id(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for VaultHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VaultHandle {
    fn from(id: i64) -> Self {
        VaultHandle(id)
    }
}

/// Criteria for a vault lookup; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultLookup {
    /// Match entries holding this certificate
    pub certificate: Option<X509Certificate>,
    /// Match entries owned by this DN
    pub owner_dn: Option<String>,
    /// Match entries carrying this name/value pair
    pub name_value: Option<(String, String)>,
}
