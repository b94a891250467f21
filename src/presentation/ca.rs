/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::algorithm;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of key usages a CA template may grant
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyUsage(u32);

impl KeyUsage {
    /// Key agreement
    pub const KEY_AGREEMENT: KeyUsage = KeyUsage(1);
    /// Data encipherment
    pub const DATA_ENCIPHERMENT: KeyUsage = KeyUsage(1 << 1);
    /// Key encipherment
    pub const KEY_ENCIPHERMENT: KeyUsage = KeyUsage(1 << 2);
    /// Digital signature
    pub const DIGITAL_SIGNATURE: KeyUsage = KeyUsage(1 << 3);
    /// Encipher only
    pub const ENCIPHER_ONLY: KeyUsage = KeyUsage(1 << 4);
    /// Decipher only
    pub const DECIPHER_ONLY: KeyUsage = KeyUsage(1 << 5);
    /// Non repudiation
    pub const NON_REPUDIATION: KeyUsage = KeyUsage(1 << 6);

    const NAMES: [(KeyUsage, &'static str); 7] = [
        (Self::KEY_AGREEMENT, "KeyAgreement"),
        (Self::DATA_ENCIPHERMENT, "DataEncipherment"),
        (Self::KEY_ENCIPHERMENT, "KeyEncipherment"),
        (Self::DIGITAL_SIGNATURE, "DigitalSignature"),
        (Self::ENCIPHER_ONLY, "EncipherOnly"),
        (Self::DECIPHER_ONLY, "DecipherOnly"),
        (Self::NON_REPUDIATION, "NonRepudiation"),
    ];

    /// The empty set
    #[must_use]
    pub const fn empty() -> Self {
        KeyUsage(0)
    }

    /// Raw bit value
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Whether every usage in `other` is also in `self`
    #[must_use]
    pub const fn contains(&self, other: KeyUsage) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no usage is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for KeyUsage {
    type Output = KeyUsage;

    fn bitor(self, rhs: Self) -> Self::Output {
        KeyUsage(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyUsage {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Comma separated usage names, in the order TPP lists them
impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join(", "))
    }
}

impl fmt::Debug for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyUsage({self})")
    }
}

/// Settings for a self signed CA template
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelfSignedCa {
    /// Usages granted to issued certificates
    pub key_usage: KeyUsage,
    /// Signing algorithm, `SHA1` or `SHA256`; empty means `SHA256`
    pub signing_algorithm: String,
    /// Whether subject alternative names are copied into issued certificates
    pub san_enabled: bool,
    /// Validity of issued certificates in days
    pub validity_days: u32,
}

impl Default for SelfSignedCa {
    fn default() -> Self {
        Self {
            key_usage: KeyUsage::DIGITAL_SIGNATURE | KeyUsage::KEY_ENCIPHERMENT,
            signing_algorithm: algorithm::SHA256.to_string(),
            san_enabled: true,
            validity_days: 365,
        }
    }
}

/// Settings for a CA template backed by a remote OpenSSL installation
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OpenSslCa {
    /// Host running OpenSSL
    pub hostname: String,
    /// DN of the SSH credential used to reach the host
    pub ssh_key_dn: String,
    /// Path of the OpenSSL configuration file
    pub config_file: String,
    /// Directory holding the CA certificates
    pub cert_dir: String,
    /// CA root certificate file
    pub root_cert_file: String,
    /// CA private key file
    pub private_key_file: String,
    /// DN of the credential holding the private key password
    pub private_key_password_dn: String,
    /// Scratch directory on the host
    pub temp_dir: String,
    /// Whether subject alternative names are copied into issued certificates
    pub san_enabled: bool,
    /// Whether request extensions are copied into issued certificates
    pub copy_extensions: bool,
    /// Largest validity, in years, offered by the template
    pub max_validity_years: u32,
}
