/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Certificates and private keys exchanged with TPP, and their PEM encoding

/// X.509 certificate wrapper
pub mod certificate;
/// PEM encode/decode helpers
pub mod codec;
/// Private key wrapper and encryption
pub mod key;
/// Legacy OpenSSL PEM encryption
mod legacy;

pub use certificate::X509Certificate;
pub use codec::*;
pub use key::{KeyCipher, KeyKind, PrivateKey};

/// PEM label of a certificate block
pub const CERTIFICATE_LABEL: &str = "CERTIFICATE";
/// PEM label of a PKCS#1 RSA key
pub const RSA_KEY_LABEL: &str = "RSA PRIVATE KEY";
/// PEM label of a SEC1 EC key
pub const EC_KEY_LABEL: &str = "EC PRIVATE KEY";
/// Non-standard label for SEC1 EC keys, accepted on decode
pub const ECDSA_KEY_LABEL: &str = "ECDSA PRIVATE KEY";
/// PEM label of an unencrypted PKCS#8 key
pub const PKCS8_KEY_LABEL: &str = "PRIVATE KEY";
/// PEM label of an encrypted PKCS#8 key
pub const ENCRYPTED_KEY_LABEL: &str = "ENCRYPTED PRIVATE KEY";
