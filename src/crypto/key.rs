/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::PBKDF2_ITERATIONS;
use crate::crypto::{EC_KEY_LABEL, PKCS8_KEY_LABEL, RSA_KEY_LABEL};
use crate::error::AppError;
use pkcs8::der::asn1::AnyRef;
use pkcs8::der::{Encode, Tag};
use pkcs8::pkcs5::pbes2;
use pkcs8::{AlgorithmIdentifierRef, EncryptedPrivateKeyInfo, ObjectIdentifier, PrivateKeyInfo};
use rand::RngCore;
use std::fmt;

/// rsaEncryption
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
/// id-ecPublicKey
const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Encoding of the DER bytes held by a [`PrivateKey`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// PKCS#1 RSAPrivateKey
    Rsa,
    /// SEC1 ECPrivateKey
    Ec,
    /// PKCS#8 PrivateKeyInfo
    Pkcs8,
}

impl KeyKind {
    /// PEM label for an unencrypted key of this kind
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            KeyKind::Rsa => RSA_KEY_LABEL,
            KeyKind::Ec => EC_KEY_LABEL,
            KeyKind::Pkcs8 => PKCS8_KEY_LABEL,
        }
    }
}

/// Cipher used to protect a private key with a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCipher {
    /// PBES2 with PBKDF2-HMAC-SHA256 and AES-128-CBC
    Aes128Cbc,
    /// PBES2 with PBKDF2-HMAC-SHA256 and AES-256-CBC
    #[default]
    Aes256Cbc,
}

/// A private key in one of the DER encodings TPP exchanges
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    kind: KeyKind,
    der: Vec<u8>,
}

impl PrivateKey {
    /// Wraps DER bytes of the given kind, checking that they parse
    pub fn from_der(kind: KeyKind, der: impl Into<Vec<u8>>) -> Result<Self, AppError> {
        let der = der.into();
        match kind {
            KeyKind::Pkcs8 => {
                PrivateKeyInfo::try_from(der.as_slice())?;
            }
            KeyKind::Ec => {
                sec1::EcPrivateKey::try_from(der.as_slice())
                    .map_err(|e| AppError::Pem(format!("invalid EC private key: {e}")))?;
            }
            KeyKind::Rsa => {
                pkcs1::RsaPrivateKey::try_from(der.as_slice())
                    .map_err(|e| AppError::Pem(format!("invalid RSA private key: {e}")))?;
            }
        }
        Ok(Self { kind, der })
    }

    /// Encoding of the key bytes
    #[must_use]
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// DER bytes in the key's native encoding
    #[must_use]
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Re-encodes the key as a PKCS#8 PrivateKeyInfo
    pub fn to_pkcs8_der(&self) -> Result<Vec<u8>, AppError> {
        match self.kind {
            KeyKind::Pkcs8 => Ok(self.der.clone()),
            KeyKind::Rsa => {
                let algorithm = AlgorithmIdentifierRef {
                    oid: RSA_ENCRYPTION_OID,
                    parameters: Some(AnyRef::NULL),
                };
                Ok(PrivateKeyInfo::new(algorithm, &self.der).to_der()?)
            }
            KeyKind::Ec => {
                let ec = sec1::EcPrivateKey::try_from(self.der.as_slice())
                    .map_err(|e| AppError::Pem(format!("invalid EC private key: {e}")))?;
                let curve = ec
                    .parameters
                    .and_then(|params| params.named_curve())
                    .ok_or_else(|| {
                        AppError::Pem("EC private key does not name its curve".to_string())
                    })?;
                let algorithm = AlgorithmIdentifierRef {
                    oid: EC_PUBLIC_KEY_OID,
                    parameters: Some(AnyRef::new(Tag::ObjectIdentifier, curve.as_bytes())?),
                };
                Ok(PrivateKeyInfo::new(algorithm, &self.der).to_der()?)
            }
        }
    }

    /// Encrypts the key into a PKCS#8 EncryptedPrivateKeyInfo
    ///
    /// A fresh random salt and IV are drawn for every call.
    pub fn encrypt(&self, password: &str, cipher: KeyCipher) -> Result<Vec<u8>, AppError> {
        let pkcs8_der = self.to_pkcs8_der()?;
        let info = PrivateKeyInfo::try_from(pkcs8_der.as_slice())?;

        let mut salt = [0u8; 16];
        let mut iv = [0u8; 16];
        let mut rng = rand::rng();
        rng.fill_bytes(&mut salt);
        rng.fill_bytes(&mut iv);

        let params = match cipher {
            KeyCipher::Aes128Cbc => {
                pbes2::Parameters::pbkdf2_sha256_aes128cbc(PBKDF2_ITERATIONS, &salt, &iv)
            }
            KeyCipher::Aes256Cbc => {
                pbes2::Parameters::pbkdf2_sha256_aes256cbc(PBKDF2_ITERATIONS, &salt, &iv)
            }
        }
        .map_err(|e| AppError::Pem(format!("invalid encryption parameters: {e}")))?;

        let document = info.encrypt_with_params(params, password)?;
        Ok(document.as_bytes().to_vec())
    }

    /// Decrypts a PKCS#8 EncryptedPrivateKeyInfo into a PKCS#8 key
    pub fn decrypt(encrypted_der: &[u8], password: &str) -> Result<Self, AppError> {
        let info = EncryptedPrivateKeyInfo::try_from(encrypted_der)?;
        let document = info
            .decrypt(password)
            .map_err(|_| AppError::Pem("error decrypting private key".to_string()))?;
        Self::from_der(KeyKind::Pkcs8, document.as_bytes())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("kind", &self.kind)
            .field("der", &"<redacted>")
            .finish()
    }
}
