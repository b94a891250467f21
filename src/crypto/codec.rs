/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! PEM encoding and decoding of certificates and private keys
//!
//! Encrypted keys are written as PKCS#8 `ENCRYPTED PRIVATE KEY` blocks. On
//! decode, both PKCS#8 and the legacy OpenSSL format (`Proc-Type:
//! 4,ENCRYPTED` headers) are accepted.

use crate::crypto::{
    CERTIFICATE_LABEL, EC_KEY_LABEL, ECDSA_KEY_LABEL, ENCRYPTED_KEY_LABEL, KeyCipher, KeyKind,
    PKCS8_KEY_LABEL, PrivateKey, RSA_KEY_LABEL, X509Certificate,
};
use crate::crypto::legacy::{self, PROC_TYPE_HEADER};
use crate::error::AppError;
use pem::{EncodeConfig, LineEnding, Pem};
use tracing::warn;

/// Certificates and an optional private key read from a single PEM document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PemBundle {
    /// Certificates in document order
    pub certificates: Vec<X509Certificate>,
    /// First private key found, if any
    pub private_key: Option<PrivateKey>,
}

fn encode_block(label: &str, der: &[u8]) -> String {
    let block = Pem::new(label, der.to_vec());
    pem::encode_config(&block, EncodeConfig::new().set_line_ending(LineEnding::LF))
}

/// Encodes a certificate as a `CERTIFICATE` block
#[must_use]
pub fn encode_certificate(certificate: &X509Certificate) -> String {
    encode_block(CERTIFICATE_LABEL, certificate.der())
}

/// Encodes a private key
///
/// An empty password writes the key unencrypted under its native label.
/// Otherwise the key is converted to PKCS#8 and encrypted with PBES2.
pub fn encode_private_key(
    key: &PrivateKey,
    password: &str,
    cipher: KeyCipher,
) -> Result<String, AppError> {
    if password.is_empty() {
        return Ok(encode_block(key.kind().label(), key.der()));
    }
    let encrypted = key.encrypt(password, cipher)?;
    Ok(encode_block(ENCRYPTED_KEY_LABEL, &encrypted))
}

fn parse_blocks(input: &[u8]) -> Result<Vec<Pem>, AppError> {
    let blocks = pem::parse_many(input)?;
    if blocks.is_empty() {
        return Err(AppError::Pem("no PEM-encoded data found".to_string()));
    }
    Ok(blocks)
}

fn require_password(password: &str) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::Pem(
            "private key is encrypted but no password was given".to_string(),
        ));
    }
    Ok(())
}

fn is_key_label(label: &str) -> bool {
    matches!(
        label,
        RSA_KEY_LABEL | EC_KEY_LABEL | ECDSA_KEY_LABEL | PKCS8_KEY_LABEL | ENCRYPTED_KEY_LABEL
    )
}

fn key_from_block(block: &Pem, password: &str) -> Result<PrivateKey, AppError> {
    let decrypted;
    let der = if legacy::is_encrypted(block) {
        require_password(password)?;
        decrypted = legacy::decrypt(block, password)?;
        decrypted.as_slice()
    } else {
        block.contents()
    };

    match block.tag() {
        RSA_KEY_LABEL => PrivateKey::from_der(KeyKind::Rsa, der),
        EC_KEY_LABEL | ECDSA_KEY_LABEL => PrivateKey::from_der(KeyKind::Ec, der),
        PKCS8_KEY_LABEL => PrivateKey::from_der(KeyKind::Pkcs8, der),
        ENCRYPTED_KEY_LABEL => {
            require_password(password)?;
            PrivateKey::decrypt(der, password)
        }
        other => Err(AppError::Pem(format!("unsupported private key type {other:?}"))),
    }
}

/// Decodes the first `CERTIFICATE` block of `text`
pub fn decode_certificate(text: impl AsRef<[u8]>) -> Result<X509Certificate, AppError> {
    let blocks = parse_blocks(text.as_ref())?;
    let block = blocks
        .iter()
        .find(|block| block.tag() == CERTIFICATE_LABEL)
        .ok_or_else(|| AppError::Pem("no certificate found in PEM data".to_string()))?;
    X509Certificate::from_der(block.contents())
}

/// Decodes the first private key block of `text`
///
/// `password` is only used for encrypted blocks, PKCS#8 or legacy.
pub fn decode_private_key(text: impl AsRef<[u8]>, password: &str) -> Result<PrivateKey, AppError> {
    let blocks = parse_blocks(text.as_ref())?;
    let block = blocks
        .iter()
        .find(|block| is_key_label(block.tag()) || block.headers().get(PROC_TYPE_HEADER).is_some())
        .ok_or_else(|| AppError::Pem("no private key found in PEM data".to_string()))?;
    key_from_block(block, password)
}

/// Decodes every certificate and the first private key of a PEM document
///
/// Blocks with other labels are skipped.
pub fn decode_bundle(input: impl AsRef<[u8]>, password: &str) -> Result<PemBundle, AppError> {
    let mut bundle = PemBundle::default();
    for block in parse_blocks(input.as_ref())? {
        match block.tag() {
            CERTIFICATE_LABEL => bundle
                .certificates
                .push(X509Certificate::from_der(block.contents())?),
            label if is_key_label(label) => {
                if bundle.private_key.is_none() {
                    bundle.private_key = Some(key_from_block(&block, password)?);
                }
            }
            label => warn!("Skipping PEM block {:?}", label),
        }
    }
    Ok(bundle)
}

/// Decodes a certificate followed by its private key
///
/// The first block must be the certificate and the second the key. An
/// encrypted key is decrypted with `password`.
pub fn decode_certificate_and_key(
    input: impl AsRef<[u8]>,
    password: &str,
) -> Result<(X509Certificate, PrivateKey), AppError> {
    let blocks = parse_blocks(input.as_ref())?;
    let mut iter = blocks.iter();

    let certificate = match iter.next() {
        Some(block) if block.tag() == CERTIFICATE_LABEL => {
            X509Certificate::from_der(block.contents())?
        }
        Some(block) => {
            return Err(AppError::Pem(format!(
                "expected a certificate block, found {:?}",
                block.tag()
            )));
        }
        None => return Err(AppError::Pem("no PEM-encoded data found".to_string())),
    };

    let key = match iter.next() {
        Some(block) => key_from_block(block, password)?,
        None => return Err(AppError::Pem("no private key found in PEM data".to_string())),
    };

    Ok((certificate, key))
}
