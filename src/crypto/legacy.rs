/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! OpenSSL "traditional" PEM encryption (`Proc-Type: 4,ENCRYPTED`)
//!
//! TPP returns keys in this form when a certificate is retrieved in the
//! plain `Base64` format. The cipher and IV come from the `DEK-Info`
//! header; the key is derived with `EVP_BytesToKey` (MD5, one round) using
//! the first eight bytes of the IV as salt.

use crate::error::AppError;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, KeyInit, KeyIvInit};
use md5::{Digest, Md5};
use pem::Pem;

/// Header marking a legacy encrypted block
pub(crate) const PROC_TYPE_HEADER: &str = "Proc-Type";
const DEK_INFO_HEADER: &str = "DEK-Info";
const ENCRYPTED_PROC_TYPE: &str = "4,ENCRYPTED";
const SALT_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LegacyCipher {
    DesCbc,
    DesEde3Cbc,
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
}

impl LegacyCipher {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "DES-CBC" => Some(LegacyCipher::DesCbc),
            "DES-EDE3-CBC" => Some(LegacyCipher::DesEde3Cbc),
            "AES-128-CBC" => Some(LegacyCipher::Aes128Cbc),
            "AES-192-CBC" => Some(LegacyCipher::Aes192Cbc),
            "AES-256-CBC" => Some(LegacyCipher::Aes256Cbc),
            _ => None,
        }
    }

    fn key_len(self) -> usize {
        match self {
            LegacyCipher::DesCbc => 8,
            LegacyCipher::DesEde3Cbc | LegacyCipher::Aes192Cbc => 24,
            LegacyCipher::Aes128Cbc => 16,
            LegacyCipher::Aes256Cbc => 32,
        }
    }

    fn block_len(self) -> usize {
        match self {
            LegacyCipher::DesCbc | LegacyCipher::DesEde3Cbc => 8,
            _ => 16,
        }
    }
}

/// Whether `block` carries the legacy encryption headers
pub(crate) fn is_encrypted(block: &Pem) -> bool {
    block
        .headers()
        .get(PROC_TYPE_HEADER)
        .is_some_and(|value| value.trim() == ENCRYPTED_PROC_TYPE)
}

/// Decrypts a legacy encrypted block, returning the DER it protects
pub(crate) fn decrypt(block: &Pem, password: &str) -> Result<Vec<u8>, AppError> {
    let dek_info = block.headers().get(DEK_INFO_HEADER).ok_or_else(|| {
        AppError::Pem(format!("{} block has no {DEK_INFO_HEADER} header", block.tag()))
    })?;
    let (name, iv_hex) = dek_info
        .split_once(',')
        .ok_or_else(|| AppError::Pem(format!("malformed {DEK_INFO_HEADER}: {dek_info:?}")))?;

    let cipher = LegacyCipher::from_name(name.trim())
        .ok_or_else(|| AppError::Pem(format!("unsupported PEM cipher {:?}", name.trim())))?;
    let iv = decode_hex(iv_hex.trim())
        .filter(|iv| iv.len() == cipher.block_len())
        .ok_or_else(|| AppError::Pem(format!("invalid IV in {DEK_INFO_HEADER}")))?;

    let data = block.contents();
    if data.is_empty() || data.len() % cipher.block_len() != 0 {
        return Err(AppError::Pem(
            "encrypted PEM data is not a whole number of blocks".to_string(),
        ));
    }

    let key = derive_key(password.as_bytes(), &iv[..SALT_LEN], cipher.key_len());
    match cipher {
        LegacyCipher::DesCbc => decrypt_cbc::<des::Des>(&key, &iv, data),
        LegacyCipher::DesEde3Cbc => decrypt_cbc::<des::TdesEde3>(&key, &iv, data),
        LegacyCipher::Aes128Cbc => decrypt_cbc::<aes::Aes128>(&key, &iv, data),
        LegacyCipher::Aes192Cbc => decrypt_cbc::<aes::Aes192>(&key, &iv, data),
        LegacyCipher::Aes256Cbc => decrypt_cbc::<aes::Aes256>(&key, &iv, data),
    }
}

/// `EVP_BytesToKey` with MD5 and a single iteration
fn derive_key(password: &[u8], salt: &[u8], len: usize) -> Vec<u8> {
    let mut key = Vec::with_capacity(len);
    let mut digest = Vec::new();
    while key.len() < len {
        let mut hasher = Md5::new();
        hasher.update(&digest);
        hasher.update(password);
        hasher.update(salt);
        digest = hasher.finalize().to_vec();
        key.extend_from_slice(&digest);
    }
    key.truncate(len);
    key
}

fn decrypt_cbc<C>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, AppError>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| AppError::Pem("invalid PEM cipher key or IV length".to_string()))?;
    let mut buffer = data.to_vec();
    let plain = decryptor
        .decrypt_padded_mut::<Pkcs7>(&mut buffer)
        .map_err(|_| AppError::Pem("error decrypting private key".to_string()))?;
    Ok(plain.to_vec())
}

fn decode_hex(text: &str) -> Option<Vec<u8>> {
    if text.len() % 2 != 0 {
        return None;
    }
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(text.get(i..i + 2)?, 16).ok())
        .collect()
}
