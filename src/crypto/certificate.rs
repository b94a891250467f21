/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use std::fmt;
use x509_cert::Certificate;
use x509_cert::der::Decode;

/// A parsed X.509 certificate together with its DER encoding
#[derive(Clone)]
pub struct X509Certificate {
    der: Vec<u8>,
    parsed: Certificate,
}

impl X509Certificate {
    /// Parses a DER-encoded certificate
    pub fn from_der(der: impl Into<Vec<u8>>) -> Result<Self, AppError> {
        let der = der.into();
        let parsed = Certificate::from_der(&der)
            .map_err(|e| AppError::Pem(format!("invalid certificate: {e}")))?;
        Ok(Self { der, parsed })
    }

    /// DER encoding
    #[must_use]
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Consumes the certificate, returning its DER encoding
    #[must_use]
    pub fn into_der(self) -> Vec<u8> {
        self.der
    }

    /// Parsed certificate structure
    #[must_use]
    pub fn inner(&self) -> &Certificate {
        &self.parsed
    }

    /// Subject in RFC 4514 form
    #[must_use]
    pub fn subject(&self) -> String {
        self.parsed.tbs_certificate.subject.to_string()
    }

    /// Issuer in RFC 4514 form
    #[must_use]
    pub fn issuer(&self) -> String {
        self.parsed.tbs_certificate.issuer.to_string()
    }

    /// Serial number as uppercase hex
    #[must_use]
    pub fn serial_hex(&self) -> String {
        self.parsed
            .tbs_certificate
            .serial_number
            .as_bytes()
            .iter()
            .map(|byte| format!("{byte:02X}"))
            .collect()
    }
}

impl PartialEq for X509Certificate {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}

impl Eq for X509Certificate {}

impl fmt::Debug for X509Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X509Certificate")
            .field("subject", &self.subject())
            .field("serial", &self.serial_hex())
            .finish()
    }
}

impl TryFrom<&[u8]> for X509Certificate {
    type Error = AppError;

    fn try_from(der: &[u8]) -> Result<Self, Self::Error> {
        Self::from_der(der)
    }
}
