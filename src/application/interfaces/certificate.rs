/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::certificate::{
    CertificateRecord, ImportRequest, ImportedCertificate, RetrieveOptions, RetrievedCertificate,
};
use async_trait::async_trait;

/// Interface for the certificate service (`/vedsdk/certificates/*`)
#[async_trait]
pub trait CertificateService: Send + Sync {
    /// Lists every certificate, following pagination to the end
    async fn list(&self) -> Result<Vec<CertificateRecord>, AppError>;

    /// Downloads the certificate at `dn`
    ///
    /// # Arguments
    /// * `dn` - DN of the certificate object
    /// * `options` - Format, chain and private key options
    ///
    /// # Returns
    /// * The certificate, its chain when requested and its decrypted private
    ///   key when requested
    async fn retrieve(
        &self,
        dn: &str,
        options: &RetrieveOptions,
    ) -> Result<RetrievedCertificate, AppError>;

    /// Imports a certificate, and optionally its private key, under a policy folder
    async fn import(&self, request: &ImportRequest) -> Result<ImportedCertificate, AppError>;
}
