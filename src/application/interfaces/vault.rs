/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::crypto::X509Certificate;
use crate::error::AppError;
use crate::presentation::vault::{VaultHandle, VaultLookup};
use async_trait::async_trait;

/// Interface for the certificate vault (`/vedsdk/X509CertificateStore/*`)
#[async_trait]
pub trait VaultService: Send + Sync {
    /// Stores a certificate and returns its vault handle
    async fn add(
        &self,
        certificate: &X509Certificate,
        owner_dn: &str,
        protection_key: &str,
    ) -> Result<VaultHandle, AppError>;

    /// Finds entries matching every set criterion
    async fn lookup(&self, criteria: &VaultLookup) -> Result<Vec<VaultHandle>, AppError>;

    /// Finds entries holding `certificate`
    async fn lookup_by_certificate(
        &self,
        certificate: &X509Certificate,
    ) -> Result<Vec<VaultHandle>, AppError>;

    /// Finds entries owned by `owner_dn`
    async fn lookup_by_owner_dn(&self, owner_dn: &str) -> Result<Vec<VaultHandle>, AppError>;

    /// Finds entries carrying the `name`/`value` pair
    async fn lookup_by_name_value(
        &self,
        name: &str,
        value: &str,
    ) -> Result<Vec<VaultHandle>, AppError>;

    /// Finds entries of `owner_dn` expiring within `days`
    async fn lookup_expiring(&self, days: u32, owner_dn: &str)
    -> Result<Vec<VaultHandle>, AppError>;

    /// Fetches the certificate stored under `handle`
    async fn retrieve(&self, handle: VaultHandle) -> Result<X509Certificate, AppError>;

    /// Removes the entry `handle` owned by `owner_dn`
    async fn remove(&self, handle: VaultHandle, owner_dn: &str) -> Result<(), AppError>;
}
