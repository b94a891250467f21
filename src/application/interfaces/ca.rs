/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::ca::{OpenSslCa, SelfSignedCa};
use crate::presentation::config::ConfigObject;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Interface for CA template management
#[async_trait]
pub trait CaService: Send + Sync {
    /// Creates a CA template of any class
    ///
    /// The caller becomes the contact. `extra` attributes are merged over
    /// the `Contact` and `Driver Name` seeds.
    async fn create_ca(
        &self,
        dn: &str,
        class: &str,
        driver: &str,
        extra: Option<&BTreeMap<String, String>>,
    ) -> Result<ConfigObject, AppError>;

    /// Creates a self signed CA template
    async fn create_self_signed_ca(
        &self,
        dn: &str,
        settings: &SelfSignedCa,
    ) -> Result<ConfigObject, AppError>;

    /// Creates an OpenSSL CA template and offers validity periods of
    /// 1 to `max_validity_years` years
    async fn create_openssl_ca(&self, dn: &str, settings: &OpenSslCa)
    -> Result<ConfigObject, AppError>;

    /// Deletes a CA template
    async fn delete_ca(&self, dn: &str, recursive: bool) -> Result<(), AppError>;
}
