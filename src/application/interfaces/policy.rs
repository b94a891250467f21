/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::config::ConfigObject;
use async_trait::async_trait;

/// Interface for policy folder management
#[async_trait]
pub trait PolicyService: Send + Sync {
    /// Creates a policy folder with the caller as contact
    async fn create_policy(&self, dn: &str) -> Result<ConfigObject, AppError>;

    /// Deletes a policy folder
    async fn delete_policy(&self, dn: &str, recursive: bool) -> Result<(), AppError>;

    /// Whether a policy folder exists at `dn`
    async fn policy_exists(&self, dn: &str) -> bool;
}
