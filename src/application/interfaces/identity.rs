/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::identity::Identity;
use async_trait::async_trait;

/// Interface for the identity service
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Identity of the configured user
    ///
    /// Returns [`AppError::IdentityNotFound`] when none of the identities
    /// reported for the session carries the configured username.
    async fn current(&self) -> Result<Identity, AppError>;

    /// Asks the server to resolve and validate `identity`
    async fn validate(&self, identity: &Identity) -> Result<Identity, AppError>;
}
