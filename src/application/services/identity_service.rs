/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::identity::IdentityService;
use crate::constants::path;
use crate::error::AppError;
use crate::model::requests::IdentityValidateRequest;
use crate::model::responses::{IdentitiesResponse, IdentityValidateResponse};
use crate::presentation::identity::Identity;
use async_trait::async_trait;
use tracing::{debug, error};

#[async_trait]
impl IdentityService for Client {
    async fn current(&self) -> Result<Identity, AppError> {
        let username = &self.config().credentials.username;
        let response: IdentitiesResponse = self.http().get(path::IDENTITY_SELF).await?;
        debug!("Session maps to {} identities", response.identities.len());

        match response
            .identities
            .into_iter()
            .find(|identity| &identity.name == username)
        {
            Some(identity) => Ok(identity),
            None => {
                error!("No identity named {} in identity response", username);
                Err(AppError::IdentityNotFound(username.clone()))
            }
        }
    }

    async fn validate(&self, identity: &Identity) -> Result<Identity, AppError> {
        let body = IdentityValidateRequest { id: identity };
        let response: IdentityValidateResponse =
            self.http().post(path::IDENTITY_VALIDATE, &body).await?;
        Ok(response.id)
    }
}
