/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::config::ConfigService;
use crate::application::interfaces::identity::IdentityService;
use crate::application::interfaces::policy::PolicyService;
use crate::constants::class;
use crate::error::AppError;
use crate::presentation::config::ConfigObject;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::info;

#[async_trait]
impl PolicyService for Client {
    async fn create_policy(&self, dn: &str) -> Result<ConfigObject, AppError> {
        let me = self.current().await?;
        info!("Creating policy {} with contact {}", dn, me.prefixed_universal);
        let seed = BTreeMap::from([("Contact".to_string(), me.prefixed_universal)]);
        self.create(dn, class::POLICY, Some(&seed)).await
    }

    async fn delete_policy(&self, dn: &str, recursive: bool) -> Result<(), AppError> {
        self.delete(dn, recursive).await
    }

    async fn policy_exists(&self, dn: &str) -> bool {
        self.exists(dn).await
    }
}
