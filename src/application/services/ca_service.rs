/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::ca::CaService;
use crate::application::interfaces::config::ConfigService;
use crate::application::interfaces::identity::IdentityService;
use crate::constants::{algorithm, class, driver};
use crate::error::AppError;
use crate::presentation::ca::{OpenSslCa, SelfSignedCa};
use crate::presentation::config::ConfigObject;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::info;

const VALIDITY_PERIOD: &str = "Validity Period";
const SAN_ENABLED: &str = "SAN Enabled";

fn flag(value: bool) -> String {
    u8::from(value).to_string()
}

#[async_trait]
impl CaService for Client {
    async fn create_ca(
        &self,
        dn: &str,
        class: &str,
        driver: &str,
        extra: Option<&BTreeMap<String, String>>,
    ) -> Result<ConfigObject, AppError> {
        let me = self.current().await?;
        info!("Creating {} {} with driver {}", class, dn, driver);

        let mut attributes = BTreeMap::from([
            ("Contact".to_string(), me.prefixed_universal),
            ("Driver Name".to_string(), driver.to_string()),
        ]);
        if let Some(extra) = extra {
            attributes.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        self.create(dn, class, Some(&attributes)).await
    }

    async fn create_self_signed_ca(
        &self,
        dn: &str,
        settings: &SelfSignedCa,
    ) -> Result<ConfigObject, AppError> {
        let signing_algorithm = if settings.signing_algorithm.is_empty() {
            algorithm::SHA256
        } else {
            settings.signing_algorithm.as_str()
        };
        let extra = BTreeMap::from([
            ("Algorithm".to_string(), signing_algorithm.to_string()),
            ("Key Usage".to_string(), settings.key_usage.to_string()),
            (VALIDITY_PERIOD.to_string(), settings.validity_days.to_string()),
            (SAN_ENABLED.to_string(), flag(settings.san_enabled)),
        ]);
        self.create_ca(dn, class::SELF_SIGNED_CA, driver::SELF_SIGNED, Some(&extra))
            .await
    }

    async fn create_openssl_ca(
        &self,
        dn: &str,
        settings: &OpenSslCa,
    ) -> Result<ConfigObject, AppError> {
        let mut extra = BTreeMap::from([
            ("Certificate Directory".to_string(), settings.cert_dir.clone()),
            ("Certificate File".to_string(), settings.root_cert_file.clone()),
            ("Configuration File".to_string(), settings.config_file.clone()),
            ("Credential".to_string(), settings.ssh_key_dn.clone()),
            ("Host".to_string(), settings.hostname.clone()),
            ("Private Key File".to_string(), settings.private_key_file.clone()),
            (
                "Private Key Password Credential".to_string(),
                settings.private_key_password_dn.clone(),
            ),
            (SAN_ENABLED.to_string(), flag(settings.san_enabled)),
            ("Temp Directory".to_string(), settings.temp_dir.clone()),
        ]);
        if settings.copy_extensions {
            extra.insert("Copy Extensions".to_string(), "copy".to_string());
        }

        let object = self
            .create_ca(dn, class::OPENSSL_CA, driver::OPENSSL, Some(&extra))
            .await?;

        let periods: Vec<String> = (1..=settings.max_validity_years)
            .map(|years| years.to_string())
            .collect();
        let attributes = BTreeMap::from([(VALIDITY_PERIOD.to_string(), periods)]);
        self.write(dn, &attributes).await?;

        Ok(object)
    }

    async fn delete_ca(&self, dn: &str, recursive: bool) -> Result<(), AppError> {
        self.delete(dn, recursive).await
    }
}
