/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::config::ConfigService;
use crate::constants::path;
use crate::error::AppError;
use crate::model::envelope::ConfigEnvelope;
use crate::model::requests::{
    AttributeData, ConfigAttributeRequest, ConfigCreateRequest, ConfigDeleteRequest,
    ConfigEnumerateRequest, ConfigIsValidRequest, ConfigWriteRequest, ObjectDnRequest,
};
use crate::model::responses::{
    DefaultDnResponse, EnumerateResponse, ObjectResponse, ReadAllResponse, ReadResponse,
};
use crate::presentation::config::ConfigObject;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::IgnoredAny;
use std::collections::BTreeMap;
use tracing::{debug, info};

#[async_trait]
impl ConfigService for Client {
    async fn create(
        &self,
        dn: &str,
        class: &str,
        seed: Option<&BTreeMap<String, String>>,
    ) -> Result<ConfigObject, AppError> {
        info!("Creating {} object: {}", class, dn);
        let body = ConfigCreateRequest::new(dn, class, seed);
        let response: ObjectResponse = self
            .http()
            .execute_with_envelope::<ConfigEnvelope, _, _>(
                Method::POST,
                path::CONFIG_CREATE,
                Some(&body),
            )
            .await?;
        debug!("Created object {} ({})", response.object.dn, response.object.guid);
        Ok(response.object)
    }

    async fn is_valid(
        &self,
        dn: Option<&str>,
        guid: Option<&str>,
    ) -> Result<ConfigObject, AppError> {
        if dn.is_none() && guid.is_none() {
            return Err(AppError::InvalidInput(
                "either a DN or a GUID is required".to_string(),
            ));
        }
        let body = ConfigIsValidRequest {
            object_dn: dn,
            object_guid: guid,
        };
        let response: ObjectResponse = self
            .http()
            .execute_with_envelope::<ConfigEnvelope, _, _>(
                Method::POST,
                path::CONFIG_IS_VALID,
                Some(&body),
            )
            .await?;
        Ok(response.object)
    }

    async fn exists(&self, dn: &str) -> bool {
        match self.is_valid(Some(dn), None).await {
            Ok(_) => true,
            Err(e) => {
                debug!("{} treated as absent: {}", dn, e);
                false
            }
        }
    }

    async fn retrieve(&self, dn: &str) -> Result<ConfigObject, AppError> {
        self.is_valid(Some(dn), None).await
    }

    async fn default_dn(&self) -> Result<String, AppError> {
        let response: DefaultDnResponse = self
            .http()
            .execute_with_envelope::<ConfigEnvelope, (), _>(
                Method::GET,
                path::CONFIG_DEFAULT_DN,
                None,
            )
            .await?;
        Ok(response.default_dn)
    }

    async fn delete(&self, dn: &str, recursive: bool) -> Result<(), AppError> {
        info!("Deleting object: {} (recursive: {})", dn, recursive);
        let body = ConfigDeleteRequest {
            object_dn: dn,
            recursive: u8::from(recursive),
        };
        self.http()
            .execute_with_envelope::<ConfigEnvelope, _, IgnoredAny>(
                Method::POST,
                path::CONFIG_DELETE,
                Some(&body),
            )
            .await?;
        Ok(())
    }

    async fn enumerate(
        &self,
        dn: &str,
        recursive: bool,
        pattern: Option<&str>,
    ) -> Result<Vec<ConfigObject>, AppError> {
        let body = ConfigEnumerateRequest {
            object_dn: dn,
            recursive: recursive.to_string(),
            pattern,
        };
        let response: EnumerateResponse = self
            .http()
            .execute_with_envelope::<ConfigEnvelope, _, _>(
                Method::POST,
                path::CONFIG_ENUMERATE,
                Some(&body),
            )
            .await?;
        debug!("{} children under {}", response.objects.len(), dn);
        Ok(response.objects)
    }

    async fn add_value(&self, dn: &str, name: &str, value: &str) -> Result<(), AppError> {
        let body = ConfigAttributeRequest {
            object_dn: dn,
            attribute_name: name,
            value: Some(value),
        };
        self.http()
            .execute_with_envelope::<ConfigEnvelope, _, IgnoredAny>(
                Method::POST,
                path::CONFIG_ADD_VALUE,
                Some(&body),
            )
            .await?;
        Ok(())
    }

    async fn clear_attribute(&self, dn: &str, name: &str) -> Result<(), AppError> {
        let body = ConfigAttributeRequest {
            object_dn: dn,
            attribute_name: name,
            value: None,
        };
        self.http()
            .execute_with_envelope::<ConfigEnvelope, _, IgnoredAny>(
                Method::POST,
                path::CONFIG_CLEAR_ATTRIBUTE,
                Some(&body),
            )
            .await?;
        Ok(())
    }

    async fn read(&self, dn: &str, name: &str) -> Result<Vec<String>, AppError> {
        let body = ConfigAttributeRequest {
            object_dn: dn,
            attribute_name: name,
            value: None,
        };
        let response: ReadResponse = self
            .http()
            .execute_with_envelope::<ConfigEnvelope, _, _>(
                Method::POST,
                path::CONFIG_READ,
                Some(&body),
            )
            .await?;
        Ok(response.values)
    }

    async fn read_all(&self, dn: &str) -> Result<BTreeMap<String, Vec<String>>, AppError> {
        let body = ObjectDnRequest { object_dn: dn };
        let response: ReadAllResponse = self
            .http()
            .execute_with_envelope::<ConfigEnvelope, _, _>(
                Method::POST,
                path::CONFIG_READ_ALL,
                Some(&body),
            )
            .await?;
        Ok(response.into_map())
    }

    async fn write(
        &self,
        dn: &str,
        attributes: &BTreeMap<String, Vec<String>>,
    ) -> Result<(), AppError> {
        info!("Writing {} attribute(s) to {}", attributes.len(), dn);
        let body = ConfigWriteRequest {
            object_dn: dn,
            attribute_data: attributes
                .iter()
                .map(|(name, values)| AttributeData {
                    name,
                    value: values.as_slice(),
                })
                .collect(),
        };
        self.http()
            .execute_with_envelope::<ConfigEnvelope, _, IgnoredAny>(
                Method::POST,
                path::CONFIG_WRITE,
                Some(&body),
            )
            .await?;
        Ok(())
    }
}
