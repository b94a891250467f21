/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::vault::VaultService;
use crate::constants::path;
use crate::crypto::{X509Certificate, decode_certificate, encode_certificate};
use crate::error::AppError;
use crate::model::envelope::VaultEnvelope;
use crate::model::requests::{
    VaultAddRequest, VaultEntryRequest, VaultLookupExpiringRequest, VaultLookupRequest,
};
use crate::model::responses::{VaultAddResponse, VaultIdsResponse, VaultRetrieveResponse};
use crate::presentation::vault::{VaultHandle, VaultLookup};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use reqwest::Method;
use serde::de::IgnoredAny;
use tracing::{debug, info};

const PEM_PREFIX: &[u8] = b"-----BEGIN";

/// Base64 of the PEM encoding, the form the vault expects certificates in
fn certificate_string(certificate: &X509Certificate) -> String {
    BASE64.encode(encode_certificate(certificate))
}

fn into_handles(response: VaultIdsResponse) -> Vec<VaultHandle> {
    response
        .vault_ids
        .unwrap_or_default()
        .into_iter()
        .map(VaultHandle)
        .collect()
}

#[async_trait]
impl VaultService for Client {
    async fn add(
        &self,
        certificate: &X509Certificate,
        owner_dn: &str,
        protection_key: &str,
    ) -> Result<VaultHandle, AppError> {
        info!("Adding {} to the vault", certificate.subject());
        let body = VaultAddRequest {
            certificate_string: certificate_string(certificate),
            owner_dn,
            protection_key,
        };
        let response: VaultAddResponse = self
            .http()
            .execute_with_envelope::<VaultEnvelope, _, _>(Method::POST, path::VAULT_ADD, Some(&body))
            .await?;
        debug!("Vault id: {}", response.vault_id);
        Ok(VaultHandle(response.vault_id))
    }

    async fn lookup(&self, criteria: &VaultLookup) -> Result<Vec<VaultHandle>, AppError> {
        let body = VaultLookupRequest {
            certificate_string: criteria.certificate.as_ref().map(certificate_string),
            owner_dn: criteria.owner_dn.as_deref(),
            name: criteria.name_value.as_ref().map(|(name, _)| name.as_str()),
            value: criteria.name_value.as_ref().map(|(_, value)| value.as_str()),
        };
        let response: VaultIdsResponse = self
            .http()
            .execute_with_envelope::<VaultEnvelope, _, _>(
                Method::POST,
                path::VAULT_LOOKUP,
                Some(&body),
            )
            .await?;
        Ok(into_handles(response))
    }

    async fn lookup_by_certificate(
        &self,
        certificate: &X509Certificate,
    ) -> Result<Vec<VaultHandle>, AppError> {
        let criteria = VaultLookup {
            certificate: Some(certificate.clone()),
            ..VaultLookup::default()
        };
        self.lookup(&criteria).await
    }

    async fn lookup_by_owner_dn(&self, owner_dn: &str) -> Result<Vec<VaultHandle>, AppError> {
        let criteria = VaultLookup {
            owner_dn: Some(owner_dn.to_string()),
            ..VaultLookup::default()
        };
        self.lookup(&criteria).await
    }

    async fn lookup_by_name_value(
        &self,
        name: &str,
        value: &str,
    ) -> Result<Vec<VaultHandle>, AppError> {
        let criteria = VaultLookup {
            name_value: Some((name.to_string(), value.to_string())),
            ..VaultLookup::default()
        };
        self.lookup(&criteria).await
    }

    async fn lookup_expiring(
        &self,
        days: u32,
        owner_dn: &str,
    ) -> Result<Vec<VaultHandle>, AppError> {
        let body = VaultLookupExpiringRequest {
            days_to_expiration: days,
            owner_dn,
        };
        let response: VaultIdsResponse = self
            .http()
            .execute_with_envelope::<VaultEnvelope, _, _>(
                Method::POST,
                path::VAULT_LOOKUP_EXPIRING,
                Some(&body),
            )
            .await?;
        Ok(into_handles(response))
    }

    async fn retrieve(&self, handle: VaultHandle) -> Result<X509Certificate, AppError> {
        let body = VaultEntryRequest {
            vault_id: handle.id(),
            owner_dn: None,
        };
        let response: VaultRetrieveResponse = self
            .http()
            .execute_with_envelope::<VaultEnvelope, _, _>(
                Method::POST,
                path::VAULT_RETRIEVE,
                Some(&body),
            )
            .await?;

        let data = BASE64.decode(response.certificate_string.trim())?;
        if data.trim_ascii_start().starts_with(PEM_PREFIX) {
            decode_certificate(&data)
        } else {
            X509Certificate::from_der(data)
        }
    }

    async fn remove(&self, handle: VaultHandle, owner_dn: &str) -> Result<(), AppError> {
        info!("Removing vault entry {}", handle);
        let body = VaultEntryRequest {
            vault_id: handle.id(),
            owner_dn: Some(owner_dn),
        };
        self.http()
            .execute_with_envelope::<VaultEnvelope, _, IgnoredAny>(
                Method::POST,
                path::VAULT_REMOVE,
                Some(&body),
            )
            .await?;
        Ok(())
    }
}
