/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::certificate::CertificateService;
use crate::constants::path;
use crate::crypto::{decode_bundle, encode_certificate, encode_private_key};
use crate::error::AppError;
use crate::model::requests::{CertificateImportRequest, CertificateRetrieveRequest};
use crate::model::responses::{CertificatePage, CertificateRetrieveResponse};
use crate::presentation::certificate::{
    CertificateRecord, ImportRequest, ImportedCertificate, RetrieveOptions, RetrievedCertificate,
};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use tracing::{debug, info, warn};

#[async_trait]
impl CertificateService for Client {
    async fn list(&self) -> Result<Vec<CertificateRecord>, AppError> {
        info!("Listing certificates");
        let records = self
            .http()
            .execute_paged::<CertificatePage>(path::CERTIFICATES, self.config().page_size)
            .await?;
        info!("Listed {} certificates", records.len());
        Ok(records)
    }

    async fn retrieve(
        &self,
        dn: &str,
        options: &RetrieveOptions,
    ) -> Result<RetrievedCertificate, AppError> {
        info!("Retrieving certificate: {}", dn);
        let body = CertificateRetrieveRequest {
            certificate_dn: dn,
            format: options.format,
            include_chain: options.include_chain,
            include_private_key: options.include_private_key,
            password: &options.password,
        };
        let response: CertificateRetrieveResponse = self
            .http()
            .post(path::CERTIFICATES_RETRIEVE, &body)
            .await?;

        let data = BASE64.decode(response.certificate_data.trim())?;
        let bundle = decode_bundle(&data, &options.password)?;

        let mut certificates = bundle.certificates.into_iter();
        let certificate = certificates
            .next()
            .ok_or_else(|| AppError::Pem("no certificate found in PEM data".to_string()))?;
        let chain: Vec<_> = certificates.collect();

        if options.include_private_key && bundle.private_key.is_none() {
            warn!("Private key requested for {} but none was returned", dn);
        }
        debug!(
            "Retrieved {} with {} chain certificate(s)",
            certificate.subject(),
            chain.len()
        );

        Ok(RetrievedCertificate {
            certificate,
            chain,
            private_key: bundle.private_key,
            filename: response.filename,
        })
    }

    async fn import(&self, request: &ImportRequest) -> Result<ImportedCertificate, AppError> {
        info!(
            "Importing certificate {} into {}",
            request.object_name, request.policy_dn
        );
        let private_key_data = request
            .private_key
            .as_ref()
            .map(|key| encode_private_key(key, &request.password, request.cipher))
            .transpose()?;
        let body = CertificateImportRequest {
            policy_dn: &request.policy_dn,
            object_name: &request.object_name,
            certificate_data: encode_certificate(&request.certificate),
            password: &request.password,
            private_key_data,
            reconcile: request.reconcile,
        };
        let imported: ImportedCertificate = self
            .http()
            .post(path::CERTIFICATES_IMPORT, &body)
            .await?;
        debug!("Imported certificate: {}", imported.certificate_dn);
        Ok(imported)
    }
}
