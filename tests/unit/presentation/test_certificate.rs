use chrono::{TimeZone, Utc};
use serde_json::json;
use tpp_client::presentation::{CertificateFormat, CertificateRecord, RetrieveOptions};

#[test]
fn test_certificate_record_from_wire() {
    let record: CertificateRecord = serde_json::from_value(json!({
        "CreatedOn": "2019-05-30T16:32:10.4567890Z",
        "DN": "\\VED\\Policy\\Certs\\www.example.com",
        "Guid": "{c}",
        "Name": "www.example.com",
        "ParentDn": "\\VED\\Policy\\Certs",
        "SchemaClass": "X509 Certificate",
        "X509": {
            "CN": "www.example.com",
            "SANS": {"DNS": ["www.example.com", "example.com"]},
            "Serial": "0A1B",
            "Thumbprint": "EBD6",
            "ValidFrom": "2019-05-30T16:22:10",
            "ValidTo": "2020-05-29T16:22:10.0000000Z"
        }
    }))
    .unwrap();

    assert_eq!(record.schema_class, "X509 Certificate");
    assert_eq!(record.x509.common_name, "www.example.com");
    assert_eq!(record.x509.alt_names["DNS"].len(), 2);
    assert_eq!(
        record.x509.valid_from,
        Some(Utc.with_ymd_and_hms(2019, 5, 30, 16, 22, 10).unwrap())
    );
    assert_eq!(
        record.x509.valid_to,
        Some(Utc.with_ymd_and_hms(2020, 5, 29, 16, 22, 10).unwrap())
    );
    assert!(record.created_on.is_some());
}

#[test]
fn test_missing_timestamps_are_none() {
    let record: CertificateRecord =
        serde_json::from_value(json!({"DN": "\\VED\\x", "CreatedOn": null, "X509": {"ValidTo": ""}}))
            .unwrap();
    assert_eq!(record.created_on, None);
    assert_eq!(record.x509.valid_to, None);
}

#[test]
fn test_retrieve_options_default_to_pkcs8() {
    let options = RetrieveOptions::with_private_key("Passw0rd");
    assert_eq!(options.format, CertificateFormat::Base64Pkcs8);
    assert!(options.include_private_key);
    assert_eq!(
        serde_json::to_string(&options.format).unwrap(),
        r#""Base64 (PKCS #8)""#
    );
}
