use crate::common::{self, create_test_client};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use mockito::{Matcher, Server};
use serde_json::json;
use tpp_client::prelude::*;

const CERT_PEM: &str = include_str!("../fixtures/cert.pem");
const OWNER_DN: &str = "\\VED\\Policy\\Certs\\web01";

fn certificate() -> X509Certificate {
    decode_certificate(CERT_PEM).unwrap()
}

#[tokio::test]
async fn test_add_sends_base64_pem() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let cert = certificate();
    let mock = server
        .mock("POST", "/vedsdk/X509CertificateStore/Add")
        .match_body(Matcher::Json(json!({
            "CertificateString": BASE64.encode(encode_certificate(&cert)),
            "OwnerDN": OWNER_DN,
            "ProtectionKey": "Software:Default"
        })))
        .with_body(r#"{"Result":0,"VaultId":4711}"#)
        .create_async()
        .await;

    let handle = client.add(&cert, OWNER_DN, "Software:Default").await.unwrap();
    assert_eq!(handle, VaultHandle(4711));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_lookup_sends_only_the_given_criterion() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let by_owner = server
        .mock("POST", "/vedsdk/X509CertificateStore/Lookup")
        .match_body(Matcher::Json(json!({"OwnerDN": OWNER_DN})))
        .with_body(r#"{"Result":0,"VaultIds":[3,5,8]}"#)
        .create_async()
        .await;
    let by_attribute = server
        .mock("POST", "/vedsdk/X509CertificateStore/Lookup")
        .match_body(Matcher::Json(json!({"Name": "Serial", "Value": "0A1B"})))
        .with_body(r#"{"Result":0}"#)
        .create_async()
        .await;

    let handles = client.lookup_by_owner_dn(OWNER_DN).await.unwrap();
    assert_eq!(handles, vec![VaultHandle(3), VaultHandle(5), VaultHandle(8)]);

    let none = client.lookup_by_name_value("Serial", "0A1B").await.unwrap();
    assert!(none.is_empty());

    by_owner.assert_async().await;
    by_attribute.assert_async().await;
}

#[tokio::test]
async fn test_lookup_by_certificate() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let cert = certificate();
    server
        .mock("POST", "/vedsdk/X509CertificateStore/Lookup")
        .match_body(Matcher::Json(json!({
            "CertificateString": BASE64.encode(encode_certificate(&cert))
        })))
        .with_body(r#"{"Result":0,"VaultIds":[12]}"#)
        .create_async()
        .await;

    let handles = client.lookup_by_certificate(&cert).await.unwrap();
    assert_eq!(handles, vec![VaultHandle(12)]);
}

#[tokio::test]
async fn test_lookup_expiring() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let mock = server
        .mock("POST", "/vedsdk/X509CertificateStore/LookupExpiring")
        .match_body(Matcher::Json(json!({"DaysToExpiration": 30, "OwnerDN": OWNER_DN})))
        .with_body(r#"{"Result":0,"VaultIds":[21,34]}"#)
        .create_async()
        .await;

    let handles = client.lookup_expiring(30, OWNER_DN).await.unwrap();
    assert_eq!(handles.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_retrieve_accepts_der_and_pem() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let cert = certificate();
    server
        .mock("POST", "/vedsdk/X509CertificateStore/Retrieve")
        .match_body(Matcher::Json(json!({"VaultId": 1})))
        .with_body(
            json!({"Result": 0, "CertificateString": BASE64.encode(cert.der())}).to_string(),
        )
        .create_async()
        .await;
    server
        .mock("POST", "/vedsdk/X509CertificateStore/Retrieve")
        .match_body(Matcher::Json(json!({"VaultId": 2})))
        .with_body(json!({"Result": 0, "CertificateString": BASE64.encode(CERT_PEM)}).to_string())
        .create_async()
        .await;

    let from_der = VaultService::retrieve(&client, VaultHandle(1)).await.unwrap();
    let from_pem = VaultService::retrieve(&client, VaultHandle(2)).await.unwrap();

    assert_eq!(from_der, cert);
    assert_eq!(from_pem, cert);
}

#[tokio::test]
async fn test_remove() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let mock = server
        .mock("POST", "/vedsdk/X509CertificateStore/Remove")
        .match_body(Matcher::Json(json!({"VaultId": 4711, "OwnerDN": OWNER_DN})))
        .with_body(r#"{"Result":0}"#)
        .create_async()
        .await;

    client.remove(VaultHandle(4711), OWNER_DN).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_remove_failure_carries_the_vault_code() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    server
        .mock("POST", "/vedsdk/X509CertificateStore/Remove")
        .with_body(r#"{"Result":8}"#)
        .create_async()
        .await;

    let err = client.remove(VaultHandle(4711), OWNER_DN).await.unwrap_err();
    match err {
        AppError::Domain { code: ResultCode::Vault(result), message } => {
            assert_eq!(result.code(), 8);
            assert!(!message.is_empty());
        }
        other => panic!("expected a vault error, got {other:?}"),
    }
}
