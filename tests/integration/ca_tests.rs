use crate::common::{self, CONTACT, create_test_client};
use mockito::{Matcher, Server};
use serde_json::json;
use tpp_client::prelude::*;

const CA_DN: &str = "\\VED\\Policy\\CA Templates\\Internal";

fn created(class: &str) -> String {
    json!({
        "Object": {"DN": CA_DN, "Name": "Internal", "TypeName": class},
        "Result": 1
    })
    .to_string()
}

#[tokio::test]
async fn test_create_self_signed_ca() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let _identity = common::mock_identity_self(&mut server, 1).await;
    let create = server
        .mock("POST", "/vedsdk/Config/Create")
        .match_body(Matcher::Json(json!({
            "Class": "Self Signed CA",
            "ObjectDN": CA_DN,
            "NameAttributeList": [
                {"Name": "Algorithm", "Value": "SHA256"},
                {"Name": "Contact", "Value": CONTACT},
                {"Name": "Driver Name", "Value": "caselfsigned"},
                {"Name": "Key Usage", "Value": "KeyEncipherment, DigitalSignature"},
                {"Name": "SAN Enabled", "Value": "1"},
                {"Name": "Validity Period", "Value": "730"}
            ]
        })))
        .with_body(created("Self Signed CA"))
        .create_async()
        .await;

    let settings = SelfSignedCa {
        validity_days: 730,
        ..SelfSignedCa::default()
    };
    let ca = client.create_self_signed_ca(CA_DN, &settings).await.unwrap();

    assert_eq!(ca.class, "Self Signed CA");
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_openssl_ca_writes_validity_periods() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let _identity = common::mock_identity_self(&mut server, 1).await;
    let create = server
        .mock("POST", "/vedsdk/Config/Create")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"Class": "OpenSSL CA", "ObjectDN": CA_DN})),
            Matcher::Regex(r#""Name":"Driver Name","Value":"caopenssl""#.to_string()),
            Matcher::Regex(r#""Name":"Host","Value":"ca.example.com""#.to_string()),
            Matcher::Regex(r#""Name":"Copy Extensions","Value":"copy""#.to_string()),
        ]))
        .with_body(created("OpenSSL CA"))
        .create_async()
        .await;
    let write = server
        .mock("POST", "/vedsdk/Config/Write")
        .match_body(Matcher::Json(json!({
            "ObjectDN": CA_DN,
            "AttributeData": [{"Name": "Validity Period", "Value": ["1", "2", "3"]}]
        })))
        .with_body(r#"{"Result":1}"#)
        .create_async()
        .await;

    let settings = OpenSslCa {
        hostname: "ca.example.com".to_string(),
        ssh_key_dn: "\\VED\\Policy\\Credentials\\ssh".to_string(),
        config_file: "/etc/ssl/openssl.cnf".to_string(),
        cert_dir: "/etc/ssl/certs".to_string(),
        root_cert_file: "/etc/ssl/ca.pem".to_string(),
        private_key_file: "/etc/ssl/private/ca.key".to_string(),
        private_key_password_dn: "\\VED\\Policy\\Credentials\\ca-key".to_string(),
        temp_dir: "/tmp".to_string(),
        san_enabled: false,
        copy_extensions: true,
        max_validity_years: 3,
    };
    let ca = client.create_openssl_ca(CA_DN, &settings).await.unwrap();

    assert_eq!(ca.class, "OpenSSL CA");
    create.assert_async().await;
    write.assert_async().await;
}

#[tokio::test]
async fn test_delete_ca() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let mock = server
        .mock("POST", "/vedsdk/Config/Delete")
        .match_body(Matcher::Json(json!({"ObjectDN": CA_DN, "Recursive": 1})))
        .with_body(r#"{"Result":1}"#)
        .create_async()
        .await;

    client.delete_ca(CA_DN, true).await.unwrap();
    mock.assert_async().await;
}
