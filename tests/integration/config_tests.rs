use crate::common::{self, API_KEY, create_test_client};
use mockito::{Matcher, Server};
use serde_json::json;
use std::collections::BTreeMap;
use tpp_client::prelude::*;

#[tokio::test]
async fn test_create_with_seed_attributes() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let mock = server
        .mock("POST", "/vedsdk/Config/Create")
        .match_header("X-Venafi-Api-Key", API_KEY)
        .match_body(Matcher::Json(json!({
            "Class": "Device",
            "ObjectDN": "\\VED\\Policy\\Devices\\web01",
            "NameAttributeList": [
                {"Name": "Description", "Value": "web server"},
                {"Name": "Host", "Value": "web01.example.com"}
            ]
        })))
        .with_body(
            json!({
                "Object": {
                    "AbsoluteGUID": "{1}{2}{3}",
                    "DN": "\\VED\\Policy\\Devices\\web01",
                    "GUID": "{3}",
                    "Id": 812,
                    "Name": "web01",
                    "Parent": "\\VED\\Policy\\Devices",
                    "Revision": 1,
                    "TypeName": "Device"
                },
                "Result": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let seed = BTreeMap::from([
        ("Host".to_string(), "web01.example.com".to_string()),
        ("Description".to_string(), "web server".to_string()),
    ]);
    let object = client
        .create("\\VED\\Policy\\Devices\\web01", "Device", Some(&seed))
        .await
        .unwrap();

    assert_eq!(object.class, "Device");
    assert_eq!(object.id, 812);
    assert_eq!(object.parent, "\\VED\\Policy\\Devices");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_exists_reports_false_on_any_failure() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    server
        .mock("POST", "/vedsdk/Config/IsValid")
        .match_body(Matcher::Json(json!({"ObjectDN": "\\VED\\Policy\\Here"})))
        .with_body(r#"{"Object":{"DN":"\\VED\\Policy\\Here","TypeName":"Policy"},"Result":1}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/vedsdk/Config/IsValid")
        .match_body(Matcher::Json(json!({"ObjectDN": "\\VED\\Policy\\Gone"})))
        .with_body(r#"{"Error":"Object does not exist","Result":400}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/vedsdk/Config/IsValid")
        .match_body(Matcher::Json(json!({"ObjectDN": "\\VED\\Policy\\Broken"})))
        .with_status(503)
        .create_async()
        .await;

    assert!(client.exists("\\VED\\Policy\\Here").await);
    assert!(!client.exists("\\VED\\Policy\\Gone").await);
    assert!(!client.exists("\\VED\\Policy\\Broken").await);
}

#[tokio::test]
async fn test_is_valid_by_guid() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let mock = server
        .mock("POST", "/vedsdk/Config/IsValid")
        .match_body(Matcher::Json(json!({"ObjectGUID": "{abc}"})))
        .with_body(r#"{"Object":{"DN":"\\VED\\Policy\\X","GUID":"{abc}"},"Result":1}"#)
        .create_async()
        .await;

    let object = client.is_valid(None, Some("{abc}")).await.unwrap();
    assert_eq!(object.dn, "\\VED\\Policy\\X");
    mock.assert_async().await;

    assert!(matches!(
        client.is_valid(None, None).await,
        Err(AppError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_default_dn_is_a_get() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    server
        .mock("GET", "/vedsdk/Config/DefaultDn")
        .with_body(r#"{"DefaultDN":"\\VED\\Policy","Result":1}"#)
        .create_async()
        .await;

    assert_eq!(client.default_dn().await.unwrap(), "\\VED\\Policy");
}

#[tokio::test]
async fn test_delete_sends_numeric_recursive_flag() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let mock = server
        .mock("POST", "/vedsdk/Config/Delete")
        .match_body(Matcher::Json(json!({"ObjectDN": "\\VED\\Policy\\Old", "Recursive": 1})))
        .with_body(r#"{"Result":1}"#)
        .create_async()
        .await;

    client.delete("\\VED\\Policy\\Old", true).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_with_children_fails() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    server
        .mock("POST", "/vedsdk/Config/Delete")
        .with_body(r#"{"Error":"Object has children","Result":402}"#)
        .create_async()
        .await;

    let err = client.delete("\\VED\\Policy\\Old", false).await.unwrap_err();
    assert_eq!(err.code(), Some(402));
}

#[tokio::test]
async fn test_enumerate_sends_textual_recursive_flag() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let mock = server
        .mock("POST", "/vedsdk/Config/Enumerate")
        .match_body(Matcher::Json(json!({
            "ObjectDN": "\\VED\\Policy",
            "Recursive": "true",
            "Pattern": "web*"
        })))
        .with_body(
            json!({
                "Objects": [
                    {"DN": "\\VED\\Policy\\web01", "Name": "web01", "TypeName": "Device"},
                    {"DN": "\\VED\\Policy\\web02", "Name": "web02", "TypeName": "Device"}
                ],
                "Result": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let objects = client.enumerate("\\VED\\Policy", true, Some("web*")).await.unwrap();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[1].name, "web02");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_attribute_values() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    let add = server
        .mock("POST", "/vedsdk/Config/AddValue")
        .match_body(Matcher::Json(json!({
            "ObjectDN": "\\VED\\Policy\\A",
            "AttributeName": "Contact",
            "Value": "local:{2}"
        })))
        .with_body(r#"{"Result":1}"#)
        .create_async()
        .await;
    let read = server
        .mock("POST", "/vedsdk/Config/Read")
        .match_body(Matcher::Json(json!({
            "ObjectDN": "\\VED\\Policy\\A",
            "AttributeName": "Contact"
        })))
        .with_body(
            r#"{"AttributeName":"Contact","ObjectDN":"\\VED\\Policy\\A","Result":1,"Values":["local:{1}","local:{2}"]}"#,
        )
        .create_async()
        .await;
    let clear = server
        .mock("POST", "/vedsdk/Config/ClearAttribute")
        .match_body(Matcher::Json(json!({
            "ObjectDN": "\\VED\\Policy\\A",
            "AttributeName": "Contact"
        })))
        .with_body(r#"{"Result":1}"#)
        .create_async()
        .await;

    client.add_value("\\VED\\Policy\\A", "Contact", "local:{2}").await.unwrap();
    let values = client.read("\\VED\\Policy\\A", "Contact").await.unwrap();
    client.clear_attribute("\\VED\\Policy\\A", "Contact").await.unwrap();

    assert_eq!(values, vec!["local:{1}".to_string(), "local:{2}".to_string()]);
    add.assert_async().await;
    read.assert_async().await;
    clear.assert_async().await;
}

#[tokio::test]
async fn test_read_all_and_write() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let _login = common::mock_login(&mut server, 1).await;
    server
        .mock("POST", "/vedsdk/Config/ReadAll")
        .match_body(Matcher::Json(json!({"ObjectDN": "\\VED\\Policy\\A"})))
        .with_body(
            json!({
                "NameValues": [
                    {"Name": "Contact", "Values": ["local:{1}"]},
                    {"Name": "Description", "Values": ["team folder"]}
                ],
                "Result": 1
            })
            .to_string(),
        )
        .create_async()
        .await;
    let write = server
        .mock("POST", "/vedsdk/Config/Write")
        .match_body(Matcher::Json(json!({
            "ObjectDN": "\\VED\\Policy\\A",
            "AttributeData": [
                {"Name": "Description", "Value": ["team folder", "second line"]}
            ]
        })))
        .with_body(r#"{"Result":1}"#)
        .create_async()
        .await;

    let mut attributes = client.read_all("\\VED\\Policy\\A").await.unwrap();
    assert_eq!(attributes["Contact"], vec!["local:{1}".to_string()]);

    attributes.remove("Contact");
    attributes
        .get_mut("Description")
        .unwrap()
        .push("second line".to_string());
    client.write("\\VED\\Policy\\A", &attributes).await.unwrap();
    write.assert_async().await;
}
