use crate::common::{self, API_KEY, create_test_client, create_test_config};
use mockito::Server;
use tokio_test::block_on;
use tpp_client::prelude::*;

#[test]
fn test_login_is_lazy_and_cached() {
    let mut server = Server::new();
    let client = create_test_client(&server);

    let login = server
        .mock("POST", "/vedsdk/authorize/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"APIKey":"{API_KEY}"}}"#))
        .expect(1)
        .create();

    assert!(!block_on(client.http().auth().has_session()));

    let first = block_on(client.http().ensure_credential()).unwrap();
    let second = block_on(client.http().ensure_credential()).unwrap();

    assert_eq!(first.api_key, API_KEY);
    assert_eq!(first.valid_until, None);
    assert_eq!(first, second);
    login.assert();
}

#[tokio::test]
async fn test_logout_forces_a_new_login() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    let login = common::mock_login(&mut server, 2).await;
    let identity = common::mock_identity_self(&mut server, 2).await;

    client.current().await.unwrap();
    client.logout().await.unwrap();
    assert!(!client.http().auth().has_session().await);
    client.current().await.unwrap();

    login.assert_async().await;
    identity.assert_async().await;
}

#[tokio::test]
async fn test_rejected_login_is_authentication_error() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);

    let login = server
        .mock("POST", "/vedsdk/authorize/")
        .with_status(401)
        .with_body("Username or password is incorrect")
        .create_async()
        .await;
    let downstream = server
        .mock("GET", "/vedsdk/Identity/Self")
        .expect(0)
        .create_async()
        .await;

    let err = client.current().await.unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)), "{err:?}");

    login.assert_async().await;
    downstream.assert_async().await;
}

#[tokio::test]
async fn test_login_without_api_key_is_authentication_error() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    server
        .mock("POST", "/vedsdk/authorize/")
        .with_status(200)
        .with_body(r#"{"APIKey":""}"#)
        .create_async()
        .await;

    let err = client.http().ensure_credential().await.unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));
}

#[tokio::test]
async fn test_malformed_login_response_is_authentication_error() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);
    server
        .mock("POST", "/vedsdk/authorize/")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client.http().ensure_credential().await.unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_authentication_error() {
    let client = Client::new(create_test_config("http://127.0.0.1:1")).unwrap();
    let err = client.http().ensure_credential().await.unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let result = Client::new(create_test_config("not a url"));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}
