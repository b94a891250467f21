// Common utilities for integration tests

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use tpp_client::prelude::*;

pub const USERNAME: &str = "tppadmin";
pub const PASSWORD: &str = "s3cr3t";
pub const API_KEY: &str = "8c5a6d1e-0f3b-4c2a-9e7d-2b1f0a9c8d7e";
pub const CONTACT: &str = "local:{7f0d3a52-31c4-4a8e-9d1b-5c2e8f6a4b3d}";

/// Builds a configuration pointing at the stub server
pub fn create_test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            timeout: 5,
        },
        page_size: 100,
    }
}

/// Creates a client for the stub server
pub fn create_test_client(server: &ServerGuard) -> Client {
    setup_logger();
    Client::new(create_test_config(&server.url())).expect("client")
}

/// Login endpoint answering with [`API_KEY`], expected `hits` times
pub async fn mock_login(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("POST", "/vedsdk/authorize/")
        .match_header("content-type", "application/json; charset=utf-8")
        .match_body(Matcher::Json(json!({
            "Username": USERNAME,
            "Password": PASSWORD
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"APIKey": API_KEY, "ValidUntil": "/Date(1560282232563)/"}).to_string(),
        )
        .expect(hits)
        .create_async()
        .await
}

/// Identity endpoint listing a group and the configured user, expected `hits` times
pub async fn mock_identity_self(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("GET", "/vedsdk/Identity/Self")
        .match_header("X-Venafi-Api-Key", API_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Identities": [
                    {
                        "FullName": "CN=Admins",
                        "IsGroup": true,
                        "Name": "Admins",
                        "Prefix": "local",
                        "PrefixedName": "local:Admins",
                        "PrefixedUniversal": "local:{00000000-0000-0000-0000-000000000001}",
                        "Universal": "{00000000-0000-0000-0000-000000000001}"
                    },
                    {
                        "FullName": "CN=tppadmin",
                        "Name": USERNAME,
                        "Prefix": "local",
                        "PrefixedName": "local:tppadmin",
                        "PrefixedUniversal": CONTACT,
                        "Universal": "{7f0d3a52-31c4-4a8e-9d1b-5c2e8f6a4b3d}"
                    }
                ]
            })
            .to_string(),
        )
        .expect(hits)
        .create_async()
        .await
}
