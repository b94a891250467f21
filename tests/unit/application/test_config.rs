use tpp_client::config::{Config, Credentials, RestApiConfig};
use tpp_client::constants::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};

#[test]
fn test_with_credentials_uses_defaults() {
    let config = Config::with_credentials("https://tpp.example.com", "admin", "secret");
    assert_eq!(config.rest_api.base_url, "https://tpp.example.com");
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.credentials.username, "admin");
}

#[test]
fn test_credentials_debug_hides_password() {
    let creds = Credentials {
        username: "admin".to_string(),
        password: "hunter2".to_string(),
    };
    let debug = format!("{creds:?}");
    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config {
        credentials: Credentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: "https://tpp.example.com".to_string(),
            timeout: 5,
        },
        page_size: 250,
    };
    let json = serde_json::to_string(&config).unwrap();
    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(config, deserialized);
}
