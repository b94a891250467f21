use tpp_client::error::{AppError, ResultCode};
use tpp_client::model::result_codes::{ConfigResult, VaultResult};

#[test]
fn test_http_status_display_and_accessors() {
    let error = AppError::HttpStatus {
        status: 503,
        reason: "Service Unavailable".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "unexpected status code response: 503 (Service Unavailable)"
    );
    assert_eq!(error.status(), Some(503));
    assert_eq!(error.code(), None);
}

#[test]
fn test_config_domain_error() {
    let error = AppError::config(ConfigResult::ObjectDoesNotExist, "no such object");
    assert_eq!(error.code(), Some(400));
    assert_eq!(error.status(), None);
    assert!(error.to_string().contains("no such object"));
    assert!(error.to_string().contains("object does not exist (400)"));
}

#[test]
fn test_vault_domain_error_uses_description() {
    let error = AppError::vault(VaultResult::InsufficientPermissions);
    match &error {
        AppError::Domain { code, message } => {
            assert_eq!(*code, ResultCode::Vault(VaultResult::InsufficientPermissions));
            assert_eq!(message, VaultResult::InsufficientPermissions.description());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(error.code(), Some(10));
}

#[test]
fn test_unspecified_domain_error_has_no_code() {
    let error = AppError::Domain {
        code: ResultCode::Unspecified,
        message: "Certificate does not exist".to_string(),
    };
    assert_eq!(error.code(), None);
    assert_eq!(
        error.to_string(),
        "domain error [unspecified]: Certificate does not exist"
    );
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
    let error: AppError = serde_error.into();
    assert!(matches!(error, AppError::Decode(_)));
    assert!(error.to_string().starts_with("decode error:"));
}

#[test]
fn test_identity_not_found_display() {
    let error = AppError::IdentityNotFound("admin".to_string());
    assert_eq!(
        error.to_string(),
        "username not found in identity output: admin"
    );
}
