use tpp_client::error::{AppError, ResultCode};
use tpp_client::model::envelope::{ConfigEnvelope, ResultEnvelope, VaultEnvelope};
use tpp_client::model::result_codes::{ConfigResult, VaultResult};

#[test]
fn test_config_envelope_ignores_payload_fields() {
    let envelope: ConfigEnvelope =
        serde_json::from_str(r#"{"Result":1,"Object":{"DN":"\\VED\\Policy"}}"#).unwrap();
    assert!(envelope.into_result().is_ok());
}

#[test]
fn test_config_envelope_empty_message_falls_back_to_description() {
    let envelope: ConfigEnvelope = serde_json::from_str(r#"{"Result":400,"Error":""}"#).unwrap();
    match envelope.into_result() {
        Err(AppError::Domain { code, message }) => {
            assert_eq!(code, ResultCode::Config(ConfigResult::ObjectDoesNotExist));
            assert_eq!(message, "object does not exist");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_vault_envelope_success_is_zero() {
    let envelope: VaultEnvelope = serde_json::from_str(r#"{"Result":0,"VaultId":7}"#).unwrap();
    assert!(envelope.into_result().is_ok());

    let envelope: VaultEnvelope = serde_json::from_str(r#"{"Result":1}"#).unwrap();
    let err = envelope.into_result().unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain {
            code: ResultCode::Vault(VaultResult::InvalidCallingAssembly),
            ..
        }
    ));
}
