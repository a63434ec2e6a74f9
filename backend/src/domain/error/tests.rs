//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let err = Error::try_new(ErrorCode::InvalidRequest, message).expect_err("blank message");
    assert_eq!(err, ErrorValidationError::EmptyMessage);
}

#[rstest]
#[case(Error::invalid_request("x"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("x"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("x"), ErrorCode::Forbidden)]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("x"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[test]
fn serialises_camel_case_and_omits_empty_fields() {
    let value = serde_json::to_value(Error::not_found("work of art not found")).expect("json");
    assert_eq!(
        value,
        json!({ "code": "not_found", "message": "work of art not found" })
    );
}

#[test]
fn deserialisation_rejects_blank_message() {
    let result = serde_json::from_value::<Error>(json!({ "code": "not_found", "message": " " }));
    assert!(result.is_err());
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id = TraceId::generate();
    let error = TraceId::scope(trace_id, async { Error::forbidden("not yours") }).await;
    let expected = trace_id.to_string();
    assert_eq!(error.trace_id(), Some(expected.as_str()));
}
