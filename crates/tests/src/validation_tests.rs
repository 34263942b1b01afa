use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, FunctionEndpointRequest, RegisterRequest};
use validator::Validate;

#[test]
fn valid_register_request_passes() {
    let req = RegisterRequest {
        email: "user@example.com".into(),
        password: "Str0ng&pass".into(),
        display_name: "User".into(),
    };
    assert!(req.validate().is_ok());
}

#[test]
fn invalid_register_request_maps_to_field_errors() {
    let req = RegisterRequest {
        email: "not-an-email".into(),
        password: "weak".into(),
        display_name: "".into(),
    };

    let err: AppError = req.validate().unwrap_err().into();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("password"));
    assert!(err.field_errors.contains_key("display_name"));
}

#[test]
fn field_error_carries_the_rule_message() {
    let req = FunctionEndpointRequest {
        function_name: "ok_name".into(),
        endpoint: "https://api.example.com/hook".into(),
        allowed_domains: "https://example.com,notadomain".into(),
    };

    let err: AppError = req.validate().unwrap_err().into();
    let message = err.field_errors.get("allowed_domains").unwrap();
    assert!(message.contains("notadomain"), "got: {message}");
}

#[test]
fn valid_function_endpoint_request_passes() {
    let req = FunctionEndpointRequest {
        function_name: "lookup_account".into(),
        endpoint: "https://api.example.com/v1/lookup".into(),
        allowed_domains: "https://app.example.com,http://localhost:3000".into(),
    };
    assert!(req.validate().is_ok());
}
