use idkit_core::contracts::CustomClaims;
use idkit_gcip::contracts::models::{
    ApiError, ApiUser, LookupAccountRequest, LookupAccountResponse, UpdateAccountRequest,
};

#[test]
fn test_update_request_carries_claims_as_string() {
    let claims = CustomClaims::admin(true);
    let request = UpdateAccountRequest::for_claims("abc123", &claims).unwrap();

    assert_eq!(request.local_id, "abc123");
    assert_eq!(request.custom_attributes, r#"{"admin":true}"#);

    let body = serde_json::to_string(&request).unwrap();
    assert_eq!(
        body,
        r#"{"localId":"abc123","customAttributes":"{\"admin\":true}"}"#
    );
}

#[test]
fn test_update_request_uid_is_verbatim() {
    let claims = CustomClaims::admin(true);
    let request = UpdateAccountRequest::for_claims("  Spaced-Uid_01  ", &claims).unwrap();

    assert_eq!(request.local_id, "  Spaced-Uid_01  ");
}

#[test]
fn test_update_request_rejects_reserved_claims() {
    let claims = CustomClaims::admin(true).set("sub", serde_json::json!("someone-else"));

    let err = UpdateAccountRequest::for_claims("abc123", &claims).unwrap_err();
    assert!(err.to_string().contains("reserved"));
}

#[test]
fn test_lookup_request_shape() {
    let request = LookupAccountRequest {
        local_id: vec!["abc123".to_string()],
    };

    let body = serde_json::to_string(&request).unwrap();
    assert_eq!(body, r#"{"localId":["abc123"]}"#);
}

#[test]
fn test_lookup_response_to_view() {
    let raw = r#"{
        "users": [{
            "localId": "abc123",
            "email": "ops@example.com",
            "displayName": "Ops",
            "customAttributes": "{\"admin\":true}"
        }]
    }"#;

    let response: LookupAccountResponse = serde_json::from_str(raw).unwrap();
    let user: &ApiUser = response.users.first().unwrap();
    let view = user.to_view().unwrap();

    assert_eq!(view.uid, "abc123");
    assert_eq!(view.email.as_deref(), Some("ops@example.com"));
    assert!(!view.disabled);
    assert!(view.custom_claims.unwrap().is_admin());
}

#[test]
fn test_lookup_response_without_claims() {
    let raw = r#"{"users": [{"localId": "abc123"}]}"#;

    let response: LookupAccountResponse = serde_json::from_str(raw).unwrap();
    let view = response.users.first().unwrap().to_view().unwrap();

    assert!(view.custom_claims.is_none());
}

#[test]
fn test_api_error_envelope() {
    let raw = r#"{"error": {"code": 400, "message": "USER_NOT_FOUND"}}"#;

    let envelope: ApiError = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.error.message, "USER_NOT_FOUND");
    assert_eq!(envelope.error.code, 400);
}
