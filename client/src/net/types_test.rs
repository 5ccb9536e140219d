use super::*;

#[test]
fn user_deserializes_without_profile_or_email() {
    let raw = r#"{"id":7,"full_name":"Asha Kumari","mobile_number":"9876543210","date_joined":"2024-09-01T10:00:00Z"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.email, "");
    assert!(user.profile.is_none());
}

#[test]
fn user_deserializes_nested_profile() {
    let raw = r#"{
        "id": 3,
        "full_name": "Ravi",
        "mobile_number": "9000000000",
        "email": "ravi@example.com",
        "date_joined": "2024-01-01",
        "profile": { "district": "Patna", "current_class": "BCECE" }
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    let profile = user.profile.unwrap();
    assert_eq!(profile.district.as_deref(), Some("Patna"));
    assert_eq!(profile.current_class.as_deref(), Some("BCECE"));
    assert_eq!(profile.gender, None);
}

#[test]
fn register_request_omits_missing_email() {
    let req = RegisterRequest {
        full_name: "Asha".to_owned(),
        mobile_number: "9876543210".to_owned(),
        email: None,
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert!(value.get("email").is_none());
    assert_eq!(value["confirm_password"], "secret1");
}

#[test]
fn profile_update_serializes_only_set_fields() {
    let update = ProfileUpdate { pincode: Some("800001".to_owned()), ..ProfileUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "pincode": "800001" }));
    assert!(!update.is_empty());
    assert!(ProfileUpdate::default().is_empty());
}

#[test]
fn auth_payload_reads_backend_shape() {
    let raw = r#"{
        "message": "Login successful",
        "user": {"id":1,"full_name":"A","mobile_number":"1","email":"","date_joined":""},
        "tokens": {"access":"a","refresh":"r"}
    }"#;
    let payload: AuthPayload = serde_json::from_str(raw).unwrap();
    assert_eq!(payload.tokens, SessionTokens::new("a", "r"));
    assert_eq!(payload.message, "Login successful");
}
