use super::*;

fn filled() -> RegisterFields {
    RegisterFields {
        full_name: " Asha Kumari ".to_owned(),
        mobile_number: "9876543210".to_owned(),
        email: String::new(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

#[test]
fn terms_are_checked_first() {
    let mut fields = filled();
    fields.confirm_password = "other".to_owned();
    assert_eq!(validate_register_input(&fields, false), Err(TERMS_NOT_ACCEPTED));
}

#[test]
fn mismatched_passwords_rejected() {
    let mut fields = filled();
    fields.confirm_password = "secret2".to_owned();
    assert_eq!(validate_register_input(&fields, true), Err(PASSWORD_MISMATCH));
}

#[test]
fn missing_required_fields_rejected() {
    let mut fields = filled();
    fields.full_name = "  ".to_owned();
    assert_eq!(validate_register_input(&fields, true), Err(MISSING_REQUIRED));

    let mut fields = filled();
    fields.mobile_number = String::new();
    assert_eq!(validate_register_input(&fields, true), Err(MISSING_REQUIRED));

    let mut fields = filled();
    fields.password = String::new();
    fields.confirm_password = String::new();
    assert_eq!(validate_register_input(&fields, true), Err(MISSING_REQUIRED));
}

#[test]
fn empty_email_is_omitted() {
    let request = validate_register_input(&filled(), true).unwrap();
    assert_eq!(request.full_name, "Asha Kumari");
    assert_eq!(request.email, None);
    let body = serde_json::to_value(&request).unwrap();
    assert!(body.get("email").is_none());
}

#[test]
fn provided_email_is_trimmed_and_sent() {
    let mut fields = filled();
    fields.email = " asha@example.com ".to_owned();
    let request = validate_register_input(&fields, true).unwrap();
    assert_eq!(request.email.as_deref(), Some("asha@example.com"));
    assert_eq!(request.confirm_password, "secret1");
}
