use super::*;

fn student() -> User {
    User {
        id: 7,
        full_name: "Asha Kumari".to_owned(),
        mobile_number: "9876543210".to_owned(),
        email: "asha@example.com".to_owned(),
        date_joined: String::new(),
        profile: Some(UserProfile {
            village: Some("Rampur".to_owned()),
            current_class: Some("Class 11".to_owned()),
            ..UserProfile::default()
        }),
    }
}

#[test]
fn form_starts_from_user_record() {
    let form = ProfileForm::from_user(&student());
    assert_eq!(form.full_name, "Asha Kumari");
    assert_eq!(form.village, "Rampur");
    assert_eq!(form.get(ProfileField::CurrentClass), "Class 11");
    assert_eq!(form.gender, "");
}

#[test]
fn unchanged_form_produces_empty_update() {
    let user = student();
    let update = profile_changes(&user, &ProfileForm::from_user(&user));
    assert!(update.is_empty());
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({}));
}

#[test]
fn stored_whitespace_is_not_an_edit() {
    let user = User { full_name: "Asha ".to_owned(), ..student() };
    let update = profile_changes(&user, &ProfileForm::from_user(&user));
    assert!(update.is_empty());
}

#[test]
fn only_changed_fields_are_sent() {
    let user = student();
    let mut form = ProfileForm::from_user(&user);
    form.set(ProfileField::District, "Patna".to_owned());
    form.set(ProfileField::FullName, " Asha Kumari ".to_owned());
    form.set(ProfileField::Gender, "Female".to_owned());

    let update = profile_changes(&user, &form);

    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        serde_json::json!({ "district": "Patna", "gender": "Female" })
    );
}

#[test]
fn cleared_field_is_sent_as_empty() {
    let user = student();
    let mut form = ProfileForm::from_user(&user);
    form.set(ProfileField::Village, String::new());
    assert_eq!(profile_changes(&user, &form).village.as_deref(), Some(""));
}

#[test]
fn user_without_profile_has_blank_form() {
    let mut user = student();
    user.profile = None;
    let form = ProfileForm::from_user(&user);
    assert_eq!(form.village, "");
    assert_eq!(form.student_id, "");
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("asha kumari devi"), "AK");
    assert_eq!(initials("Ravi"), "R");
    assert_eq!(initials("  "), "");
}
