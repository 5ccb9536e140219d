use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: 1,
        full_name: "Alice".to_owned(),
        mobile_number: "9999999999".to_owned(),
        email: String::new(),
        date_joined: String::new(),
        profile: None,
    }
}

#[test]
fn loading_state_shows_placeholder_without_redirect() {
    let state = AuthState { user: None, loading: true };
    assert_eq!(guard_decision(&state), GuardDecision::Loading);
}

#[test]
fn loading_wins_even_with_a_user() {
    let state = AuthState { user: Some(user()), loading: true };
    assert_eq!(guard_decision(&state), GuardDecision::Loading);
}

#[test]
fn anonymous_after_loading_redirects_to_root() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(guard_decision(&state), GuardDecision::Redirect("/"));
}

#[test]
fn authenticated_user_is_allowed() {
    let state = AuthState { user: Some(user()), loading: false };
    assert_eq!(guard_decision(&state), GuardDecision::Allow);
}
