//! End-to-end session flows over in-memory storage and a scripted backend.
//!
//! Each scenario drives the public API the pages use: the auth session, the
//! token store, the API client and the route-guard decision.

use std::cell::Cell;

use client::config::AppConfig;
use client::net::api::ApiClient;
use client::net::transport::{HttpReply, HttpRequest, Transport, TransportError};
use client::net::types::{LoginRequest, SessionTokens, User};
use client::pages::login::LOGIN_FALLBACK;
use client::state::auth::{AuthSession, SessionPhase};
use client::state::token_store::TokenStore;
use client::util::auth::{GuardDecision, guard_decision};
use client::util::navigation::RecordingNavigator;
use client::util::storage::MemoryStorage;
use futures::executor::block_on;

/// Backend that always answers with one canned reply and counts calls.
struct ScriptedBackend {
    status: u16,
    body: &'static str,
    calls: Cell<usize>,
}

impl ScriptedBackend {
    fn new(status: u16, body: &'static str) -> Self {
        Self { status, body, calls: Cell::new(0) }
    }
}

impl Transport for &ScriptedBackend {
    async fn send(&self, _request: HttpRequest) -> Result<HttpReply, TransportError> {
        self.calls.set(self.calls.get() + 1);
        Ok(HttpReply { status: self.status, body: self.body.to_owned() })
    }
}

fn student() -> User {
    User {
        id: 1,
        full_name: "Asha Kumari".to_owned(),
        mobile_number: "9876543210".to_owned(),
        email: String::new(),
        date_joined: "2024-09-01T10:00:00Z".to_owned(),
        profile: None,
    }
}

fn fresh_session(storage: &MemoryStorage) -> (AuthSession<MemoryStorage, RecordingNavigator>, RecordingNavigator) {
    let navigator = RecordingNavigator::default();
    let mut session = AuthSession::new(TokenStore::new(storage.clone()), navigator.clone());
    assert_eq!(guard_decision(&session.state()), GuardDecision::Loading);
    session.initialize();
    (session, navigator)
}

#[test]
fn scenario_a_empty_storage_redirects_protected_route() {
    let storage = MemoryStorage::new();
    let (session, navigator) = fresh_session(&storage);

    assert_eq!(session.phase(), SessionPhase::Anonymous);
    assert_eq!(guard_decision(&session.state()), GuardDecision::Redirect("/"));
    assert!(navigator.visits().is_empty());
}

#[test]
fn scenario_b_login_unlocks_protected_route() {
    let storage = MemoryStorage::new();
    let (mut session, _) = fresh_session(&storage);

    session.login(student(), SessionTokens::new("a", "r")).unwrap();

    let store = TokenStore::new(storage.clone());
    assert_eq!(store.get_tokens().unwrap(), Some(SessionTokens::new("a", "r")));
    assert_eq!(guard_decision(&session.state()), GuardDecision::Allow);

    // A reload hydrates the same user.
    let (reloaded, _) = fresh_session(&storage);
    assert_eq!(reloaded.user(), Some(&student()));
    assert_eq!(guard_decision(&reloaded.state()), GuardDecision::Allow);
}

#[test]
fn scenario_c_rejected_login_surfaces_message_and_stores_nothing() {
    let storage = MemoryStorage::new();
    let (mut session, _) = fresh_session(&storage);
    let backend = ScriptedBackend::new(401, r#"{"non_field_errors":["Invalid credentials"]}"#);
    let api = ApiClient::new(&AppConfig::default(), &backend, TokenStore::new(storage.clone()));

    let response = block_on(api.login_user(&LoginRequest {
        mobile_number: "0000000000".to_owned(),
        password: "bad".to_owned(),
    }));
    assert_eq!(response.status, 401);
    let message = session.apply_auth_response(response, LOGIN_FALLBACK).unwrap_err();

    assert_eq!(message, "Error: Invalid credentials");
    assert_eq!(backend.calls.get(), 1);
    assert!(storage.is_empty());
    assert_eq!(guard_decision(&session.state()), GuardDecision::Redirect("/"));
}

#[test]
fn scenario_d_logout_clears_store_and_navigates_home() {
    let storage = MemoryStorage::new();
    let (mut session, navigator) = fresh_session(&storage);
    session.login(student(), SessionTokens::new("a", "r")).unwrap();

    session.logout().unwrap();

    assert!(!TokenStore::new(storage.clone()).is_authenticated().unwrap());
    assert_eq!(navigator.visits(), vec!["/".to_owned()]);
    assert_eq!(guard_decision(&session.state()), GuardDecision::Redirect("/"));
}

#[test]
fn corrupt_cached_user_is_discarded_on_startup() {
    let storage = MemoryStorage::new();
    {
        use client::util::storage::KeyValueStorage;
        storage.set_item("access_token", "a").unwrap();
        storage.set_item("refresh_token", "r").unwrap();
        storage.set_item("user", "{\"id\":").unwrap();
    }

    let (session, _) = fresh_session(&storage);

    assert_eq!(session.phase(), SessionPhase::Anonymous);
    assert!(storage.is_empty());
}

#[test]
fn successful_registration_reply_logs_in() {
    let storage = MemoryStorage::new();
    let (mut session, _) = fresh_session(&storage);
    let backend = ScriptedBackend::new(
        201,
        r#"{"message":"Registered","user":{"id":1,"full_name":"Asha Kumari","mobile_number":"9876543210","date_joined":"2024-09-01T10:00:00Z"},"tokens":{"access":"a","refresh":"r"}}"#,
    );
    let api = ApiClient::new(&AppConfig::default(), &backend, TokenStore::new(storage.clone()));

    let response = block_on(api.register_user(&client::net::types::RegisterRequest {
        full_name: "Asha Kumari".to_owned(),
        mobile_number: "9876543210".to_owned(),
        email: None,
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }));

    assert_eq!(session.apply_auth_response(response, "fallback"), Ok(student()));
    assert_eq!(guard_decision(&session.state()), GuardDecision::Allow);
    assert!(TokenStore::new(storage).is_authenticated().unwrap());
}
