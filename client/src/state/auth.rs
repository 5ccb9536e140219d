//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthSession`] is the single owner of "who is logged in": it hydrates
//! from the [`TokenStore`] once at startup and is the only writer of the
//! token keys. [`AuthContext`] wraps the browser session in a signal and is
//! provided once at the application root; the route guard and user-aware
//! components read it through [`use_auth`].
//!
//! The session cycles `Initializing -> Authenticated | Anonymous`, then
//! between `Authenticated` and `Anonymous` for the rest of the process.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::token_store::{TokenStore, TokenStoreError};
use crate::net::api::ApiResponse;
use crate::net::types::{AuthPayload, SessionTokens, User};
use crate::util::navigation::{BrowserNavigator, Navigator};
use crate::util::storage::{BrowserStorage, KeyValueStorage, StorageError};

/// Where a hard logout lands.
pub const LOGOUT_REDIRECT_PATH: &str = "/";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Before the token store has been consulted.
    #[default]
    Initializing,
    Authenticated,
    Anonymous,
}

/// Snapshot of the session as seen by consumers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True only until startup hydration completes.
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] TokenStoreError),
    #[error("no active session")]
    NoSession,
    #[error("auth context has been disposed")]
    Disposed,
}

impl From<StorageError> for SessionError {
    fn from(e: StorageError) -> Self {
        Self::Store(TokenStoreError::Storage(e))
    }
}

/// Session lifecycle over an injected store and navigator.
#[derive(Clone, Debug)]
pub struct AuthSession<S, N> {
    store: TokenStore<S>,
    navigator: N,
    user: Option<User>,
    phase: SessionPhase,
}

impl<S: KeyValueStorage, N: Navigator> AuthSession<S, N> {
    pub fn new(store: TokenStore<S>, navigator: N) -> Self {
        Self { store, navigator, user: None, phase: SessionPhase::Initializing }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Initializing
    }

    pub fn state(&self) -> AuthState {
        AuthState { user: self.user.clone(), loading: self.is_loading() }
    }

    pub fn token_store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// One-time startup hydration. Later calls are no-ops.
    ///
    /// Always leaves `Initializing`. A token pair without a decodable user, or
    /// a user without tokens, is cleared and ends `Anonymous`.
    pub fn initialize(&mut self) {
        if self.phase != SessionPhase::Initializing {
            return;
        }
        self.user = match self.restore() {
            Ok(user) => user,
            Err(e) => {
                log::warn!("discarding persisted session: {e}");
                if let Err(clear_err) = self.store.clear_auth_data() {
                    log::error!("failed to clear persisted session: {clear_err}");
                }
                None
            }
        };
        self.phase = if self.user.is_some() { SessionPhase::Authenticated } else { SessionPhase::Anonymous };
        log::debug!("session hydrated: {:?}", self.phase);
    }

    fn restore(&self) -> Result<Option<User>, TokenStoreError> {
        let tokens = self.store.get_tokens()?;
        let user = self.store.get_user()?;
        match (tokens, user) {
            (Some(_), Some(user)) => Ok(Some(user)),
            (None, None) => Ok(None),
            (Some(_), None) | (None, Some(_)) => {
                log::warn!("persisted session is incomplete; clearing it");
                self.store.clear_auth_data()?;
                Ok(None)
            }
        }
    }

    /// Replace any existing session with `user` and `tokens`.
    ///
    /// # Errors
    ///
    /// Returns the persistence failure; the in-memory session is unchanged in
    /// that case.
    pub fn login(&mut self, user: User, tokens: SessionTokens) -> Result<(), SessionError> {
        self.store.store_auth_data(&tokens, &user)?;
        self.user = Some(user);
        self.phase = SessionPhase::Authenticated;
        Ok(())
    }

    /// Log in from a login/registration response.
    ///
    /// Nothing is persisted unless the response carries a success payload.
    ///
    /// # Errors
    ///
    /// Returns the user-facing failure message.
    pub fn apply_auth_response(&mut self, response: ApiResponse<AuthPayload>, fallback: &str) -> Result<User, String> {
        let AuthPayload { user, tokens, .. } = response.into_result(fallback)?;
        self.login(user.clone(), tokens).map_err(|e| format!("Could not save your session: {e}"))?;
        Ok(user)
    }

    /// Clear the session and hard-redirect to the application root.
    ///
    /// The in-memory session is cleared and the redirect happens even when
    /// the store could not be cleared.
    ///
    /// # Errors
    ///
    /// Returns the storage failure from clearing, after navigating.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        let cleared = self.store.clear_auth_data();
        self.user = None;
        self.phase = SessionPhase::Anonymous;
        self.navigator.hard_redirect(LOGOUT_REDIRECT_PATH);
        cleared.map_err(SessionError::from)
    }

    /// Replace the cached user (profile edits) and persist it next to the
    /// existing tokens.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSession`] when no tokens are stored, or the
    /// persistence failure. State is unchanged on error.
    pub fn set_user(&mut self, user: User) -> Result<(), SessionError> {
        if self.store.get_tokens()?.is_none() {
            return Err(SessionError::NoSession);
        }
        self.store.store_user(&user)?;
        self.user = Some(user);
        self.phase = SessionPhase::Authenticated;
        Ok(())
    }
}

/// Session type used in the browser.
pub type BrowserSession = AuthSession<BrowserStorage, BrowserNavigator>;

/// Reactive handle to the application's session, provided at the root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<BrowserSession>,
}

impl AuthContext {
    fn new() -> Self {
        let session = AuthSession::new(TokenStore::new(BrowserStorage), BrowserNavigator);
        Self { session: RwSignal::new(session) }
    }

    pub fn state(&self) -> AuthState {
        self.session.with(AuthSession::state)
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(AuthSession::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(AuthSession::is_loading)
    }

    /// # Errors
    ///
    /// See [`AuthSession::login`].
    pub fn login(&self, user: User, tokens: SessionTokens) -> Result<(), SessionError> {
        self.session.try_update(|s| s.login(user, tokens)).unwrap_or(Err(SessionError::Disposed))
    }

    /// # Errors
    ///
    /// See [`AuthSession::apply_auth_response`].
    pub fn apply_auth_response(&self, response: ApiResponse<AuthPayload>, fallback: &str) -> Result<User, String> {
        self.session
            .try_update(|s| s.apply_auth_response(response, fallback))
            .unwrap_or_else(|| Err(SessionError::Disposed.to_string()))
    }

    pub fn logout(&self) {
        if let Some(Err(e)) = self.session.try_update(AuthSession::logout) {
            log::error!("logout could not clear stored session: {e}");
        }
    }

    /// # Errors
    ///
    /// See [`AuthSession::set_user`].
    pub fn set_user(&self, user: User) -> Result<(), SessionError> {
        self.session.try_update(|s| s.set_user(user)).unwrap_or(Err(SessionError::Disposed))
    }

    fn initialize(&self) {
        self.session.update(AuthSession::initialize);
    }
}

/// Create the session once, provide it to the tree, and hydrate it from
/// browser storage after mount.
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::new();
    provide_context(auth);
    // Effects only run in the browser, so SSR renders the loading state.
    Effect::new(move || auth.initialize());
    auth
}

/// Read the session context.
///
/// # Panics
///
/// Panics when called outside the subtree where [`provide_auth`] ran.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| panic!("use_auth must be used within the auth provider"))
}
