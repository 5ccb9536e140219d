//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical gating: wait out hydration, then either
//! render or bounce the visitor to the application root.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Where unauthenticated visitors are sent.
pub const UNAUTH_REDIRECT_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration still running: render a placeholder, do not redirect.
    Loading,
    /// Render the protected subtree.
    Allow,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
}

/// Decide once per render pass from the current auth snapshot.
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Loading
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(UNAUTH_REDIRECT_PATH)
    }
}
