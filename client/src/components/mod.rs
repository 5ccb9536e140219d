//! Shared layout and dialog components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session through `use_auth` and never touch the token
//! store directly.

pub mod auth_dialog;
pub mod footer;
pub mod navbar;
pub mod protected_route;
pub mod sidebar;
