//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `token_store` owns persistence of the session keys; `auth` owns the
//! in-memory session built on top of it. Pages depend on `auth` only.

pub mod auth;
pub mod token_store;
