//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and submission flow. Session changes go
//! through the auth context; layout comes from `components`.

pub mod catalog;
pub mod forgot;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod study;
