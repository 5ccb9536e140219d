//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and classifies auth API calls, `transport` moves bytes over
//! `fetch`, and `types` defines the shared wire schema.

pub mod api;
pub mod transport;
pub mod types;
