//! Networking modules for the backend HTTP API and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls, `provider` wraps the external identity
//! provider's session and change notifications, and `types` defines the wire
//! schema shared by both.

pub mod api;
pub mod provider;
pub mod types;
