//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and classifies failures; `types` defines the
//! JSON request/response schema shared with the server.

pub mod api;
pub mod types;
