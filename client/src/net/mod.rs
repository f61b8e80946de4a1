//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the fetches and classifies responses; `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
