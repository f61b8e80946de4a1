//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`auth`, `chat`, `connect`, `credits`) plus the
//! persisted `session`, so pages depend on small focused models that are
//! testable without a browser.

pub mod auth;
pub mod chat;
pub mod connect;
pub mod credits;
pub mod session;
