//! One module per route: landing, sign in/up, connect, chat, and stats.
//!
//! ARCHITECTURE
//! ============
//! Pages behind the session check wrap their body in `AuthGate`, which mounts
//! it once the check resolves. API calls and timers start from here.

pub mod chat;
pub mod connect;
pub mod landing;
pub mod sign_in;
pub mod sign_up;
pub mod stats;
