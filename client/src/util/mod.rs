//! Browser glue and view math used by the pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage`, `auth`, and `frame_loop` wrap localStorage, the session check,
//! and animation callbacks; `auth_form` and `stats_view` are pure helpers with
//! native tests.

pub mod auth;
pub mod auth_form;
pub mod frame_loop;
pub mod stats_view;
pub mod storage;
