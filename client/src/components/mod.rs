//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (the credential card, the session-check
//! gate, report sections) and receive everything they need as props.

pub mod auth_form;
pub mod auth_gate;
pub mod credits;
