//! shepherd-audit
//!
//! Structured audit events for API actions.

pub mod events;
