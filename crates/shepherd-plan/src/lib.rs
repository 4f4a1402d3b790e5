//! shepherd-plan
//!
//! The care-plan engine. Pure domain logic — no AWS dependency.
//! Turns a completed assessment into categorized recommendations with a
//! priority level, and scores the provider directory against a stored
//! assessment to produce ranked, explained matches.
//!
//! Both entry points are total, deterministic functions: a field an
//! assessment variant does not carry means the corresponding rule does
//! not fire, never an error.

pub mod generator;
pub mod scorer;
