//! Leader Impact - impact quantification and effects engine
//!
//! Turns leader speeches, briefings and decisions into bounded, typed
//! simulation effects. Generated content is normalized into valid domain
//! records, scored, modulated by delivery mode and knobs, and emitted as
//! effects through an idempotent ledger. Decision support is generated,
//! scheduled and prioritized with deterministic fallbacks for every
//! provider call.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
