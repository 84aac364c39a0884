//! Domain layer containing the engine's business logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (value objects, IDs, enums, errors)
//! - `impact` - Impact vectors, delivery modulation and effect synthesis
//! - `decision` - Decision analysis, scoring, scheduling and lifecycle
//! - `normalize` - Tolerant conversion of provider payloads into typed records

pub mod decision;
pub mod foundation;
pub mod impact;
pub mod normalize;
