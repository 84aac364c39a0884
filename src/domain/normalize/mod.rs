//! Normalize module - typed records out of provider output.
//!
//! Provider text is first reduced to a JSON value by [`extract_json`], then
//! read field by field through [`Fields`]. Nothing here fails on malformed
//! content; repairs are reported as [`ValidationDefault`] events.

mod fields;
mod normalizer;
mod payload;

pub use fields::{DefaultLog, DefaultReason, Fields, ValidationDefault};
pub use normalizer::{ContentNormalizer, Normalized};
pub use payload::{extract_json, PayloadError};
