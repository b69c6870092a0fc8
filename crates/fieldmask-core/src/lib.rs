//! Field-name based masking for JSON payloads
//!
//! This crate contains:
//! - The field name set (baseline `userName`/`userEmail` plus caller extras)
//! - The value obscurer (segment-wise partial masking of strings)
//! - The traversal masker (deep copy with masked values, JSON-in-string aware)

pub mod error;
pub mod fields;
pub mod masker;
pub mod obscure;

pub use error::{Error, Result};
pub use fields::{BASELINE_FIELDS, FieldSet};
pub use masker::{MaskInfo, Masker, mask};
pub use obscure::{obscure, obscure_segment, obscure_str};
