//! Helpers over the generic tree type.
//!
//! The tree itself is `serde_json::Value`, built with `preserve_order` so
//! mappings keep insertion order. This module adds what the factoring engine
//! needs on top: value kinds, diagnostic paths, and numeric-aware equality.

mod equality;
mod kind;
mod path;

pub use equality::{numbers_equal, values_equal};
pub use kind::ValueKind;
pub use path::{PathSegment, ValuePath};
