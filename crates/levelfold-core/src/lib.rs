//! # levelfold-core
//!
//! Foundation crate for the levelfold workspace.
//! Defines value helpers (kinds, paths, numeric-aware equality), errors,
//! config, constants, and tracing setup. Every other crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use config::LevelfoldConfig;
pub use errors::{FactorError, LevelfoldError, LevelfoldResult};
pub use value::{ValueKind, ValuePath};
