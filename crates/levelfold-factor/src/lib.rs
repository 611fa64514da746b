//! # levelfold-factor
//!
//! Factors the substructure shared by every level of a group into a single
//! static document and compacts each level down to what is specific to it.
//!
//! - `factoring`: the recursive algorithm (dispatch, mapping, sequence, scalar)
//! - `engine`: per-group driver over ascending level maps, optional rayon fan-out
//! - `overlay`: rebuilds the full per-level view from static + compacted level
//! - `document` / `writer`: `"static"` / `"per_level"` documents and JSON output

pub mod document;
pub mod engine;
pub mod factoring;
pub mod overlay;
pub mod writer;

pub use document::GroupDocument;
pub use engine::{FactorEngine, FactoredGroup};
pub use factoring::{factor, factor_slice, Factored};
pub use overlay::{overlay, reconstruct_levels};
pub use writer::JsonWriter;
