//! # levelfold-gems
//!
//! Gem exporter: typed per-level rows → generic per-level trees → factored
//! gem documents with `"static"` and `"per_level"` sections.
//!
//! Reading the game's tables and resolving stat translations happen upstream;
//! rows arrive already resolved, translations through [`StatTranslator`].

pub mod convert;
pub mod cooldown;
pub mod exporter;
pub mod rows;
pub mod translate;

pub use convert::{convert_gem, convert_level};
pub use cooldown::CooldownBypassType;
pub use exporter::{convert_all, GemExport};
pub use rows::{GemLevelRow, GemRecord, QualityStatRow, QUALITY_SETS};
pub use translate::{NoTranslations, StatTranslator};
