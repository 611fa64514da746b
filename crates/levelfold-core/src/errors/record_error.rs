use super::error_code::{self, LevelfoldErrorCode};

/// Errors raised while mapping typed gem rows into per-level trees.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("gem {gem} has more than one row for level {level}")]
    DuplicateLevel { gem: String, level: u32 },

    #[error("unknown cooldown bypass type {value}")]
    UnknownCooldownBypass { value: u32 },

    #[error("gem {gem} level {level}: {field} has {keys} ids but {values} values")]
    MismatchedColumns {
        gem: String,
        level: u32,
        field: String,
        keys: usize,
        values: usize,
    },

    #[error("unknown quality set {set} on stat {stat}")]
    UnknownQualitySet { set: u32, stat: String },
}

impl LevelfoldErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        error_code::RECORD_ERROR
    }
}
