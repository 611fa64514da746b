use crate::value::{ValueKind, ValuePath};

use super::error_code::{self, LevelfoldErrorCode};

/// Factoring engine errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactorError {
    /// A variant's node kind diverges from the representative's at `path`.
    /// Aborts the whole group.
    #[error("structure mismatch at {path}: level #{variant} holds a {found}, expected {expected}")]
    StructureMismatch {
        path: ValuePath,
        variant: usize,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("in group {group}: {source}")]
    InGroup {
        group: String,
        source: Box<FactorError>,
    },
}

impl FactorError {
    /// The innermost error, with any group context stripped.
    pub fn root_cause(&self) -> &FactorError {
        match self {
            Self::InGroup { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl LevelfoldErrorCode for FactorError {
    fn error_code(&self) -> &'static str {
        error_code::FACTOR_ERROR
    }
}
