//! Error taxonomy: one enum per subsystem, aggregated by `LevelfoldError`.

mod config_error;
pub mod error_code;
mod export_error;
mod factor_error;
mod record_error;

pub use config_error::ConfigError;
pub use error_code::LevelfoldErrorCode;
pub use export_error::ExportError;
pub use factor_error::FactorError;
pub use record_error::RecordError;

/// Result alias used across the workspace.
pub type LevelfoldResult<T> = Result<T, LevelfoldError>;

/// Top-level error wrapping every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum LevelfoldError {
    #[error(transparent)]
    Factor(#[from] FactorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl LevelfoldErrorCode for LevelfoldError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Factor(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Record(e) => e.error_code(),
        }
    }
}
