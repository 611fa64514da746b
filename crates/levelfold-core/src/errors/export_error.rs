use super::error_code::{self, LevelfoldErrorCode};

/// Document writing errors.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("i/o error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("serialization failed: {message}")]
    Serialize { message: String },

    #[error("input could not be read as {expected}: {message}")]
    MalformedInput { expected: String, message: String },
}

impl LevelfoldErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
