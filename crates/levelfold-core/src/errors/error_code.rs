//! Stable error codes for callers that report failures by category.

/// Every error enum implements this to expose a structured code string.
pub trait LevelfoldErrorCode {
    /// Returns the error code (e.g., "FACTOR_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const FACTOR_ERROR: &str = "FACTOR_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const RECORD_ERROR: &str = "RECORD_ERROR";
