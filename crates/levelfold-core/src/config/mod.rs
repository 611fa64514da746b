//! Workspace configuration, loaded from TOML.

pub mod defaults;
mod export_config;
mod factor_config;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use export_config::ExportConfig;
pub use factor_config::FactorConfig;
pub use observability_config::ObservabilityConfig;

use crate::constants::MAX_INDENT;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelfoldConfig {
    pub factor: FactorConfig,
    pub export: ExportConfig,
    pub observability: ObservabilityConfig,
}

impl LevelfoldConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<inline>")
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&contents, &display)
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factor.min_levels == 0 {
            return Err(ConfigError::InvalidValue {
                field: "factor.min_levels".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.export.indent > MAX_INDENT {
            return Err(ConfigError::InvalidValue {
                field: "export.indent".to_string(),
                message: format!("{} exceeds the maximum of {MAX_INDENT}", self.export.indent),
            });
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!("unknown level {:?}", self.observability.log_level),
            });
        }
        Ok(())
    }
}
