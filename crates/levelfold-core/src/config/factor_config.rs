use serde::{Deserialize, Serialize};

use super::defaults;

/// Factoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorConfig {
    /// Factor independent groups on the rayon pool.
    pub parallel: bool,
    /// Groups with fewer levels are left unfactored (empty static).
    pub min_levels: usize,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            min_levels: defaults::DEFAULT_MIN_LEVELS,
        }
    }
}
