//! FactorEngine: factors whole groups of ascending levels.

use std::collections::BTreeMap;

use levelfold_core::config::FactorConfig;
use levelfold_core::errors::FactorError;
use levelfold_core::factor_span;
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use crate::factoring;

/// A group after factoring: shared data plus compacted levels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactoredGroup {
    /// Data identical across every level; `None` when nothing is shared.
    pub static_data: Option<Value>,
    /// Every level was identical to the first.
    pub fully_redundant: bool,
    /// Compacted per-level data, keyed by ascending level.
    pub levels: BTreeMap<u32, Value>,
}

impl FactoredGroup {
    fn unfactored(levels: BTreeMap<u32, Value>) -> Self {
        Self {
            static_data: None,
            fully_redundant: false,
            levels,
        }
    }
}

/// Drives the factoring of level groups.
///
/// Each group owns its levels for the duration of the call, so independent
/// groups can be factored on the rayon pool when `parallel` is set.
#[derive(Debug, Clone, Default)]
pub struct FactorEngine {
    config: FactorConfig,
}

impl FactorEngine {
    pub fn new(config: FactorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FactorConfig {
        &self.config
    }

    /// Factor one group. The lowest level is the representative.
    pub fn factor_group(
        &self,
        group: &str,
        mut levels: BTreeMap<u32, Value>,
    ) -> Result<FactoredGroup, FactorError> {
        let span = factor_span!(group, levels.len());
        let _enter = span.enter();

        if levels.is_empty() || levels.len() < self.config.min_levels {
            debug!(levels = levels.len(), "too few levels, left unfactored");
            return Ok(FactoredGroup::unfactored(levels));
        }

        let representative = match levels.values().next() {
            Some(first) => first.clone(),
            None => return Ok(FactoredGroup::unfactored(levels)),
        };

        let mut variants: Vec<&mut Value> = levels.values_mut().collect();
        let outcome = factoring::factor(&representative, &mut variants).map_err(|e| {
            warn!(error = %e, "factoring aborted");
            FactorError::InGroup {
                group: group.to_string(),
                source: Box::new(e),
            }
        })?;

        debug!(
            shared = outcome.static_value.is_some(),
            fully_redundant = outcome.fully_redundant,
            "group factored"
        );

        Ok(FactoredGroup {
            static_data: outcome.static_value,
            fully_redundant: outcome.fully_redundant,
            levels,
        })
    }

    /// Factor many groups. The first failing group aborts the batch.
    pub fn factor_groups(
        &self,
        groups: BTreeMap<String, BTreeMap<u32, Value>>,
    ) -> Result<BTreeMap<String, FactoredGroup>, FactorError> {
        if self.config.parallel {
            groups
                .into_par_iter()
                .map(|(id, levels)| self.factor_group(&id, levels).map(|g| (id, g)))
                .collect()
        } else {
            groups
                .into_iter()
                .map(|(id, levels)| self.factor_group(&id, levels).map(|g| (id, g)))
                .collect()
        }
    }
}
