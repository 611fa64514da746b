//! Group documents: metadata plus `"per_level"` and `"static"`.

use levelfold_core::constants::{PER_LEVEL_KEY, STATIC_KEY};
use serde_json::{Map, Value};

use crate::engine::FactoredGroup;

/// A factored group embedded in its surrounding record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupDocument {
    /// Non-level fields of the record, kept in insertion order.
    pub metadata: Map<String, Value>,
    pub group: FactoredGroup,
}

impl GroupDocument {
    pub fn new(metadata: Map<String, Value>, group: FactoredGroup) -> Self {
        Self { metadata, group }
    }

    /// Shared data, `{}` when nothing was shared.
    pub fn static_value(&self) -> Value {
        self.group
            .static_data
            .clone()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Level index → compacted data, with levels rendered as string keys.
    pub fn per_level_value(&self) -> Value {
        Value::Object(
            self.group
                .levels
                .iter()
                .map(|(level, data)| (level.to_string(), data.clone()))
                .collect(),
        )
    }

    /// Full document: metadata, then `"per_level"`, then `"static"`.
    pub fn to_value(&self) -> Value {
        let mut doc = self.metadata.clone();
        doc.insert(PER_LEVEL_KEY.to_string(), self.per_level_value());
        doc.insert(STATIC_KEY.to_string(), self.static_value());
        Value::Object(doc)
    }

    /// Document without `"per_level"`.
    pub fn minimal(&self) -> Value {
        let mut doc = self.metadata.clone();
        doc.insert(STATIC_KEY.to_string(), self.static_value());
        Value::Object(doc)
    }
}
