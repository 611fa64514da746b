//! Batch conversion of every gem record.

use std::collections::BTreeMap;

use levelfold_core::errors::LevelfoldResult;
use levelfold_factor::{FactorEngine, GroupDocument};
use rayon::prelude::*;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::convert::convert_gem;
use crate::rows::GemRecord;

/// Output of a full gem export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GemExport {
    /// Full documents keyed by gem id.
    pub documents: BTreeMap<String, GroupDocument>,
    /// Documents without `"per_level"`, in input order.
    pub minimal: Vec<Value>,
}

impl GemExport {
    /// `{ gem_id: document, ... }`.
    pub fn full_value(&self) -> Value {
        Value::Object(
            self.documents
                .iter()
                .map(|(id, doc)| (id.clone(), doc.to_value()))
                .collect::<Map<_, _>>(),
        )
    }

    pub fn minimal_value(&self) -> Value {
        Value::Array(self.minimal.clone())
    }
}

/// Convert and factor every record. A later record with an id already seen
/// replaces the earlier document.
pub fn convert_all(records: &[GemRecord], engine: &FactorEngine) -> LevelfoldResult<GemExport> {
    let converted: Vec<GroupDocument> = if engine.config().parallel {
        records
            .par_iter()
            .map(|record| convert_gem(record, engine, &record.translations))
            .collect::<LevelfoldResult<_>>()?
    } else {
        records
            .iter()
            .map(|record| convert_gem(record, engine, &record.translations))
            .collect::<LevelfoldResult<_>>()?
    };

    let mut export = GemExport::default();
    for (record, doc) in records.iter().zip(converted) {
        export.minimal.push(doc.minimal());
        if export.documents.insert(record.id.clone(), doc).is_some() {
            warn!(gem = %record.id, "duplicate gem id, keeping the later record");
        }
    }

    info!(
        gems = export.documents.len(),
        minimal = export.minimal.len(),
        "gem export complete"
    );
    Ok(export)
}
