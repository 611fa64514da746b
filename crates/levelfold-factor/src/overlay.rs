//! Rebuild the full per-level view by laying the static document underneath
//! a compacted level.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Overlay `variant` on top of `static_value`.
///
/// Mappings merge key by key (static keys first, then keys only the level
/// has). Equal-length sequences merge slot by slot, a `Null` slot taking
/// the static value. Anywhere else the level's own value wins, except a
/// `Null` level value, which yields to static.
pub fn overlay(static_value: &Value, variant: &Value) -> Value {
    match (static_value, variant) {
        (Value::Object(s), Value::Object(v)) => Value::Object(overlay_mappings(s, v)),
        (Value::Array(s), Value::Array(v)) if s.len() == v.len() => Value::Array(
            s.iter()
                .zip(v)
                .map(|(s, v)| overlay(s, v))
                .collect(),
        ),
        (s, Value::Null) => s.clone(),
        (_, v) => v.clone(),
    }
}

fn overlay_mappings(static_map: &Map<String, Value>, variant: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::with_capacity(static_map.len() + variant.len());
    for (key, s) in static_map {
        let value = match variant.get(key) {
            Some(v) => overlay(s, v),
            None => s.clone(),
        };
        merged.insert(key.clone(), value);
    }
    for (key, v) in variant {
        if !static_map.contains_key(key) {
            merged.insert(key.clone(), v.clone());
        }
    }
    merged
}

/// Apply [`overlay`] to every level of a factored group.
pub fn reconstruct_levels(
    static_value: Option<&Value>,
    levels: &BTreeMap<u32, Value>,
) -> BTreeMap<u32, Value> {
    levels
        .iter()
        .map(|(&level, data)| {
            let full = match static_value {
                Some(s) => overlay(s, data),
                None => data.clone(),
            };
            (level, full)
        })
        .collect()
}
