use levelfold_core::errors::FactorError;
use levelfold_core::value::ValuePath;
use serde_json::{Map, Value};
use tracing::trace;

use super::{dispatch, Factored};

/// Factor object-shaped subtrees key by key, in representative order.
///
/// A key missing from any variant is incomparable: it stays untouched
/// everywhere and the mapping cannot be fully redundant. Keys held by a
/// variant but not by the representative block full redundancy the same way.
pub(super) fn factor_mapping(
    representative: &Map<String, Value>,
    variants: &mut [&mut Map<String, Value>],
    path: &ValuePath,
) -> Result<Factored, FactorError> {
    let mut static_map: Option<Map<String, Value>> = None;
    let mut fully_redundant = true;
    let mut cleared_keys: Vec<&str> = Vec::new();

    for (key, rep_child) in representative {
        if !variants.iter().all(|v| v.contains_key(key)) {
            trace!(path = %path, key = %key, "key missing from some levels, left in place");
            fully_redundant = false;
            continue;
        }

        let child_path = path.key(key);
        let mut children: Vec<&mut Value> = variants
            .iter_mut()
            .filter_map(|v| v.get_mut(key))
            .collect();
        let child = dispatch::factor_at(rep_child, &mut children, &child_path)?;

        if let Some(value) = child.static_value {
            static_map
                .get_or_insert_with(Map::new)
                .insert(key.clone(), value);
        }
        if child.fully_redundant {
            cleared_keys.push(key);
        } else {
            fully_redundant = false;
        }
    }

    if fully_redundant && has_foreign_keys(representative, variants) {
        trace!(path = %path, "levels hold keys the representative lacks");
        fully_redundant = false;
    }

    for variant in variants.iter_mut() {
        for key in &cleared_keys {
            variant.shift_remove(*key);
        }
    }

    Ok(Factored::partial(static_map.map(Value::Object), fully_redundant))
}

fn has_foreign_keys(representative: &Map<String, Value>, variants: &[&mut Map<String, Value>]) -> bool {
    variants
        .iter()
        .any(|v| v.keys().any(|k| !representative.contains_key(k)))
}
