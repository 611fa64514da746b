use levelfold_core::errors::FactorError;
use levelfold_core::value::ValuePath;
use serde_json::Value;
use tracing::trace;

use super::{dispatch, Factored};

/// Factor array-shaped subtrees index by index.
///
/// `None` marks a variant whose sequence is absent (`Null`). Cleared slots
/// become `Null`; lengths never change.
pub(super) fn factor_sequence(
    representative: &[Value],
    variants: &mut [Option<&mut Vec<Value>>],
    path: &ValuePath,
) -> Result<Factored, FactorError> {
    let absent = variants.iter().filter(|v| v.is_none()).count();
    if absent == variants.len() {
        return Ok(Factored::redundant(None));
    }
    if absent > 0 {
        trace!(path = %path, absent, "sequence missing from some levels");
        return Ok(Factored::retained());
    }
    if let Some(len) = variants
        .iter()
        .flatten()
        .map(|v| v.len())
        .find(|&len| len != representative.len())
    {
        trace!(path = %path, expected = representative.len(), found = len, "sequence length differs");
        return Ok(Factored::retained());
    }
    if representative.is_empty() {
        return Ok(Factored::redundant(Some(Value::Array(Vec::new()))));
    }

    let mut static_seq: Option<Vec<Value>> = None;
    let mut fully_redundant = true;
    let mut cleared: Vec<usize> = Vec::new();

    for (index, rep_child) in representative.iter().enumerate() {
        let child_path = path.index(index);
        let mut children: Vec<&mut Value> = variants
            .iter_mut()
            .flatten()
            .filter_map(|v| v.get_mut(index))
            .collect();
        let child = dispatch::factor_at(rep_child, &mut children, &child_path)?;

        if let Some(value) = child.static_value {
            static_seq.get_or_insert_with(|| vec![Value::Null; representative.len()])[index] = value;
        }
        if child.fully_redundant {
            cleared.push(index);
        } else {
            fully_redundant = false;
        }
    }

    for variant in variants.iter_mut().flatten() {
        for &index in &cleared {
            if let Some(slot) = variant.get_mut(index) {
                *slot = Value::Null;
            }
        }
    }

    Ok(Factored::partial(static_seq.map(Value::Array), fully_redundant))
}

#[cfg(test)]
mod tests {
    use crate::factoring::factor_slice;
    use serde_json::{json, Value};

    #[test]
    fn elementwise_factoring_nulls_matched_slots() {
        let rep = json!([10, 20]);
        let mut variants = vec![json!([10, 20]), json!([10, 99])];

        let out = factor_slice(&rep, &mut variants).unwrap();

        assert_eq!(out.static_value, Some(json!([10, null])));
        assert!(!out.fully_redundant);
        assert_eq!(variants, vec![json!([null, 20]), json!([null, 99])]);
    }

    #[test]
    fn all_absent_counts_as_agreement() {
        let rep = json!([1, 2]);
        let mut variants = vec![Value::Null, Value::Null];

        let out = factor_slice(&rep, &mut variants).unwrap();

        assert_eq!(out.static_value, None);
        assert!(out.fully_redundant);
        assert_eq!(variants, vec![Value::Null, Value::Null]);
    }

    #[test]
    fn partial_absence_blocks() {
        let rep = json!([1, 2]);
        let mut variants = vec![json!([1, 2]), Value::Null];

        let out = factor_slice(&rep, &mut variants).unwrap();

        assert_eq!(out.static_value, None);
        assert!(!out.fully_redundant);
        assert_eq!(variants, vec![json!([1, 2]), Value::Null]);
    }

    #[test]
    fn length_mismatch_blocks_even_with_equal_prefix() {
        let rep = json!([1, 2]);
        let mut variants = vec![json!([1, 2]), json!([1, 2, 3])];

        let out = factor_slice(&rep, &mut variants).unwrap();

        assert_eq!(out.static_value, None);
        assert!(!out.fully_redundant);
        assert_eq!(variants, vec![json!([1, 2]), json!([1, 2, 3])]);
    }

    #[test]
    fn empty_sequences_are_redundant() {
        let rep = json!([]);
        let mut variants = vec![json!([]), json!([])];

        let out = factor_slice(&rep, &mut variants).unwrap();

        assert_eq!(out.static_value, Some(json!([])));
        assert!(out.fully_redundant);
    }

    #[test]
    fn fully_matching_sequence_is_all_null() {
        let rep = json!([{"id": "a"}, {"id": "b"}]);
        let mut variants = vec![rep.clone(), rep.clone()];

        let out = factor_slice(&rep, &mut variants).unwrap();

        assert!(out.fully_redundant);
        assert_eq!(out.static_value, Some(rep));
        assert_eq!(variants, vec![json!([null, null]), json!([null, null])]);
    }

    #[test]
    fn nested_mappings_in_sequences_factor_per_key() {
        let rep = json!([{"id": "dmg", "value": 5}]);
        let mut variants = vec![
            json!([{"id": "dmg", "value": 5}]),
            json!([{"id": "dmg", "value": 9}]),
        ];

        let out = factor_slice(&rep, &mut variants).unwrap();

        assert_eq!(out.static_value, Some(json!([{"id": "dmg"}])));
        assert_eq!(
            variants,
            vec![json!([{"value": 5}]), json!([{"value": 9}])]
        );
    }
}
