use levelfold_core::value::values_equal;
use levelfold_factor::{factor_slice, overlay};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        (-20i64..20).prop_map(|n| json!(n)),
        "[a-z]{1,3}".prop_map(Value::String),
    ]
}

/// Trees without nulls or empty mappings.
fn arb_tree() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-e]", inner, 1..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_record() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-f]{1,2}", arb_tree(), 1..5)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

/// xorshift64; deterministic per seed so shrinking stays meaningful.
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed | 1)
    }

    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn one_in(&mut self, n: u64) -> bool {
        self.next() % n == 0
    }
}

/// Derive a level from `base`. Leaves may change value; with `structural`,
/// keys may vanish or appear, sequences may change length or become null.
fn perturb(value: &Value, rng: &mut Rng, structural: bool) -> Value {
    match value {
        Value::Array(items) => {
            if structural && rng.one_in(10) {
                return Value::Null;
            }
            let mut out: Vec<Value> = items.iter().map(|v| perturb(v, rng, structural)).collect();
            if structural && rng.one_in(10) {
                if rng.one_in(2) {
                    out.pop();
                } else {
                    out.push(json!(0));
                }
            }
            Value::Array(out)
        }
        Value::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                if structural && rng.one_in(10) {
                    continue;
                }
                out.insert(k.clone(), perturb(v, rng, structural));
            }
            if structural && rng.one_in(12) {
                out.insert("zz".to_string(), json!("extra"));
            }
            Value::Object(out)
        }
        leaf => {
            if rng.one_in(4) {
                json!(rng.next() % 5)
            } else {
                leaf.clone()
            }
        }
    }
}

fn levels(base: &Value, seeds: &[u64], structural: bool) -> Vec<Value> {
    seeds
        .iter()
        .map(|&seed| perturb(base, &mut Rng::new(seed), structural))
        .collect()
}

/// Every leaf in `static_value` is absent or null in `variant`.
fn disjoint(static_value: &Value, variant: &Value) -> bool {
    match (static_value, variant) {
        (_, Value::Null) => true,
        (Value::Object(s), Value::Object(v)) => s
            .iter()
            .all(|(k, sv)| v.get(k).map_or(true, |vv| disjoint(sv, vv))),
        (Value::Array(s), Value::Array(v)) if !s.is_empty() && s.len() == v.len() => s
            .iter()
            .zip(v)
            .all(|(sv, vv)| sv.is_null() || disjoint(sv, vv)),
        _ => false,
    }
}

// ── Fixed point: a second pass finds nothing left to share ────────────────

proptest! {
    #[test]
    fn second_pass_is_a_no_op(
        base in arb_record(),
        seeds in prop::collection::vec(any::<u64>(), 1..5),
        structural in any::<bool>(),
    ) {
        let mut variants = levels(&base, &seeds, structural);
        let rep = variants[0].clone();
        factor_slice(&rep, &mut variants).unwrap();
        let compacted = variants.clone();

        let rep = variants[0].clone();
        let again = factor_slice(&rep, &mut variants).unwrap();

        prop_assert_eq!(again.static_value, None);
        prop_assert_eq!(variants, compacted);
    }
}

// ── Static and compacted levels never hold the same leaf ──────────────────

proptest! {
    #[test]
    fn static_and_levels_are_disjoint(
        base in arb_record(),
        seeds in prop::collection::vec(any::<u64>(), 1..5),
        structural in any::<bool>(),
    ) {
        let mut variants = levels(&base, &seeds, structural);
        let rep = variants[0].clone();
        let out = factor_slice(&rep, &mut variants).unwrap();

        if let Some(static_value) = &out.static_value {
            for v in &variants {
                prop_assert!(disjoint(static_value, v), "static {} overlaps level {}", static_value, v);
            }
        }
    }
}

// ── Overlay rebuilds every level when only leaf values differ ─────────────

proptest! {
    #[test]
    fn overlay_reconstructs_levels(
        base in arb_record(),
        seeds in prop::collection::vec(any::<u64>(), 1..5),
    ) {
        let original = levels(&base, &seeds, false);
        let mut variants = original.clone();
        let rep = variants[0].clone();
        let out = factor_slice(&rep, &mut variants).unwrap();

        for (before, after) in original.iter().zip(&variants) {
            let rebuilt = match &out.static_value {
                Some(s) => overlay(s, after),
                None => after.clone(),
            };
            prop_assert!(values_equal(&rebuilt, before), "{} != {}", rebuilt, before);
        }
    }
}

// ── Total agreement ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_levels_are_fully_redundant(base in arb_record(), count in 1usize..5) {
        let mut variants = vec![base.clone(); count];
        let out = factor_slice(&base, &mut variants).unwrap();

        prop_assert!(out.fully_redundant);
        prop_assert_eq!(out.static_value, Some(base));
        for v in &variants {
            prop_assert_eq!(v, &json!({}));
        }
    }
}

// ── Sequence lengths never change ─────────────────────────────────────────

proptest! {
    #[test]
    fn sequence_lengths_are_preserved(
        items in prop::collection::vec(arb_tree(), 0..6),
        seeds in prop::collection::vec(any::<u64>(), 1..4),
    ) {
        let base = Value::Array(items);
        let original = levels(&base, &seeds, false);
        let mut variants = original.clone();
        let rep = variants[0].clone();
        factor_slice(&rep, &mut variants).unwrap();

        for (before, after) in original.iter().zip(&variants) {
            prop_assert_eq!(
                before.as_array().map(Vec::len),
                after.as_array().map(Vec::len)
            );
        }
    }
}
