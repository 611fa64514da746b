use levelfold_core::errors::FactorError;
use levelfold_core::value::{ValueKind, ValuePath};
use serde_json::{Map, Value};

use super::{mapping, scalar, sequence, Factored};

/// Route by the representative's kind, checking every variant against it.
pub(super) fn factor_at(
    representative: &Value,
    variants: &mut [&mut Value],
    path: &ValuePath,
) -> Result<Factored, FactorError> {
    match representative {
        Value::Object(rep) => {
            let mut maps = mappings_of(variants, path)?;
            mapping::factor_mapping(rep, &mut maps, path)
        }
        Value::Array(rep) => {
            let mut seqs = sequences_of(variants, path)?;
            sequence::factor_sequence(rep, &mut seqs, path)
        }
        rep => {
            check_scalar_variants(rep, variants, path)?;
            Ok(scalar::factor_scalar(rep, variants))
        }
    }
}

fn mismatch(path: &ValuePath, variant: usize, expected: ValueKind, found: &Value) -> FactorError {
    FactorError::StructureMismatch {
        path: path.clone(),
        variant,
        expected,
        found: ValueKind::of(found),
    }
}

fn mappings_of<'a>(
    variants: &'a mut [&mut Value],
    path: &ValuePath,
) -> Result<Vec<&'a mut Map<String, Value>>, FactorError> {
    variants
        .iter_mut()
        .enumerate()
        .map(|(i, variant)| match &mut **variant {
            Value::Object(map) => Ok(map),
            other => Err(mismatch(path, i, ValueKind::Mapping, other)),
        })
        .collect()
}

/// `Null` is the absence sentinel for a sequence and maps to `None`.
fn sequences_of<'a>(
    variants: &'a mut [&mut Value],
    path: &ValuePath,
) -> Result<Vec<Option<&'a mut Vec<Value>>>, FactorError> {
    variants
        .iter_mut()
        .enumerate()
        .map(|(i, variant)| match &mut **variant {
            Value::Array(seq) => Ok(Some(seq)),
            Value::Null => Ok(None),
            other => Err(mismatch(path, i, ValueKind::Sequence, other)),
        })
        .collect()
}

/// A scalar representative must not face a composite variant.
/// A `Null` representative has no structure to violate.
fn check_scalar_variants(
    representative: &Value,
    variants: &[&mut Value],
    path: &ValuePath,
) -> Result<(), FactorError> {
    if representative.is_null() {
        return Ok(());
    }
    let expected = ValueKind::of(representative);
    match variants
        .iter()
        .enumerate()
        .find(|(_, v)| ValueKind::of(v).is_composite())
    {
        Some((i, found)) => Err(mismatch(path, i, expected, found)),
        None => Ok(()),
    }
}
