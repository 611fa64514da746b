use levelfold_core::value::values_equal;
use serde_json::Value;

use super::Factored;

/// Redundant iff every variant equals the representative.
///
/// A redundant `Null` contributes nothing to static: it is the absence
/// sentinel, so a cleared slot stays cleared on a second pass.
pub(super) fn factor_scalar(representative: &Value, variants: &[&mut Value]) -> Factored {
    if !variants.iter().all(|v| values_equal(representative, v)) {
        return Factored::retained();
    }
    if representative.is_null() {
        Factored::redundant(None)
    } else {
        Factored::redundant(Some(representative.clone()))
    }
}
