//! Recursive structural factoring.
//!
//! The representative is only read. Variants are scanned first; keys and
//! indices found redundant are removed or nulled only once the scan of the
//! enclosing mapping or sequence is complete.

mod dispatch;
mod mapping;
mod scalar;
mod sequence;

use levelfold_core::errors::FactorError;
use levelfold_core::value::ValuePath;
use serde_json::Value;

/// Outcome of factoring one subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Factored {
    /// Substructure shared by every variant, if any.
    pub static_value: Option<Value>,
    /// The whole subtree is identical everywhere; the caller clears it.
    pub fully_redundant: bool,
}

impl Factored {
    pub(crate) fn redundant(static_value: Option<Value>) -> Self {
        Self {
            static_value,
            fully_redundant: true,
        }
    }

    pub(crate) fn retained() -> Self {
        Self {
            static_value: None,
            fully_redundant: false,
        }
    }

    pub(crate) fn partial(static_value: Option<Value>, fully_redundant: bool) -> Self {
        Self {
            static_value,
            fully_redundant,
        }
    }
}

/// Factor `variants` against `representative`, compacting the variants in place.
///
/// The representative must not alias any variant; pass a clone of the first
/// level when it doubles as the template.
pub fn factor(
    representative: &Value,
    variants: &mut [&mut Value],
) -> Result<Factored, FactorError> {
    dispatch::factor_at(representative, variants, &ValuePath::root())
}

/// [`factor`] over an owned slice of variants.
pub fn factor_slice(representative: &Value, variants: &mut [Value]) -> Result<Factored, FactorError> {
    let mut refs: Vec<&mut Value> = variants.iter_mut().collect();
    factor(representative, &mut refs)
}
