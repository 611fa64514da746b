use std::collections::BTreeMap;

/// Resolves a stat id to its display text.
pub trait StatTranslator: Send + Sync {
    fn translate(&self, id: &str, value: f64) -> Option<String>;
}

/// Per-gem lookup table; the text does not depend on the value.
impl StatTranslator for BTreeMap<String, String> {
    fn translate(&self, id: &str, _value: f64) -> Option<String> {
        self.get(id).cloned()
    }
}

/// Leaves every `stat` text null.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl StatTranslator for NoTranslations {
    fn translate(&self, _id: &str, _value: f64) -> Option<String> {
        None
    }
}
