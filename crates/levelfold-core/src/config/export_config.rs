use serde::{Deserialize, Serialize};

use super::defaults;

/// Document writer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving `<name>.json` files.
    pub output_dir: String,
    /// Indent the main document.
    pub pretty: bool,
    /// Spaces per indentation level when `pretty` is set.
    pub indent: usize,
    /// Also write a compact `<name>.min.json`.
    pub write_minified: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: defaults::DEFAULT_OUTPUT_DIR.to_string(),
            pretty: defaults::DEFAULT_PRETTY,
            indent: defaults::DEFAULT_INDENT,
            write_minified: defaults::DEFAULT_WRITE_MINIFIED,
        }
    }
}
