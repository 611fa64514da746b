// Single source of truth for all default values.

// --- Factor ---
pub const DEFAULT_PARALLEL: bool = false;
pub const DEFAULT_MIN_LEVELS: usize = 1;

// --- Export ---
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_PRETTY: bool = true;
pub const DEFAULT_INDENT: usize = 2;
pub const DEFAULT_WRITE_MINIFIED: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
