/// levelfold version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "LEVELFOLD_LOG";

/// Filter used when `LEVELFOLD_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "levelfold=info";

/// Document key holding the data shared by every level.
pub const STATIC_KEY: &str = "static";

/// Document key holding the level index → compacted data mapping.
pub const PER_LEVEL_KEY: &str = "per_level";

/// Rendering of the root path in error messages.
pub const ROOT_PATH: &str = "$";

/// File extension of written documents.
pub const JSON_EXTENSION: &str = "json";

/// Extension of the compact companion file.
pub const MINIFIED_EXTENSION: &str = "min.json";

/// Upper bound on the configurable JSON indentation.
pub const MAX_INDENT: usize = 8;
