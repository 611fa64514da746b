//! Tracing initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the levelfold tracing/logging system.
///
/// Reads the `LEVELFOLD_LOG` environment variable for per-crate log levels.
/// Format: `LEVELFOLD_LOG=levelfold_factor=trace,levelfold_gems=info`
///
/// Falls back to `levelfold=info` if `LEVELFOLD_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter, false);
}

/// Initialize tracing from the `[observability]` config section.
///
/// `LEVELFOLD_LOG` still wins when set, so a single run can be made louder
/// without editing the config file.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("levelfold={}", config.log_level)));
    install(filter, config.json_logs);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    install(EnvFilter::new(filter), json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let (plain_layer, json_layer) = if json {
            (None, Some(fmt::layer().json().with_target(true)))
        } else {
            (
                Some(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                ),
                None,
            )
        };

        // Another global subscriber may already be installed by an embedding
        // application; in that case we keep theirs.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(plain_layer)
            .with(json_layer)
            .try_init();
    });
}
