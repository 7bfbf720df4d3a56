//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the modscan tracing/logging system.
///
/// Reads the `MODSCAN_LOG` environment variable for per-target log levels.
/// Format: `MODSCAN_LOG=modscan_analysis=debug,modscan_core=warn`
///
/// Falls back to `modscan=info` if `MODSCAN_LOG` is not set or is invalid.
/// Calling it more than once is a no-op, and it does not panic if another
/// global subscriber was installed first.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();

        // An embedding application owns the global subscriber; keep it.
        if let Err(error) = installed {
            tracing::debug!(%error, "tracing subscriber already installed, keeping it");
        }
    });
}
