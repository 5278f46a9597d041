/*!
 * Tracing Setup
 *
 * The crate only emits `tracing` events: `error` right before an abort and
 * `trace` when a guard binds or releases. Installing a subscriber is up to
 * the binary; [`init_tracing`] is a ready-made one.
 */

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting JSON output (`1` or `true`)
pub const JSON_ENV: &str = "PTHREAD_STRICT_TRACE_JSON";

/// Install a global subscriber
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - PTHREAD_STRICT_TRACE_JSON: Enable JSON output (default: false)
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_file(true),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(json = json_requested(), "tracing initialized");
    }
    installed
}

fn json_requested() -> bool {
    std::env::var(JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}
