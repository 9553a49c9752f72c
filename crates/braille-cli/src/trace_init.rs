//! One-shot tracing setup for the CLI binaries.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a stderr fmt subscriber, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    });
}
