//! Diagnostic tracing for the runner itself
//!
//! The report on stdout is the user-facing output. Tracing events go to
//! stderr and are only enabled through `RUST_LOG`, e.g.
//! `RUST_LOG=testrun=debug testrun`.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
