//! Sprig command-line driver.
//!
//! Logging is off unless `RUST_LOG` is set, e.g.
//! `RUST_LOG=sprig_compile=debug sprig run script.sprig`.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the `fmt` subscriber filtered by `RUST_LOG`. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
