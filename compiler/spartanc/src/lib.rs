//! Command-line host for the shortest-operand rule.
//!
//! Input files hold one expression per line; blank lines and `//` comment
//! lines are skipped. Every expression line is parsed and rewritten on its
//! own, so lines are processed in parallel and reported in input order.

pub mod commands;
pub mod config;
mod error;
pub mod input;
mod report;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=spartan_rules=debug`
/// or `RUST_LOG=trace`; output goes to stderr so it never mixes with
/// rewritten text.
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
