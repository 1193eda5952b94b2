//! Diagnostic tracing for the bootstrap CLI.
//!
//! Tracing output goes to stderr only. Stdout is reserved for the banner and
//! hint lines printed by [`crate::setup`]. At the default level nothing is
//! logged, so a failed run leaves exactly one diagnostic line on stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
///
/// `--verbose` surfaces this crate's per-step events (spawn, exit code)
/// without enabling debug output from dependencies.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,bootstrap=debug" } else { "warn" }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides [`default_directive`].
///
/// # Example
/// ```bash
/// RUST_LOG=bootstrap=info cargo run -p bootstrap
/// ```
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .compact(),
        )
        .init();
}
