//! Tracing subscriber setup for applications built on ethiocal.
//!
//! The library crates only emit `tracing` events; nothing is printed until
//! the application installs a subscriber, for example with [`init`].

use tracing_subscriber::EnvFilter;

/// Crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["ethiocal", "ec_core", "ec_time", "ec_holidays"];

/// Install a `fmt` subscriber filtered by verbosity.
///
/// 0 → warn, 1 → info, 2 → debug, 3+ → trace.  `RUST_LOG` overrides the
/// level when set.  Calling this twice is harmless; the second call is a
/// no-op.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .try_init();
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)))
}

fn directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
