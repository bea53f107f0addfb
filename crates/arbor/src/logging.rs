//! Log output for the `arbor` binary.
//!
//! The library only emits `tracing` events. The binary installs a `fmt`
//! subscriber on stderr, filtered by the verbosity flags or, when set, by
//! the `ARBOR_LOG` environment variable (same syntax as `RUST_LOG`).

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Environment variable overriding the command-line verbosity.
pub const LOG_ENV: &str = "ARBOR_LOG";

/// Map `-v`/`-q` flags to a maximum level.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the filter for a default level, honoring [`LOG_ENV`].
pub fn env_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Install the global subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init(default_level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
