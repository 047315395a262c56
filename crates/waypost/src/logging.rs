// File: waypost/src/logging.rs
// Purpose: tracing subscriber setup driven by LoggingConfig

use std::str::FromStr;

use tracing::Level;

use crate::config::LoggingConfig;

/// Installs a global fmt subscriber.
///
/// Safe to call more than once; an already-installed subscriber is kept.
pub fn init(config: &LoggingConfig) {
    let level = parse_level(&config.level);

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(config.ansi)
        .try_init();

    match installed {
        Ok(()) => tracing::debug!(%level, "logging initialised"),
        Err(err) => tracing::debug!(%err, "global subscriber already installed"),
    }
}

/// Parses a level name, falling back to `info`.
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or_else(|_| {
        tracing::warn!(level = name, "unknown log level, using info");
        Level::INFO
    })
}
