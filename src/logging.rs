//! Diagnostic logging to stderr.
//!
//! Filter precedence: `RUST_LOG`, then `-v` flags, then the configured level.

use crate::errors::{AppError, AppResult};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn level_for_verbosity(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::INFO),
        2 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}

fn crate_directive(level: &str) -> String {
    format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
}

pub fn init(verbose: u8, configured_level: &str) -> AppResult<()> {
    let filter = match (std::env::var("RUST_LOG"), level_for_verbosity(verbose)) {
        (Ok(env), _) if !env.trim().is_empty() => EnvFilter::new(env),
        (_, Some(level)) => EnvFilter::new(crate_directive(&level.to_string().to_lowercase())),
        _ => EnvFilter::try_new(crate_directive(configured_level))
            .map_err(|e| AppError::Config(format!("invalid log_level '{configured_level}': {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Config(format!("failed to init logging: {e}")))
}
