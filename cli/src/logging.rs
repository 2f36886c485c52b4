//! # Logging
//!
//! Installs `env_logger`. `RUST_LOG` wins over the defaults chosen here.

use crate::error::CliResult;
use env_logger::{Builder, Env};

/// Initialises the global logger. Logs go to stderr so documents written to
/// stdout stay parseable.
pub fn init(verbose: bool) -> CliResult<()> {
    let default_filter = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init()?;
    Ok(())
}
