//! Tracing subscriber initialization.
//!
//! Diagnostics go to stderr so stdout stays clean for listings and `--json`.

use std::io::IsTerminal;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Default filter directive: `warn`, or `debug` when verbose.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Builds the filter. `RUST_LOG` wins over the verbosity flag.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber writing to stderr.
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
    }

    #[test]
    fn test_second_init_reports_already_set() {
        // Whichever call runs first in this process wins; the next one must fail.
        let _ = init(false);
        assert!(matches!(init(true), Err(LoggingError::SubscriberAlreadySet)));
    }
}
