//! # Structured Logging
//!
//! `tracing` subscriber setup for the node. Logs go to stderr; stdout
//! carries the chain itself, so it can be piped into a file and fed back to
//! `verify`.
//!
//! Filtering comes from the `-v` count when one is given, and from
//! `RUST_LOG` (falling back to info for both crates) when it isn't.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const QUIET_DIRECTIVE: &str = "linkchain_node=info,linkchain_protocol=info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Filter directive for a `-v` count. `None` means defer to `RUST_LOG`.
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("linkchain_node=debug,linkchain_protocol=debug"),
        _ => Some("linkchain_node=trace,linkchain_protocol=trace"),
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    match verbosity_directive(verbose) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(QUIET_DIRECTIVE)),
    }
}

/// Install the global subscriber.
///
/// Errors if a subscriber is already installed.
pub fn init_logging(verbose: u8, format: LogFormat) -> Result<()> {
    let output = match format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(output)
        .with(build_filter(verbose))
        .try_init()
        .context("failed to install the tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels_map_to_directives() {
        assert_eq!(verbosity_directive(0), None);
        assert!(verbosity_directive(1).unwrap().contains("=debug"));
        assert!(verbosity_directive(2).unwrap().contains("=trace"));
        assert_eq!(verbosity_directive(9), verbosity_directive(2));
    }

    #[test]
    fn every_directive_parses() {
        for directive in [QUIET_DIRECTIVE]
            .into_iter()
            .chain((1..=3).filter_map(verbosity_directive))
        {
            assert!(EnvFilter::try_new(directive).is_ok(), "bad directive {directive}");
        }
    }

    #[test]
    fn second_install_is_an_error() {
        init_logging(1, LogFormat::Json).expect("first install");
        let err = init_logging(0, LogFormat::Pretty).unwrap_err();
        assert!(err.to_string().contains("tracing subscriber"));
    }
}
