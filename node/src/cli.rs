//! # CLI Interface
//!
//! Command-line structure for `linkchain-node`, via `clap` derive. Three
//! subcommands: `run`, `verify`, and `version`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// In-memory hash-linked ledger driver.
///
/// Builds a chain from genesis, appends payloads to it, and prints the
/// result. Can also check a chain previously exported as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "linkchain-node",
    about = "Build, print, and verify a hash-linked block chain",
    version,
    propagate_version = true
)]
pub struct LinkchainCli {
    /// More log detail: -v for debug, -vv for trace. Without it `RUST_LOG`
    /// applies.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format (logs go to stderr).
    #[arg(
        long,
        global = true,
        env = "LINKCHAIN_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a chain from genesis, append payloads, and print it.
    Run(RunArgs),
    /// Check a chain exported as a JSON array of blocks.
    Verify(VerifyArgs),
    /// Print version information and exit.
    Version,
}

/// How the chain is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per paragraph, one field per line.
    Pretty,
    /// A JSON array of blocks.
    Json,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Payloads to append, in order. Defaults to the four demo payloads.
    pub payloads: Vec<String>,

    /// Output format for the finished chain.
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Path to a JSON file holding an array of blocks.
    #[arg(long, short = 'i')]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        LinkchainCli::command().debug_assert();
    }

    #[test]
    fn run_collects_payloads_in_order() {
        let cli = LinkchainCli::parse_from(["linkchain-node", "run", "a", "b", "--output", "json"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.payloads, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(args.output, OutputFormat::Json);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn verbose_flag_counts_after_subcommand() {
        let cli = LinkchainCli::parse_from(["linkchain-node", "verify", "-i", "c.json", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Verify(_)));
    }

    #[test]
    fn run_without_payloads_is_allowed() {
        let cli = LinkchainCli::parse_from(["linkchain-node", "run"]);
        match cli.command {
            Commands::Run(args) => assert!(args.payloads.is_empty()),
            other => panic!("expected run, got {other:?}"),
        }
    }
}
