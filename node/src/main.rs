// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # linkchain Node
//!
//! Entry point for the `linkchain-node` binary. Parses CLI arguments,
//! initializes logging, and drives the chain.
//!
//! - `run`     — build a chain from genesis, append payloads, print it
//! - `verify`  — check a chain exported as JSON
//! - `version` — print build version information

mod cli;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;

use linkchain_protocol::config::{DEFAULT_PAYLOADS, DIGEST_ALGORITHM, PROTOCOL_VERSION};
use linkchain_protocol::storage::Chain;

use cli::{Commands, LinkchainCli};

fn main() -> Result<()> {
    let cli = LinkchainCli::parse();

    match cli.command {
        Commands::Run(args) => {
            logging::init_logging(cli.verbose, cli.log_format)?;
            run_chain(args)
        }
        Commands::Verify(args) => {
            logging::init_logging(cli.verbose, cli.log_format)?;
            verify_chain(args)
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds a chain from genesis, appends each payload, and prints the result.
fn run_chain(args: cli::RunArgs) -> Result<()> {
    let payloads = if args.payloads.is_empty() {
        DEFAULT_PAYLOADS.iter().map(|p| p.to_string()).collect()
    } else {
        args.payloads
    };

    let mut chain = Chain::new();
    tracing::info!(
        genesis = chain.genesis().digest(),
        payloads = payloads.len(),
        "building chain"
    );

    for payload in payloads {
        let next_index = chain.len();
        chain
            .append(payload)
            .with_context(|| format!("failed to append block {next_index}"))?;
    }

    chain.verify().context("freshly built chain failed verification")?;
    tracing::info!(blocks = chain.len(), tip = chain.tip().digest(), "chain complete");

    println!("{}", render::render_chain(chain.all(), args.output)?);
    Ok(())
}

/// Reads an exported chain and checks every link.
fn verify_chain(args: cli::VerifyArgs) -> Result<()> {
    let blocks = render::read_chain_file(&args.input)?;
    let count = blocks.len();

    let chain = Chain::from_blocks(blocks)
        .with_context(|| format!("chain in {} is invalid", args.input.display()))?;

    tracing::info!(blocks = count, tip = chain.tip().digest(), "chain verified");
    println!("OK: {} blocks, tip {}", chain.len(), chain.tip().digest());
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("linkchain-node {}", env!("CARGO_PKG_VERSION"));
    println!("protocol       {}", PROTOCOL_VERSION);
    println!("digest         {}", DIGEST_ALGORITHM);
}
