//! Chain rendering for stdout, plus reading an exported chain back in.

use std::fmt::{self, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use linkchain_protocol::storage::Block;

use crate::cli::OutputFormat;

/// Render `blocks` in the requested format.
pub fn render_chain(blocks: &[Block], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(blocks).context("failed to serialize chain as JSON")
        }
        OutputFormat::Pretty => render_pretty(blocks).context("failed to format chain"),
    }
}

fn render_pretty(blocks: &[Block]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_block(&mut out, block)?;
    }
    Ok(out)
}

fn write_block(out: &mut String, block: &Block) -> fmt::Result {
    writeln!(out, "Block #{}", block.index())?;
    writeln!(out, "  index          : {}", block.index())?;
    writeln!(out, "  digest         : {}", block.digest())?;
    writeln!(out, "  previousDigest : {}", block.previous_digest())?;
    writeln!(out, "  payload        : {}", block.payload())?;
    writeln!(out, "  timestamp      : {}", block.timestamp())
}

/// Read a JSON array of blocks from `path`.
pub fn read_chain_file(path: &Path) -> Result<Vec<Block>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read chain file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of blocks", path.display()))
}
