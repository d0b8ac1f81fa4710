//! # Protocol Configuration & Constants
//!
//! Every fixed value linkchain relies on lives here: the genesis block's
//! fields, the digest parameters, and the payloads the driver uses when the
//! caller doesn't supply any.
//!
//! The genesis values are part of the chain's identity. Change any of them
//! and every digest downstream changes too, so treat them as frozen.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// Crate-level protocol version, reported by the driver's `version` command.
pub const PROTOCOL_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Genesis Block
// ---------------------------------------------------------------------------

/// Index of the genesis block. Every chain starts here.
pub const GENESIS_INDEX: u64 = 0;

/// Previous digest carried by the genesis block. It has no predecessor, so
/// this is the only place an empty digest is legal.
pub const GENESIS_PREVIOUS_DIGEST: &str = "";

/// Payload of the genesis block.
pub const GENESIS_PAYLOAD: &str = "I am the first block!";

/// Timestamp (Unix seconds) of the genesis block. Fixed so that every
/// process derives the same genesis digest.
pub const GENESIS_TIMESTAMP: u64 = 1_234_567;

// ---------------------------------------------------------------------------
// Digest Parameters
// ---------------------------------------------------------------------------

/// Hash function behind every block digest.
pub const DIGEST_ALGORITHM: &str = "SHA-256";

/// Raw digest length in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Length of a digest rendered as lowercase hex.
pub const DIGEST_HEX_LENGTH: usize = DIGEST_LENGTH * 2;

/// Domain tag mixed into the front of every block preimage. Bump the version
/// suffix if the preimage layout ever changes.
pub const BLOCK_DIGEST_DOMAIN: &[u8] = b"linkchain/block/v1";

// ---------------------------------------------------------------------------
// Driver Defaults
// ---------------------------------------------------------------------------

/// Payloads appended by the driver when it is run without arguments.
pub const DEFAULT_PAYLOADS: [&str; 4] = [
    "Second Block",
    "Third Block",
    "Fourth Block",
    "Fifth Block",
];
