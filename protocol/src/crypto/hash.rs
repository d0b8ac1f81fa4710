//! # Block Hashing
//!
//! The Hasher: a pure function from a block's four committed fields to a
//! fixed-length digest string. Nothing here holds state, and nothing here
//! can fail on well-typed input.
//!
//! ## Preimage Layout
//!
//! ```text
//! ┌──────────────────────────┬─────────────────────────────────────────┐
//! │ domain tag               │ b"linkchain/block/v1"                   │
//! │ index                    │ u64, 8 bytes big-endian                 │
//! │ previous_digest length   │ u64, 8 bytes big-endian                 │
//! │ previous_digest          │ UTF-8 bytes                             │
//! │ timestamp                │ u64, 8 bytes big-endian                 │
//! │ payload length           │ u64, 8 bytes big-endian                 │
//! │ payload                  │ UTF-8 bytes                             │
//! └──────────────────────────┴─────────────────────────────────────────┘
//! ```
//!
//! Integers are fixed-width and strings are length-prefixed, so two distinct
//! field tuples can never produce the same preimage. Gluing the fields
//! together as text (`"1" + "23..."` vs `"12" + "3..."`) does not have that
//! property.
//!
//! The digest is SHA-256 over the preimage, rendered as 64 lowercase hex
//! characters.

use sha2::{Digest, Sha256};

use crate::config::{BLOCK_DIGEST_DOMAIN, DIGEST_HEX_LENGTH, DIGEST_LENGTH};

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use linkchain_protocol::crypto::sha256;
///
/// let hash = sha256(b"linkchain");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; DIGEST_LENGTH];
    output.copy_from_slice(&result);
    output
}

/// Build the unambiguous byte preimage for a block's committed fields.
///
/// Exposed separately from [`block_digest`] so callers (and tests) can
/// inspect exactly what gets hashed.
pub fn encode_block_preimage(
    index: u64,
    previous_digest: &str,
    timestamp: u64,
    payload: &str,
) -> Vec<u8> {
    let mut preimage = Vec::with_capacity(
        BLOCK_DIGEST_DOMAIN.len() + 32 + previous_digest.len() + payload.len(),
    );
    preimage.extend_from_slice(BLOCK_DIGEST_DOMAIN);
    preimage.extend_from_slice(&index.to_be_bytes());
    push_length_prefixed(&mut preimage, previous_digest.as_bytes());
    preimage.extend_from_slice(&timestamp.to_be_bytes());
    push_length_prefixed(&mut preimage, payload.as_bytes());
    preimage
}

fn push_length_prefixed(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
    buf.extend_from_slice(bytes);
}

/// Compute a block digest from its fields.
///
/// Deterministic: identical arguments always produce the identical string.
///
/// # Example
///
/// ```
/// use linkchain_protocol::crypto::block_digest;
///
/// let a = block_digest(1, "", 1_700_000_000, "hello");
/// let b = block_digest(1, "", 1_700_000_000, "hello");
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn block_digest(index: u64, previous_digest: &str, timestamp: u64, payload: &str) -> String {
    let preimage = encode_block_preimage(index, previous_digest, timestamp, payload);
    hex::encode(sha256(&preimage))
}

/// Whether `s` has the shape of a rendered digest: exactly 64 lowercase hex
/// characters.
pub fn is_digest_hex(s: &str) -> bool {
    s.len() == DIGEST_HEX_LENGTH && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
