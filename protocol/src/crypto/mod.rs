//! # Cryptographic Primitives
//!
//! One job: turn a block's fields into a digest that commits to all of them.
//! SHA-256 does the heavy lifting; this module only decides what bytes go in.
//!
//! We don't roll our own hash. We do pick the preimage layout, and that part
//! matters: see [`hash`] for why the fields are length-prefixed.

pub mod hash;

pub use hash::{block_digest, encode_block_preimage, is_digest_hex, sha256};
