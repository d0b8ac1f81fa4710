//! # Block Structure
//!
//! A block is one entry in the chain. It commits to its own position, its
//! payload, the time it was made, and the digest of the block before it.
//!
//! ## Block Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Block                                      │
//! │  ├── index: u64                             │
//! │  ├── digest: String     (hex SHA-256)       │
//! │  ├── previous_digest: String                │
//! │  ├── payload: String                        │
//! │  └── timestamp: u64     (Unix seconds)      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Two-Phase Construction
//!
//! The digest covers the block's other fields, so it can't exist until they
//! do. A [`BlockDraft`] holds the unsealed fields; [`BlockDraft::seal`]
//! hashes them and hands back a [`Block`] whose fields can no longer change.

use serde::{Deserialize, Serialize};

use crate::config::{
    GENESIS_INDEX, GENESIS_PAYLOAD, GENESIS_PREVIOUS_DIGEST, GENESIS_TIMESTAMP,
};
use crate::crypto::hash::block_digest;
use crate::storage::error::{ChainError, ChainResult};

// ---------------------------------------------------------------------------
// BlockDraft
// ---------------------------------------------------------------------------

/// The committed fields of a block before its digest has been computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockDraft {
    /// Position in the chain.
    pub index: u64,
    /// Digest of the predecessor. Empty only for genesis.
    pub previous_digest: String,
    /// Unix timestamp (seconds).
    pub timestamp: u64,
    /// Caller-supplied data.
    pub payload: String,
}

impl BlockDraft {
    /// Draft the block that would follow `parent`.
    ///
    /// Fails with a type mismatch on `index` when `parent` already sits at
    /// `u64::MAX`.
    pub fn extending(
        parent: &Block,
        timestamp: u64,
        payload: impl Into<String>,
    ) -> ChainResult<Self> {
        let index = parent.index.checked_add(1).ok_or_else(|| ChainError::TypeMismatch {
            index: parent.index,
            field: "index",
            reason: "predecessor index is already u64::MAX".to_string(),
        })?;
        Ok(BlockDraft {
            index,
            previous_digest: parent.digest.clone(),
            timestamp,
            payload: payload.into(),
        })
    }

    /// Hash the draft's fields and produce the finished block.
    pub fn seal(self) -> Block {
        let digest = block_digest(self.index, &self.previous_digest, self.timestamp, &self.payload);
        Block {
            index: self.index,
            digest,
            previous_digest: self.previous_digest,
            payload: self.payload,
            timestamp: self.timestamp,
        }
    }
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// One immutable chain entry.
///
/// Fields are private. A `Block` either comes out of [`BlockDraft::seal`],
/// in which case its digest is correct by construction, or out of
/// [`Block::from_parts`] / deserialization, in which case nothing is trusted
/// until the chain validates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    index: u64,
    digest: String,
    previous_digest: String,
    payload: String,
    timestamp: u64,
}

impl Block {
    /// Construct the genesis block.
    ///
    /// Index 0, empty previous digest, and the fixed payload and timestamp
    /// from [`config`](crate::config). The digest is computed the same way as
    /// for any other block, so it is identical in every process.
    pub fn genesis() -> Self {
        BlockDraft {
            index: GENESIS_INDEX,
            previous_digest: GENESIS_PREVIOUS_DIGEST.to_string(),
            timestamp: GENESIS_TIMESTAMP,
            payload: GENESIS_PAYLOAD.to_string(),
        }
        .seal()
    }

    /// Assemble a block from field values as-is, without hashing anything.
    ///
    /// The stored `digest` may be wrong. That is the point: this is how
    /// imported blocks and hand-built candidates enter the system, and
    /// validation is what decides whether they are acceptable.
    pub fn from_parts(
        index: u64,
        digest: impl Into<String>,
        previous_digest: impl Into<String>,
        payload: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Block {
            index,
            digest: digest.into(),
            previous_digest: previous_digest.into(),
            payload: payload.into(),
            timestamp,
        }
    }

    /// Recompute the digest from the block's fields.
    ///
    /// Compare against [`Block::digest`] to detect tampering.
    pub fn compute_digest(&self) -> String {
        block_digest(self.index, &self.previous_digest, self.timestamp, &self.payload)
    }

    /// Whether this block is exactly the canonical genesis block.
    pub fn is_genesis(&self) -> bool {
        *self == Block::genesis()
    }

    /// Return the block's unsealed fields.
    pub fn to_draft(&self) -> BlockDraft {
        BlockDraft {
            index: self.index,
            previous_digest: self.previous_digest.clone(),
            timestamp: self.timestamp,
            payload: self.payload.clone(),
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn previous_digest(&self) -> &str {
        &self.previous_digest
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

// ---------------------------------------------------------------------------
// Wall Clock
// ---------------------------------------------------------------------------

/// Current Unix time in whole seconds.
///
/// A clock reporting a time before the epoch can't be represented in a
/// block's `u64` timestamp; that is reported as a type mismatch against the
/// block about to be built (`next_index`) rather than clamped.
pub fn current_timestamp(next_index: u64) -> ChainResult<u64> {
    let secs = chrono::Utc::now().timestamp();
    u64::try_from(secs).map_err(|_| ChainError::TypeMismatch {
        index: next_index,
        field: "timestamp",
        reason: format!("clock reports {secs}s, before the Unix epoch"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
