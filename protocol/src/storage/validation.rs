//! # Candidate Validation
//!
//! The rule set deciding whether a block may follow another. Checks run in
//! a fixed order, cheapest first, and stop at the first failure:
//!
//! ```text
//! a. shape    — digest and previous_digest are rendered digests
//! b. index    — candidate.index == previous.index + 1
//! c. link     — candidate.previous_digest == previous.digest
//! d. digest   — recomputed digest == candidate.digest
//! ```
//!
//! `index` and `timestamp` are `u64`, so their range is enforced by the type
//! system; step (a) only has the string fields left to check.
//!
//! Validation only reads. Nothing here touches the chain.

use tracing::warn;

use crate::crypto::hash::is_digest_hex;
use crate::storage::block::Block;
use crate::storage::error::{ChainError, ChainResult, SequenceFault};

/// Validate `candidate` as the successor of `previous`, reporting the first
/// check that fails.
pub fn validate_candidate(candidate: &Block, previous: &Block) -> ChainResult<()> {
    check_shape(candidate)?;

    let expected_index = previous.index().checked_add(1).ok_or_else(|| ChainError::TypeMismatch {
        index: candidate.index(),
        field: "index",
        reason: "predecessor index is already u64::MAX".to_string(),
    })?;
    if candidate.index() != expected_index {
        return Err(ChainError::SequenceViolation {
            index: candidate.index(),
            fault: SequenceFault::IndexGap {
                expected: expected_index,
                got: candidate.index(),
            },
        });
    }

    if candidate.previous_digest() != previous.digest() {
        return Err(ChainError::SequenceViolation {
            index: candidate.index(),
            fault: SequenceFault::PreviousDigestMismatch {
                expected: previous.digest().to_string(),
                got: candidate.previous_digest().to_string(),
            },
        });
    }

    let computed = candidate.compute_digest();
    if computed != candidate.digest() {
        return Err(ChainError::IntegrityViolation {
            index: candidate.index(),
            stored: candidate.digest().to_string(),
            computed,
        });
    }

    // Timestamps are expected to be non-decreasing but the rule set doesn't
    // enforce it; wall clocks step backwards.
    if candidate.timestamp() < previous.timestamp() {
        warn!(
            index = candidate.index(),
            timestamp = candidate.timestamp(),
            previous_timestamp = previous.timestamp(),
            "candidate timestamp precedes its predecessor"
        );
    }

    Ok(())
}

/// Predicate form of [`validate_candidate`].
pub fn is_valid(candidate: &Block, previous: &Block) -> bool {
    validate_candidate(candidate, previous).is_ok()
}

/// Check that `block` is the canonical genesis block.
pub fn validate_genesis(block: &Block) -> ChainResult<()> {
    if block.is_genesis() {
        return Ok(());
    }
    let canonical = Block::genesis();
    let reason = if block.index() != canonical.index() {
        format!("index is {}, expected {}", block.index(), canonical.index())
    } else if !block.previous_digest().is_empty() {
        "previous digest must be empty".to_string()
    } else if block.digest() != canonical.digest() {
        format!("digest {} differs from canonical {}", block.digest(), canonical.digest())
    } else {
        "fields differ from the canonical genesis".to_string()
    };
    Err(ChainError::InvalidGenesis(reason))
}

fn check_shape(candidate: &Block) -> ChainResult<()> {
    if !is_digest_hex(candidate.digest()) {
        return Err(ChainError::TypeMismatch {
            index: candidate.index(),
            field: "digest",
            reason: "is not a 64-character lowercase hex digest".to_string(),
        });
    }
    if !is_digest_hex(candidate.previous_digest()) {
        return Err(ChainError::TypeMismatch {
            index: candidate.index(),
            field: "previousDigest",
            reason: "is not a 64-character lowercase hex digest".to_string(),
        });
    }
    Ok(())
}
