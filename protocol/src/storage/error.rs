//! Error types for chain construction and validation.
//!
//! Every rejected candidate maps to exactly one [`ChainError`] variant, so a
//! caller can tell *why* an append failed instead of just *that* it failed.

use thiserror::Error;

/// The way a candidate failed to link onto its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceFault {
    /// The candidate's index is not the predecessor's index plus one.
    #[error("expected index {expected}, got {got}")]
    IndexGap {
        /// Index the candidate should have carried.
        expected: u64,
        /// Index the candidate actually carried.
        got: u64,
    },

    /// The candidate's previous digest is not the predecessor's digest.
    #[error("previous digest {got:?} does not match predecessor digest {expected:?}")]
    PreviousDigestMismatch {
        /// Digest of the predecessor block.
        expected: String,
        /// Previous digest stored on the candidate.
        got: String,
    },
}

/// Errors produced while building, validating, or importing a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A block field has the wrong semantic type or range.
    #[error("type mismatch in block {index}: `{field}` {reason}")]
    TypeMismatch {
        /// Index of the offending block.
        index: u64,
        /// Name of the offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The block does not chain onto its predecessor.
    #[error("sequence violation at block {index}: {fault}")]
    SequenceViolation {
        /// Index of the offending block.
        index: u64,
        /// Which link is broken.
        fault: SequenceFault,
    },

    /// The stored digest doesn't match the digest recomputed from the fields.
    #[error("integrity violation at block {index}: stored digest {stored}, computed {computed}")]
    IntegrityViolation {
        /// Index of the offending block.
        index: u64,
        /// Digest stored on the block.
        stored: String,
        /// Digest recomputed from the block's fields.
        computed: String,
    },

    /// The first block of an imported chain is not the canonical genesis.
    #[error("invalid genesis block: {0}")]
    InvalidGenesis(String),

    /// An imported block list was empty. A live [`Chain`](super::Chain)
    /// always holds genesis, so this only comes out of an import.
    #[error("chain is empty")]
    EmptyChain,
}

/// Coarse classification of a [`ChainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch,
    SequenceViolation,
    IntegrityViolation,
    InvalidGenesis,
    EmptyChain,
}

impl ChainError {
    /// Return the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::SequenceViolation { .. } => ErrorKind::SequenceViolation,
            Self::IntegrityViolation { .. } => ErrorKind::IntegrityViolation,
            Self::InvalidGenesis(_) => ErrorKind::InvalidGenesis,
            Self::EmptyChain => ErrorKind::EmptyChain,
        }
    }
}

pub type ChainResult<T> = Result<T, ChainError>;
