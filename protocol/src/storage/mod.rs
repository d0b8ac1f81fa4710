//! # Storage Module
//!
//! The chain itself: block structure, the validation rule set, and the
//! in-memory append-only sequence that enforces it.
//!
//! ## Architecture
//!
//! ```text
//! block.rs       — Block, BlockDraft, genesis, wall-clock timestamps
//! validation.rs  — candidate-vs-predecessor rules, genesis check
//! chain.rs       — owned chain with tip access and validated append
//! error.rs       — ChainError taxonomy
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! payload → BlockDraft → seal() → candidate ─┬─ validate vs tip ─→ Chain
//!                          ↑                  └─ rejected → ChainError
//!                     crypto::hash
//! ```
//!
//! Storage here means process memory. Nothing is written to disk; the chain
//! lives exactly as long as the value that owns it.

pub mod block;
pub mod chain;
pub mod error;
pub mod validation;

pub use block::{Block, BlockDraft};
pub use chain::Chain;
pub use error::{ChainError, ChainResult, ErrorKind, SequenceFault};
pub use validation::{is_valid, validate_candidate, validate_genesis};
