// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # linkchain — Core Library
//!
//! A single, append-only, hash-linked chain of blocks held in memory. Each
//! block commits to its predecessor's digest, so changing any block breaks
//! every link after it.
//!
//! ## Architecture
//!
//! - **config** — Genesis values, digest parameters, driver defaults.
//! - **crypto** — The Hasher: SHA-256 over an unambiguous field encoding.
//! - **storage** — Blocks, the validation rule set, and the chain.
//!
//! ## Usage
//!
//! ```
//! use linkchain_protocol::storage::{is_valid, Chain};
//!
//! let mut chain = Chain::new();
//! chain.append("Second Block").unwrap();
//! chain.append("Third Block").unwrap();
//!
//! assert_eq!(chain.len(), 3);
//! let blocks = chain.all();
//! assert!(is_valid(&blocks[2], &blocks[1]));
//! ```
//!
//! ## Design Rules
//!
//! 1. Blocks are immutable once sealed. The chain only ever grows.
//! 2. A rejected append is an error, never a silent no-op.
//! 3. The chain is an owned value. No globals.

pub mod config;
pub mod crypto;
pub mod storage;

pub use storage::{Block, Chain, ChainError};
