//! # In-Memory Chain
//!
//! The ordered, append-only sequence of blocks. A `Chain` always holds at
//! least the genesis block, indices run `0..len` with no gaps, and every
//! non-genesis block has passed [`validate_candidate`] against the block
//! before it. Nothing is ever removed, reordered, or edited in place.
//!
//! The chain is a plain owned value. Whoever builds it passes `&mut Chain`
//! to whoever appends; there is no global instance and no interior locking.

use tracing::{debug, info, warn};

use super::block::{current_timestamp, Block, BlockDraft};
use super::error::{ChainError, ChainResult};
use super::validation::{validate_candidate, validate_genesis};

/// Ordered chain of validated blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    /// Create a chain whose only block is genesis.
    pub fn new() -> Self {
        let genesis = Block::genesis();
        debug!(digest = genesis.digest(), "chain initialized at genesis");
        Self {
            blocks: vec![genesis],
        }
    }

    /// Rebuild a chain from an externally supplied block list.
    ///
    /// The first block must be the canonical genesis and every later block
    /// must validate against the one before it. The first failure is
    /// returned.
    pub fn from_blocks(blocks: Vec<Block>) -> ChainResult<Self> {
        let first = blocks.first().ok_or(ChainError::EmptyChain)?;
        validate_genesis(first)?;
        for pair in blocks.windows(2) {
            validate_candidate(&pair[1], &pair[0])?;
        }
        debug!(blocks = blocks.len(), "chain imported");
        Ok(Self { blocks })
    }

    /// Return the most recently appended block.
    pub fn tip(&self) -> &Block {
        // `new` and `from_blocks` both guarantee at least one block, and
        // nothing ever removes one.
        self.blocks
            .last()
            .expect("chain invariant broken: no genesis block")
    }

    /// Return the genesis block.
    pub fn genesis(&self) -> &Block {
        &self.blocks[0]
    }

    /// Build a block carrying `payload` on top of the tip, validate it, and
    /// append it.
    ///
    /// Returns the appended block. A candidate that fails validation is
    /// reported as an error and the chain is left untouched.
    pub fn append(&mut self, payload: impl Into<String>) -> ChainResult<&Block> {
        let tip = self.tip();
        let mut draft = BlockDraft::extending(tip, 0, payload)?;
        draft.timestamp = current_timestamp(draft.index)?;
        let candidate = draft.seal();
        debug!(
            index = candidate.index(),
            digest = candidate.digest(),
            "candidate block built"
        );
        self.append_block(candidate)
    }

    /// Validate a fully formed candidate against the tip and append it.
    ///
    /// On rejection the chain's length and tip are unchanged.
    pub fn append_block(&mut self, candidate: Block) -> ChainResult<&Block> {
        if let Err(err) = validate_candidate(&candidate, self.tip()) {
            warn!(index = candidate.index(), error = %err, "candidate block rejected");
            return Err(err);
        }

        info!(
            index = candidate.index(),
            digest = candidate.digest(),
            payload_len = candidate.payload().len(),
            "block appended"
        );
        self.blocks.push(candidate);
        Ok(self.tip())
    }

    /// Re-check the whole chain: genesis first, then every adjacent pair.
    pub fn verify(&self) -> ChainResult<()> {
        validate_genesis(self.genesis())?;
        for pair in self.blocks.windows(2) {
            validate_candidate(&pair[1], &pair[0])?;
        }
        Ok(())
    }

    /// Every block in index order.
    pub fn all(&self) -> &[Block] {
        &self.blocks
    }

    /// Block at `index`, if the chain is that long.
    pub fn get(&self, index: u64) -> Option<&Block> {
        usize::try_from(index).ok().and_then(|i| self.blocks.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Number of blocks, genesis included. Never zero.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the chain holds no blocks. A chain always holds genesis, so
    /// this is `false`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Consume the chain, returning its blocks.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::error::{ErrorKind, SequenceFault};
    use crate::storage::validation::is_valid;
    use proptest::prelude::*;

    #[test]
    fn new_chain_holds_only_genesis() {
        let chain = Chain::new();
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert_eq!(chain.tip(), &Block::genesis());
        assert_eq!(chain.genesis().index(), 0);
        assert!(chain.verify().is_ok());
    }

    #[test]
    fn append_links_to_tip() {
        let mut chain = Chain::new();
        let genesis_digest = chain.tip().digest().to_string();

        let block = chain.append("Second Block").expect("append").clone();
        assert_eq!(block.index(), 1);
        assert_eq!(block.previous_digest(), genesis_digest);
        assert_eq!(block.payload(), "Second Block");
        assert_eq!(chain.tip(), &block);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn append_block_accepts_valid_candidate() {
        let mut chain = Chain::new();
        let candidate = BlockDraft::extending(chain.tip(), 2_000_000, "manual")
            .unwrap()
            .seal();
        chain.append_block(candidate.clone()).expect("valid candidate");
        assert_eq!(chain.tip(), &candidate);
    }

    #[test]
    fn rejected_candidate_leaves_chain_unchanged() {
        let mut chain = Chain::new();
        chain.append("Second Block").unwrap();
        let before = chain.clone();

        let orphan = BlockDraft {
            index: 2,
            previous_digest: "f".repeat(64),
            timestamp: 2_000_000,
            payload: "orphan".into(),
        }
        .seal();

        let err = chain.append_block(orphan).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SequenceViolation);
        assert!(matches!(
            err,
            ChainError::SequenceViolation {
                fault: SequenceFault::PreviousDigestMismatch { .. },
                ..
            }
        ));
        assert_eq!(chain, before);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn append_onto_max_index_tip_is_rejected() {
        // from_blocks can't produce this tip.
        let top = Block::from_parts(u64::MAX, "a".repeat(64), "b".repeat(64), "top", 1);
        let mut chain = Chain {
            blocks: vec![Block::genesis(), top],
        };
        let before = chain.clone();

        let err = chain.append("overflow").unwrap_err();
        assert!(matches!(err, ChainError::TypeMismatch { field: "index", .. }));
        assert_eq!(chain, before);
    }

    #[test]
    fn get_by_index() {
        let mut chain = Chain::new();
        chain.append("a").unwrap();
        assert_eq!(chain.get(1).map(Block::payload), Some("a"));
        assert!(chain.get(2).is_none());
        assert!(chain.get(u64::MAX).is_none());
    }

    #[test]
    fn from_blocks_round_trip() {
        let mut chain = Chain::new();
        for p in ["a", "b", "c"] {
            chain.append(p).unwrap();
        }
        let rebuilt = Chain::from_blocks(chain.clone().into_blocks()).expect("valid import");
        assert_eq!(rebuilt, chain);
    }

    #[test]
    fn from_blocks_rejects_empty_and_bad_genesis() {
        assert_eq!(Chain::from_blocks(vec![]).unwrap_err(), ChainError::EmptyChain);

        let fake_genesis = BlockDraft {
            index: 0,
            previous_digest: String::new(),
            timestamp: 0,
            payload: "not the genesis".into(),
        }
        .seal();
        assert_eq!(
            Chain::from_blocks(vec![fake_genesis]).unwrap_err().kind(),
            ErrorKind::InvalidGenesis
        );
    }

    #[test]
    fn from_blocks_rejects_tampered_middle_block() {
        let mut chain = Chain::new();
        for p in ["a", "b", "c"] {
            chain.append(p).unwrap();
        }
        let mut blocks = chain.into_blocks();
        let victim = blocks[2].clone();
        blocks[2] = Block::from_parts(
            victim.index(),
            victim.digest(),
            victim.previous_digest(),
            "B",
            victim.timestamp(),
        );

        match Chain::from_blocks(blocks) {
            Err(ChainError::IntegrityViolation { index, stored, computed }) => {
                assert_eq!(index, 2);
                assert_ne!(stored, computed);
            }
            other => panic!("expected integrity violation, got {other:?}"),
        }
    }

    #[test]
    fn iteration_is_in_index_order() {
        let mut chain = Chain::new();
        chain.append("x").unwrap();
        chain.append("y").unwrap();
        let indices: Vec<u64> = chain.iter().map(Block::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        let via_ref: Vec<u64> = (&chain).into_iter().map(Block::index).collect();
        assert_eq!(via_ref, indices);
    }

    proptest! {
        #[test]
        fn append_grows_by_one_and_links(payloads in prop::collection::vec(".{0,24}", 0..12)) {
            let mut chain = Chain::new();
            for p in &payloads {
                let before = chain.len();
                chain.append(p.clone()).unwrap();
                prop_assert_eq!(chain.len(), before + 1);
            }
            prop_assert_eq!(chain.len(), payloads.len() + 1);

            for pair in chain.all().windows(2) {
                prop_assert_eq!(pair[1].index(), pair[0].index() + 1);
                prop_assert_eq!(pair[1].previous_digest(), pair[0].digest());
                prop_assert!(is_valid(&pair[1], &pair[0]));
            }
            prop_assert!(chain.verify().is_ok());
        }
    }
}
