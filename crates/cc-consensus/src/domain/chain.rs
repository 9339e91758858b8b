//! The append-only chain of sealed blocks.
//!
//! Each block references the content hash of its predecessor; the genesis
//! block carries the literal `"0"` instead. `append` performs no
//! validation — admission and the pre-seal conflict scan are the only
//! gates, and the chain trusts its caller.

use crate::domain::pow::ProofOfWork;
use shared_types::{Block, BlockBody};

/// Ordered, append-only sequence of sealed blocks, genesis first.
#[derive(Clone, Debug, Default)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chain whose genesis block is already sealed.
    pub fn with_genesis(pow: &ProofOfWork) -> Self {
        let mut chain = Self::new();
        let genesis = chain.build_block(BlockBody::genesis(), pow);
        chain.append(genesis);
        chain
    }

    /// Number of sealed blocks.
    pub fn height(&self) -> u64 {
        self.blocks.len() as u64
    }

    /// True when not even the genesis block exists.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The sealed blocks, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The most recently sealed block.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// The hash the next block must reference: the tip's content hash,
    /// or `"0"` when the chain is empty.
    pub fn previous_hash(&self) -> String {
        match self.tip() {
            Some(block) => block.hash(),
            None => Block::GENESIS_PREVIOUS_HASH.to_owned(),
        }
    }

    /// Builds and seals the next block over the given payload.
    ///
    /// The block index is the current height plus one, the predecessor
    /// reference is taken from the tip, and the nonce is mined by the
    /// given sealer. The block is returned, not appended.
    pub fn build_block(&self, body: BlockBody, pow: &ProofOfWork) -> Block {
        let block = Block {
            index: self.height() + 1,
            transactions: body,
            previous_hash: self.previous_hash(),
            nonce: pow.seal(),
        };
        tracing::debug!(
            index = block.index,
            nonce = block.nonce,
            "block sealed"
        );
        block
    }

    /// Appends a sealed block. Pure side effect, no validation.
    pub fn append(&mut self, block: Block) {
        tracing::info!(index = block.index, "block appended to chain");
        self.blocks.push(block);
    }

    /// Checks the linkage invariant over the whole chain: sequential
    /// 1-based indices, a genesis predecessor reference of `"0"`, and
    /// every later block referencing its predecessor's content hash.
    pub fn verify_linkage(&self) -> bool {
        for (i, block) in self.blocks.iter().enumerate() {
            if block.index != i as u64 + 1 {
                return false;
            }
            let expected = match i {
                0 => Block::GENESIS_PREVIOUS_HASH.to_owned(),
                _ => self.blocks[i - 1].hash(),
            };
            if block.previous_hash != expected {
                return false;
            }
        }
        true
    }
}
