use crate::block::Block;
use crate::consensus::ProofOfWork;
use crate::constants::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// Owns the chain and the pending-transaction buffer. The ledger is the
/// sole mutator of both: blocks are immutable once appended and callers
/// only ever see read views or clones.
pub struct Ledger {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
}

impl Ledger {
    /// Construct the ledger with its genesis block already in place, so
    /// the chain is never empty for the rest of its lifetime.
    pub fn new() -> Self {
        let genesis = Block::new(
            1,
            chrono::Utc::now().timestamp(),
            Vec::new(),
            GENESIS_PROOF,
            GENESIS_PREVIOUS_HASH.to_string(),
        );

        Ledger {
            chain: vec![genesis],
            pending: Vec::new(),
        }
    }

    /// Buffer a transaction for the next sealed block, preserving
    /// submission order. Returns the index the next sealed block will
    /// receive. The return value is advisory only: if further seals or
    /// submissions intervene, the transaction may land in a later block
    /// than announced.
    pub fn submit_transaction(&mut self, sender: String, recipient: String, amount: f64) -> u64 {
        self.pending.push(Transaction::new(sender, recipient, amount));

        self.chain.len() as u64 + 1
    }

    /// Seal the pending buffer into a new block and append it.
    ///
    /// `proof` is trusted as-is; sealing does not re-check it against the
    /// difficulty predicate (that belongs to `verify`). `previous_hash`
    /// overrides the predecessor fingerprint when supplied. The buffer is
    /// cleared in the same step, and a clone of the new block is returned
    /// so chain history cannot be mutated through it.
    pub fn seal_block(
        &mut self,
        proof: u64,
        previous_hash: Option<String>,
    ) -> Result<Block, LedgerError> {
        let previous_hash = match previous_hash {
            Some(hash) => hash,
            None => self.last_block()?.fingerprint(),
        };

        let block = Block::new(
            self.chain.len() as u64 + 1,
            chrono::Utc::now().timestamp(),
            std::mem::take(&mut self.pending),
            proof,
            previous_hash,
        );

        self.chain.push(block.clone());
        Ok(block)
    }

    /// Most recently appended block. `EmptyChain` is unreachable after
    /// construction but surfaced explicitly rather than panicking.
    pub fn last_block(&self) -> Result<&Block, LedgerError> {
        self.chain.last().ok_or(LedgerError::EmptyChain)
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    /// Integrity pass over the whole chain: every block past genesis must
    /// link to the fingerprint of its predecessor and carry a proof that
    /// satisfies the predicate against the predecessor's proof. Reports
    /// the first violation found.
    pub fn verify(&self, pow: &ProofOfWork) -> Result<(), LedgerError> {
        for pair in self.chain.windows(2) {
            let (previous, block) = (&pair[0], &pair[1]);

            if block.previous_hash != previous.fingerprint() {
                return Err(LedgerError::BrokenLink { index: block.index });
            }
            if !pow.valid_proof(previous.proof, block.proof) {
                return Err(LedgerError::InvalidProof { index: block.index });
            }
        }

        Ok(())
    }
}
