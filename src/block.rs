use crate::transaction::Transaction;
use hex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    pub fn new(
        index: u64,
        timestamp: i64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Self {
        Block {
            index,
            timestamp,
            transactions,
            proof,
            previous_hash,
        }
    }

    /// SHA-256 fingerprint of the full block contents, hex encoded.
    ///
    /// The block is rendered through `serde_json::Value` first: its object
    /// keys are stored sorted, so two logically identical blocks always
    /// serialize to the same bytes regardless of field iteration order.
    /// The chain-link invariant depends on that bit-exact reproducibility.
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::to_value(self)
            .expect("block contents are plain data and always serialize");

        let mut hasher = Sha256::new();
        hasher.update(canonical.to_string());
        let result = hasher.finalize();

        hex::encode(result)
    }
}
