use crate::constants::DEFAULT_DIFFICULTY;
use hex;
use sha2::{Digest, Sha256};

/// The puzzle engine: pure functions over integers, no ledger state.
#[derive(Clone, Copy, Debug)]
pub struct ProofOfWork {
    pub difficulty: usize,
}

impl Default for ProofOfWork {
    fn default() -> Self {
        ProofOfWork {
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl ProofOfWork {
    pub fn new(difficulty: usize) -> Self {
        ProofOfWork { difficulty }
    }

    /// Does SHA-256 of the concatenated decimal renderings of `last_proof`
    /// and `proof` start with `difficulty` leading zero hex characters?
    pub fn valid_proof(&self, last_proof: u64, proof: u64) -> bool {
        let guess = format!("{}{}", last_proof, proof);

        let mut hasher = Sha256::new();
        hasher.update(guess);
        let guess_hash = hex::encode(hasher.finalize());

        guess_hash.starts_with(&"0".repeat(self.difficulty))
    }

    /// Linear scan from 0, returning the smallest proof satisfying the
    /// predicate against `last_proof`. Deterministic, CPU-bound, and
    /// unbounded: expected cost grows as 16^difficulty.
    pub fn search_proof(&self, last_proof: u64) -> u64 {
        let mut proof = 0;
        while !self.valid_proof(last_proof, proof) {
            proof += 1;
        }

        proof
    }

    /// Same scan with an iteration cap, for callers that cannot afford an
    /// open-ended search. Returns `None` when no proof was found among the
    /// first `max_candidates` candidates.
    #[allow(dead_code)]
    pub fn search_proof_capped(&self, last_proof: u64, max_candidates: u64) -> Option<u64> {
        (0..max_candidates).find(|&proof| self.valid_proof(last_proof, proof))
    }
}
