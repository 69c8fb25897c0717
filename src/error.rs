use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("chain is empty, ledger was used before genesis construction")]
    EmptyChain,
    #[error("block {index} does not link to the fingerprint of its predecessor")]
    BrokenLink { index: u64 },
    #[error("block {index} carries a proof that fails the difficulty predicate")]
    InvalidProof { index: u64 },
}
