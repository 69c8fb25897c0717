use crate::block::Block;
use crate::consensus::ProofOfWork;
use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::miner_info;
use std::time::Instant;

/// Run the proof search against the ledger's last proof and seal the
/// pending buffer into a new block with the result.
pub fn mine_block(ledger: &mut Ledger, pow: &ProofOfWork) -> Result<Block, LedgerError> {
    let last_proof = ledger.last_block()?.proof;

    miner_info!("Starting proof search with difficulty: {}", pow.difficulty);
    let start_time = Instant::now();

    let proof = pow.search_proof(last_proof);
    miner_info!(
        "Proof found: {} after {} candidates (Elapsed: {:?})",
        proof,
        proof + 1,
        start_time.elapsed()
    );

    let block = ledger.seal_block(proof, None)?;
    miner_info!(
        "Block {} sealed with {} transaction(s), previous_hash: {}",
        block.index,
        block.transactions.len(),
        block.previous_hash
    );

    Ok(block)
}
