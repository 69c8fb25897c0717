pub const GENESIS_PROOF: u64 = 100; // Bootstrap proof carried by the genesis block
pub const GENESIS_PREVIOUS_HASH: &str = "1"; // Fixed sentinel, genesis has no real predecessor
pub const DEFAULT_DIFFICULTY: usize = 4; // Leading zero hex characters a valid proof must produce
