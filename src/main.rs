#[macro_use]
extern crate log;

mod block;
mod config;
mod consensus;
mod constants;
mod error;
mod ledger;
#[macro_use]
mod logger;
mod miner;
mod transaction;

use crate::config::{load_config, Config};
use crate::consensus::ProofOfWork;
use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::logger::init_logger;
use crate::miner::mine_block;
use clap::Parser;

/// Struct to define CLI arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of leading zero hex characters a valid proof must produce
    #[arg(short, long, default_value_t = constants::DEFAULT_DIFFICULTY)]
    difficulty: usize,

    /// Number of blocks to mine in the demo run
    #[arg(short, long, default_value_t = 1)]
    blocks: u64,

    /// Path to a YAML configuration file (overrides the flags above)
    #[arg(short, long, default_value = "")]
    config: String,
}

fn main() -> Result<(), LedgerError> {
    init_logger();

    // Parse command-line arguments
    let args = Args::parse();

    let config = if args.config.is_empty() {
        Config {
            difficulty: args.difficulty,
            blocks_to_mine: args.blocks,
        }
    } else {
        load_config(&args.config).expect("Failed to parse configuration file.")
    };

    let pow = ProofOfWork::new(config.difficulty);
    let mut ledger = Ledger::new();
    ledger_info!(
        "Ledger initialized, genesis proof: {}",
        ledger.last_block()?.proof
    );

    for round in 0..config.blocks_to_mine {
        let next = ledger.submit_transaction(
            "Alice".to_string(),
            "Bob".to_string(),
            10.0 + round as f64,
        );
        ledger.submit_transaction("Bob".to_string(), "Carol".to_string(), 5.0);
        ledger_info!(
            "Buffered {} transaction(s) destined for block {}",
            ledger.pending().len(),
            next
        );

        mine_block(&mut ledger, &pow)?;
    }

    ledger.verify(&pow)?;
    ledger_info!("Chain verified, {} block(s) total", ledger.chain().len());

    println!(
        "{}",
        serde_json::to_string_pretty(ledger.chain()).expect("chain always serializes")
    );

    Ok(())
}
