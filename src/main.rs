use blk_reader::{Blockchain, CLAM_MAGIC, CLAM_MAINNET};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <blocks-dir> [--magic <8-hex-digits>] [--limit <N>]",
            args[0]
        );
        std::process::exit(1);
    }

    let blocks_dir = &args[1];
    let mut magic = CLAM_MAGIC;
    let mut limit: Option<usize> = None;

    // Parse --magic argument
    if let Some(magic_idx) = args.iter().position(|arg| arg == "--magic") {
        match args.get(magic_idx + 1).map(|s| hex::decode(s)) {
            Some(Ok(bytes)) if bytes.len() == 4 => {
                magic.copy_from_slice(&bytes);
            }
            _ => {
                eprintln!("ERROR: --magic requires exactly 8 hex digits, e.g. 03223515");
                std::process::exit(1);
            }
        }
    }

    // Parse --limit argument
    if let Some(limit_idx) = args.iter().position(|arg| arg == "--limit") {
        match args.get(limit_idx + 1).and_then(|s| s.parse().ok()) {
            Some(n) => limit = Some(n),
            None => {
                eprintln!("ERROR: --limit requires a number.");
                std::process::exit(1);
            }
        }
    }

    println!("Scanning block files in: {}", blocks_dir);
    println!("{}", "=".repeat(60));

    let mut chain = match Blockchain::new(blocks_dir, magic, CLAM_MAINNET) {
        Ok(chain) => chain,
        Err(e) => {
            eprintln!("\nERROR: Failed to open blockchain storage");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let mut count: usize = 0;
    let mut tx_total: usize = 0;
    let mut stake_total: usize = 0;

    for result in chain.iter_blocks() {
        let block = match result {
            Ok(block) => block,
            Err(e) => {
                eprintln!("\nERROR: Failed to read block {}", count);
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        };

        let kind = if block.is_proof_of_stake() {
            stake_total += 1;
            "stake"
        } else {
            "work"
        };
        println!(
            "  {}. {} v{} time={} txs={} [{}]",
            count,
            block.hash,
            block.version,
            block.time,
            block.txs.len(),
            kind
        );

        count += 1;
        tx_total += block.txs.len();
        if limit.is_some_and(|n| count >= n) {
            break;
        }
    }

    println!("{}", "=".repeat(60));
    println!("Blocks read: {}", count);
    println!("  Transactions: {}", tx_total);
    println!("  Proof-of-stake blocks: {}", stake_total);
}
