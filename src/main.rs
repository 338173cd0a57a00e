//! cuesplit - batch-convert cue-sheet albums into tagged per-track FLACs.

use std::path::Path;

use cuesplit::batch;
use cuesplit::config::{Config, Tools};
use cuesplit::logging;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        println!("Usage: cuesplit /path/to/music");
        return;
    }

    logging::init_logging();

    let (completed, failed) =
        batch::run_batch(Path::new(&args[1]), Config::default(), Tools::default()).await;
    log::info!("Batch finished: {} completed, {} failed", completed, failed);
}
