//! cuesplit-tag - tag already-split albums from their cue sheets.
//!
//! For directories where the splitting already happened (or was done by
//! hand), this walks a tree and runs only the pregap-cleanup and tagging
//! steps for every cue sheet it finds.

use std::path::Path;

use cuesplit::config::{Config, Tools};
use cuesplit::logging;
use cuesplit::tracks;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        println!("Usage: cuesplit-tag /path/to/music");
        return;
    }

    logging::init_logging();

    tracks::tag_tree(Path::new(&args[1]), &Config::default(), &Tools::default()).await;
}
