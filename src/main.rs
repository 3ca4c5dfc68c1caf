//! CLI entry point for the hybrid-score collage builder

use clap::Parser;
use hybridcollage::io::cli::{Cli, CollageRunner};

fn main() -> hybridcollage::Result<()> {
    let cli = Cli::parse();
    let runner = CollageRunner::new(cli);
    runner.process()
}
