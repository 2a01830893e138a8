//! CLI entry point for replaying stroke scripts onto an autotiled map

use autotile::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> autotile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
