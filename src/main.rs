//! CLI entry point for the pipe-tile puzzle tool

use clap::Parser;
use pipemaze::io::cli::Cli;
use pipemaze::io::logging::init_logging;

fn main() -> pipemaze::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    cli.run()
}
