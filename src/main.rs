//! CLI entry point for the hat patch generator

use clap::Parser;
use monotile::io::cli::{Cli, PatchRunner};
use monotile::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

fn main() -> monotile::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runner = PatchRunner::new(cli);
    runner.run()?;
    Ok(())
}
