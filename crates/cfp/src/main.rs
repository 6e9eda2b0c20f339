//! Cache Frontend Pool - Entry Point
//!
//! Binary entry point; lives in the `cfp` facade crate next to the library.

// Force-link cfp-providers to ensure linkme registrations are included
extern crate cfp_providers;

use cfp::cli::{Cli, run};
use cfp_infrastructure::logging::init_logging;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loader = cli.loader();
    let config = loader.load()?;
    init_logging(&config.logging)?;
    loader.log_source();

    let mut stdout = std::io::stdout();
    run(&cli, &mut stdout).await
}
