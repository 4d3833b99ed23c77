use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info};
use travelgenie::{CatalogStore, RecommendationPipeline, Shell, TravelGenieConfig, logging};

fn main() -> Result<ExitCode> {
    let config = TravelGenieConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;

    let store = CatalogStore::from_path(&config.catalog.path);
    let catalog = match store.load() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    info!(
        "Using catalog {} ({} destinations)",
        catalog.source_name(),
        catalog.len()
    );

    let stdin = io::stdin();
    let mut shell = Shell::new(
        RecommendationPipeline::new(catalog),
        &config,
        stdin.lock(),
        io::stdout(),
    );
    shell.run().context("Interactive session failed")?;

    Ok(ExitCode::SUCCESS)
}
