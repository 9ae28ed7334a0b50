use anyhow::Context;
use clap::Parser;

use rtcatalog_cli::{CatalogConfig, Cli, commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CatalogConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    rtcatalog_observability::init_with(&config.log);
    tracing::debug!(matching = ?config.filter.facet_matching, reference_date = ?config.review.reference_date, "configuration loaded");

    let output = commands::run(cli.command, &config)?;
    println!("{output}");
    Ok(())
}
