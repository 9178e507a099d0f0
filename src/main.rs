//! Recipe graph generator
//!
//! Prints a Graphviz graph of the recipes needed to craft one Factorio item.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use recipe_graph::config::{Cli, Config, DEFAULT_LOG_FILTER};
use recipe_graph::{calculator, extract, render, universe};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli(Cli::parse());

    let extracted = extract::load_recipes(&config.data_path).with_context(|| {
        format!(
            "Failed to load recipes from {}",
            config.data_path.display()
        )
    })?;
    let (recipes, _stats) = universe::build_universe(extracted);

    let chain = calculator::filter_target(&recipes, &config.target);
    if chain.is_empty() {
        warn!(
            "No recipe produces '{}' ({} producible items known)",
            config.target,
            recipes.producible_items().len()
        );
    } else {
        info!("{} recipes lead to {}", chain.len(), config.target);
    }

    println!("{}", render::render(&config.factorio_path, &chain));
    Ok(())
}
