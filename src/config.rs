//! Run configuration: command line plus environment

use std::env;
use std::path::PathBuf;

use clap::Parser;

/// Environment variable overriding where the data dump is read from
pub const DATA_ENV: &str = "RECIPE_GRAPH_DATA";

/// Data dump location when the environment does not say otherwise
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "recipe-graph")]
#[command(about = "Render the recipes needed to craft a Factorio item as a Graphviz graph")]
pub struct Cli {
    /// Factorio install directory, used to locate item icons
    pub factorio_path: PathBuf,

    /// Item to build the graph for (e.g. "electronic-circuit")
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub factorio_path: PathBuf,
    pub target: String,
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self::with_data_path(cli, env::var_os(DATA_ENV).map(PathBuf::from))
    }

    fn with_data_path(cli: Cli, data_path: Option<PathBuf>) -> Self {
        Self {
            factorio_path: cli.factorio_path,
            target: cli.target,
            data_path: data_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
        }
    }
}
