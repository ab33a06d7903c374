//! Command-line interface wiring for topic-atlas.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod labels;
pub mod maps;
pub mod shrink;
pub mod split;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Hierarchical topic-model map pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Split(args) => split::run(args, settings).await,
            Commands::Maps(args) => maps::run(args, settings).await,
            Commands::Labels(args) => labels::run(args, settings).await,
            Commands::Shrink(args) => shrink::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split the full model into per-partition sub-models.
    Split(split::Args),
    /// Run the external distribution and hex-map tools over all models.
    Maps(maps::Args),
    /// Build the label-to-concept inverted index from the map files.
    Labels(labels::Args),
    /// Shrink a model down to its per-topic labels.
    Shrink(shrink::Args),
}
