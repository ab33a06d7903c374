//! CLI entry-point for the label index builder.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, labels};

/// Args for the `labels` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Number of numbered partition maps to scan.
    #[arg(long, default_value_t = 60)]
    pub partitions: usize,
    /// How many leading labels of each concept to index.
    #[arg(long, default_value_t = 10)]
    pub top_labels: usize,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    labels::index_map_labels(&settings, args.partitions, args.top_labels)
}
