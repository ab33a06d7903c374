//! CLI entry-point for the sub-model splitter.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, extract};

/// Args for the `split` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Full model to split; defaults to the dataset's sub model.
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Super-to-sub mapping table; defaults to the dataset's table.
    #[arg(long)]
    pub mapping: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let model = args.model.unwrap_or_else(|| settings.sub_model_path());
    let mapping = args.mapping.unwrap_or_else(|| settings.mapping_path());
    extract::split_model(&model, &mapping, &settings)
}
