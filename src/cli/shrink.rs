//! CLI entry-point for the model shrinker.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{config::Settings, data::model::TopicModel};

/// Args for the `shrink` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Model to shrink; defaults to the dataset's superset model.
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Output path; defaults under the outputs directory.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let model_path = args.model.unwrap_or_else(|| settings.sup_model_path());
    let out_path = args.out.unwrap_or_else(|| settings.small_model_path());

    let model = TopicModel::load(&model_path)?;
    let summary = model.label_summary();
    summary.save(&out_path)?;

    info!(
        topics = summary.topics.len(),
        path = %out_path.display(),
        "wrote shrunken model"
    );
    Ok(())
}
