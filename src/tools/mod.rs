//! Invocation of the external topic-mapping batch tools.
//!
//! The distribution and hex-map layout tools are pre-built jars treated as
//! black boxes; this module only sequences them over the partition models
//! and the superset model and checks their exit status. Their outputs are
//! passthrough artifacts, never parsed here.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use tokio::process::Command;
use tracing::info;

use crate::config::Settings;

const DISTRIBUTION_JAR: &str = "D2_DistributionByColumn.jar";
const HEX_MAP_JAR: &str = "E2_CreateHexMap.jar";

/// Linkage criterion understood by the hex-map layout tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LinkageMethod {
    Min,
    Average,
    Max,
}

impl LinkageMethod {
    fn as_arg(self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Average => "AVERAGE",
            Self::Max => "MAX",
        }
    }
}

/// Hex-map layout parameters for one tier of the hierarchy.
#[derive(Debug, Clone)]
pub struct LayoutParams {
    pub clusters: u32,
    pub method: LinkageMethod,
    pub surround_percentage: f32,
    pub include_linkage: bool,
    /// Topic ids whose labels the layout tool treats as generic.
    pub generic_topics: Vec<u32>,
}

/// Full configuration for one map-pipeline run.
#[derive(Debug, Clone)]
pub struct MapJobConfig {
    /// Directory holding the pipeline's batch-tool jars.
    pub modules_dir: PathBuf,
    pub heap_min: String,
    pub heap_max: String,
    /// Column the distribution tool aggregates by.
    pub distribution_column: String,
    /// Number of numbered partition models to process.
    pub partitions: usize,
    pub sub_layout: LayoutParams,
    pub sup_layout: LayoutParams,
}

/// Run both tools over every partition model, then over the superset
/// model, strictly in sequence.
pub async fn run_map_pipeline(config: &MapJobConfig, settings: &Settings) -> Result<()> {
    let started = Instant::now();

    for i in 0..config.partitions {
        let id = i.to_string();
        let model = settings.partition_model_path(&id);
        run_distribution(config, settings, &model, &settings.partition_distrib_path(&id)).await?;
        run_hex_map(
            config,
            settings,
            &model,
            &settings.partition_map_path(&id),
            &config.sub_layout,
        )
        .await?;
        info!(
            partition = i,
            elapsed_s = started.elapsed().as_secs_f64(),
            "partition maps done"
        );
    }

    let sup_model = settings.sup_model_path();
    run_distribution(config, settings, &sup_model, &settings.sup_distrib_path()).await?;
    run_hex_map(
        config,
        settings,
        &sup_model,
        &settings.sup_map_path(),
        &config.sup_layout,
    )
    .await?;

    info!(
        elapsed_s = started.elapsed().as_secs_f64(),
        "map pipeline completed"
    );
    Ok(())
}

async fn run_distribution(
    config: &MapJobConfig,
    settings: &Settings,
    model: &Path,
    output: &Path,
) -> Result<()> {
    let jar = config.modules_dir.join(DISTRIBUTION_JAR);
    let mut cmd = java_command(config, settings, &jar);
    cmd.arg(model).arg(output).arg(&config.distribution_column);
    execute(cmd, &jar).await
}

async fn run_hex_map(
    config: &MapJobConfig,
    settings: &Settings,
    model: &Path,
    output: &Path,
    layout: &LayoutParams,
) -> Result<()> {
    let jar = config.modules_dir.join(HEX_MAP_JAR);
    let mut cmd = java_command(config, settings, &jar);
    cmd.arg(model)
        .arg(output)
        .arg(layout.clusters.to_string())
        .arg(layout.method.as_arg())
        .arg(layout.surround_percentage.to_string())
        .arg(layout.include_linkage.to_string());
    for topic in &layout.generic_topics {
        cmd.arg(topic.to_string());
    }
    execute(cmd, &jar).await
}

fn java_command(config: &MapJobConfig, settings: &Settings, jar: &Path) -> Command {
    let mut cmd = Command::new(&settings.java_bin);
    cmd.arg(format!("-Xms{}", config.heap_min))
        .arg(format!("-Xmx{}", config.heap_max))
        .arg("-jar")
        .arg(jar);
    cmd
}

async fn execute(mut cmd: Command, jar: &Path) -> Result<()> {
    info!(tool = %jar.display(), "running batch tool");
    let status = cmd
        .status()
        .await
        .with_context(|| format!("launching {}", jar.display()))?;
    if !status.success() {
        bail!("batch tool {} exited with {status}", jar.display());
    }
    Ok(())
}
