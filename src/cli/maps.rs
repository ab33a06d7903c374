//! CLI entry-point for the external map-tool pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args as ClapArgs};
use tracing::instrument;

use crate::{
    config::Settings,
    tools::{self, LayoutParams, LinkageMethod, MapJobConfig},
};

/// Args for the `maps` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Directory holding the pipeline's batch-tool jars.
    #[arg(long, default_value = "../module_topic_mapping_pipeline/modules")]
    pub modules_dir: PathBuf,
    /// Column the distribution tool aggregates by.
    #[arg(long)]
    pub column: String,
    /// Number of numbered partition models to process.
    #[arg(long, default_value_t = 60)]
    pub partitions: usize,
    /// Cluster count for partition maps.
    #[arg(long, default_value_t = 1)]
    pub sub_clusters: u32,
    /// Cluster count for the superset map.
    #[arg(long, default_value_t = 8)]
    pub sup_clusters: u32,
    /// Linkage criterion for hex-map clustering.
    #[arg(long, default_value = "max", value_enum)]
    pub method: LinkageMethod,
    /// Surround percentage passed to the layout tool.
    #[arg(long, default_value_t = 1.0)]
    pub surround: f32,
    /// Whether the layout tool should keep linkage detail on the maps.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub include_linkage: bool,
    /// Generic topic ids for partition maps.
    #[arg(long, value_delimiter = ',')]
    pub sub_generic: Vec<u32>,
    /// Generic topic ids for the superset map.
    #[arg(long, value_delimiter = ',')]
    pub sup_generic: Vec<u32>,
    /// Java heap floor.
    #[arg(long, default_value = "1G")]
    pub heap_min: String,
    /// Java heap ceiling.
    #[arg(long, default_value = "6G")]
    pub heap_max: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let config = MapJobConfig {
        modules_dir: args.modules_dir,
        heap_min: args.heap_min,
        heap_max: args.heap_max,
        distribution_column: args.column,
        partitions: args.partitions,
        sub_layout: LayoutParams {
            clusters: args.sub_clusters,
            method: args.method,
            surround_percentage: args.surround,
            include_linkage: args.include_linkage,
            generic_topics: args.sub_generic,
        },
        sup_layout: LayoutParams {
            clusters: args.sup_clusters,
            method: args.method,
            surround_percentage: args.surround,
            include_linkage: args.include_linkage,
            generic_topics: args.sup_generic,
        },
    };
    tools::run_map_pipeline(&config, &settings).await
}
