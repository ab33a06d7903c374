//! Runtime configuration utilities for topic-atlas.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder for pipeline inputs and intermediate artifacts.
    pub data_dir: PathBuf,
    /// Root folder for terminal outputs (label index, shrunken model).
    pub outputs_dir: PathBuf,
    /// Tag prefixed to every artifact filename of one dataset.
    pub dataset_tag: String,
    /// Java launcher used for the external batch tools.
    pub java_bin: String,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let dataset_tag = env::var("DATASET_TAG").unwrap_or_else(|_| "SE".to_string());
        let java_bin = env::var("JAVA_BIN").unwrap_or_else(|_| "java".to_string());

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;
        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            data_dir,
            outputs_dir,
            dataset_tag,
            java_bin,
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }

    /// Superset (coarse) model.
    pub fn sup_model_path(&self) -> PathBuf {
        self.join_data(format!("{}_sup_model.json", self.dataset_tag))
    }

    /// Full fine-grained model, input to the splitter.
    pub fn sub_model_path(&self) -> PathBuf {
        self.join_data(format!("{}_sub_model.json", self.dataset_tag))
    }

    /// Super-to-sub mapping table.
    pub fn mapping_path(&self) -> PathBuf {
        self.join_data(format!("{}_sup_to_sub.csv", self.dataset_tag))
    }

    /// Per-partition model emitted by the splitter.
    pub fn partition_model_path(&self, partition_id: &str) -> PathBuf {
        self.join_data(format!(
            "{}_sub_model_{partition_id}.json",
            self.dataset_tag
        ))
    }

    /// Per-partition distribution file from the external tool.
    pub fn partition_distrib_path(&self, partition_id: &str) -> PathBuf {
        self.join_data(format!(
            "{}_sub_distrib_{partition_id}.json",
            self.dataset_tag
        ))
    }

    /// Per-partition hex map from the external tool.
    pub fn partition_map_path(&self, partition_id: &str) -> PathBuf {
        self.join_data(format!("{}_sub_map_{partition_id}.json", self.dataset_tag))
    }

    pub fn sup_distrib_path(&self) -> PathBuf {
        self.join_data(format!("{}_sup_distrib.json", self.dataset_tag))
    }

    pub fn sup_map_path(&self) -> PathBuf {
        self.join_data(format!("{}_sup_map.json", self.dataset_tag))
    }

    /// Inverted label index over the superset and partition maps.
    pub fn label_index_path(&self, top_labels: usize) -> PathBuf {
        self.join_output(format!(
            "{}_label_index_{top_labels}.json",
            self.dataset_tag
        ))
    }

    /// Shrunken labels-only rendition of the superset model.
    pub fn small_model_path(&self) -> PathBuf {
        self.join_output(format!("{}_sup_model_small.json", self.dataset_tag))
    }
}
