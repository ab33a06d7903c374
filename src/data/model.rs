//! Topic-model documents: types, JSON I/O, and the shrunken label summary.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A full or partition-scoped topic model as serialized by the modelling
/// pipeline. Field order matters only for readability of the emitted JSON;
/// the canonical topic id is the index into `topic_details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicModel {
    /// Scalar configuration fields; `numTopics` is a string-encoded integer.
    pub metadata: Map<String, Value>,
    #[serde(rename = "failedRetrievals")]
    pub failed_retrievals: Value,
    #[serde(rename = "timeSlices")]
    pub time_slices: Value,
    #[serde(rename = "rowData")]
    pub row_data: Vec<ModelRow>,
    #[serde(rename = "topicDetails")]
    pub topic_details: Vec<Topic>,
    #[serde(rename = "topicSimilarities")]
    pub topic_similarities: Vec<Vec<f64>>,
}

/// One scored document row. Only the two `[REQ]` fields below are
/// interpreted; everything else is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRow {
    #[serde(rename = "[REQ]IncludedInModel")]
    pub included_in_model: bool,
    /// Weight per full-model topic id. The producer omits this on rows it
    /// excluded, hence the default.
    #[serde(rename = "[REQ]TopicDistribution", default)]
    pub topic_distribution: Vec<f64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One topic record; opaque except for its labelled top words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    #[serde(rename = "topWords")]
    pub top_words: Vec<TopWord>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A labelled entry in a topic's `topWords` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopWord {
    pub label: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// The shrunken model summary: per-topic ordered label lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSummary {
    pub topics: Vec<Vec<String>>,
}

impl TopicModel {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading topic model {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing topic model {}", path.display()))
    }

    /// Write the model as a compact JSON document, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("writing topic model {}", path.display()))
    }

    /// Reduce the model to its per-topic label lists, in topic-id order.
    pub fn label_summary(&self) -> LabelSummary {
        let topics = self
            .topic_details
            .iter()
            .map(|topic| topic.top_words.iter().map(|w| w.label.clone()).collect())
            .collect();
        LabelSummary { topics }
    }
}

impl LabelSummary {
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("writing label summary {}", path.display()))
    }
}
