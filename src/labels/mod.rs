//! Inverted label index over the map hierarchy.
//!
//! Scans the superset hex map plus every partition hex map and records,
//! for each label, the concepts it appears on. The index keys keep first
//! encounter order: superset concepts first, then partitions 0..n.

use std::time::Instant;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;
use tracing::info;

use crate::config::Settings;
use crate::data::hexmap::{Concept, HexMap};

/// Label filtered out of the index: the layout tool's placeholder for
/// topics it could not name.
const UNCLASSIFIED: &str = "Unclassified";

/// One place a label appears across the map hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelSite {
    Superset { concept: Value },
    Partition { partition: usize, concept: Value },
}

// Sites serialize as bare location tuples: `[conceptId]` on the superset
// map, `[partition, conceptId]` on a partition map.
impl Serialize for LabelSite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LabelSite::Superset { concept } => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(concept)?;
                seq.end()
            }
            LabelSite::Partition { partition, concept } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(partition)?;
                seq.serialize_element(concept)?;
                seq.end()
            }
        }
    }
}

pub type LabelIndex = IndexMap<String, Vec<LabelSite>>;

/// Build the index from already-loaded maps. `top_labels` bounds how many
/// leading label entries of each concept are considered.
pub fn build_label_index(
    superset: &HexMap,
    partitions: &[HexMap],
    top_labels: usize,
) -> LabelIndex {
    let mut index = LabelIndex::new();

    for concept in &superset.concepts_data {
        for label in concept_labels(concept, top_labels) {
            index.entry(label).or_default().push(LabelSite::Superset {
                concept: concept.concept_id.clone(),
            });
        }
    }

    for (partition, map) in partitions.iter().enumerate() {
        for concept in &map.concepts_data {
            for label in concept_labels(concept, top_labels) {
                index.entry(label).or_default().push(LabelSite::Partition {
                    partition,
                    concept: concept.concept_id.clone(),
                });
            }
        }
    }

    index
}

/// Eagerly materialised usable labels of one concept, in entry order.
fn concept_labels(concept: &Concept, top_labels: usize) -> Vec<String> {
    concept
        .labels
        .iter()
        .take(top_labels)
        .map(|entry| entry.label.clone())
        .filter(|label| !label.is_empty() && label != UNCLASSIFIED)
        .collect()
}

/// Read the superset map and `partitions` numbered partition maps, build
/// the index, and write it as one JSON object.
pub fn index_map_labels(settings: &Settings, partitions: usize, top_labels: usize) -> Result<()> {
    let started = Instant::now();

    let superset = HexMap::load(&settings.sup_map_path())?;
    let mut partition_maps = Vec::with_capacity(partitions);
    for i in 0..partitions {
        partition_maps.push(HexMap::load(&settings.partition_map_path(&i.to_string()))?);
    }
    info!(
        partitions,
        elapsed_s = started.elapsed().as_secs_f64(),
        "map files loaded"
    );

    let index = build_label_index(&superset, &partition_maps, top_labels);

    let path = settings.label_index_path(top_labels);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let raw = serde_json::to_string(&index)?;
    std::fs::write(&path, raw)
        .with_context(|| format!("writing label index {}", path.display()))?;

    info!(
        labels = index.len(),
        path = %path.display(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "wrote label index"
    );
    Ok(())
}
