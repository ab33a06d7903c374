//! Sub-model extraction: filter and re-index one partition of a full
//! topic model.
//!
//! Each mapping-table entry names the full-model topic ids owned by one
//! partition. The extractor rebuilds every model section around those ids:
//! topics and the similarity matrix are restricted and reordered, rows are
//! kept only when they still carry weight, and topic ids are renumbered to
//! positions within the partition.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::Settings;
use crate::data::mapping::{self, MappingEntry};
use crate::data::model::{ModelRow, TopicModel};

/// Fatal extraction failures. Out-of-range ids are never clamped or
/// skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("topic index {index} out of range for model with {len} topics")]
    TopicDetails { index: usize, len: usize },
    #[error("topic index {index} out of range for similarity matrix with {len} rows")]
    SimilarityRow { index: usize, len: usize },
    #[error("topic index {index} out of range for similarity row {row} of length {len}")]
    SimilarityColumn { index: usize, row: usize, len: usize },
    #[error("topic index {index} out of range for distribution of row {row} (length {len})")]
    RowDistribution { index: usize, row: usize, len: usize },
}

/// Build the sub-model for one mapping entry.
///
/// The result's topic id k is `entry.topic_indices[k]` in the full model;
/// its metadata is an independent snapshot with only `numTopics` replaced.
pub fn extract_sub_model(
    full: &TopicModel,
    entry: &MappingEntry,
) -> Result<TopicModel, ExtractError> {
    let indices = &entry.topic_indices;

    let len = full.topic_details.len();
    if let Some(&index) = indices.iter().find(|&&i| i >= len) {
        return Err(ExtractError::TopicDetails { index, len });
    }

    let mut metadata = full.metadata.clone();
    metadata.insert(
        "numTopics".to_string(),
        Value::String(indices.len().to_string()),
    );

    let mut row_data = Vec::new();
    for (position, row) in full.row_data.iter().enumerate() {
        if let Some(kept) = restrict_row(row, indices, position)? {
            row_data.push(kept);
        }
    }

    let topic_details = indices
        .iter()
        .map(|&i| full.topic_details[i].clone())
        .collect();

    let mut topic_similarities = Vec::with_capacity(indices.len());
    for &a in indices {
        let source = full
            .topic_similarities
            .get(a)
            .ok_or(ExtractError::SimilarityRow {
                index: a,
                len: full.topic_similarities.len(),
            })?;
        let mut sub_row = Vec::with_capacity(indices.len());
        for &b in indices {
            let value = source
                .get(b)
                .copied()
                .ok_or(ExtractError::SimilarityColumn {
                    index: b,
                    row: a,
                    len: source.len(),
                })?;
            sub_row.push(value);
        }
        topic_similarities.push(sub_row);
    }

    Ok(TopicModel {
        metadata,
        failed_retrievals: full.failed_retrievals.clone(),
        time_slices: full.time_slices.clone(),
        row_data,
        topic_details,
        topic_similarities,
    })
}

/// Predicate-then-transform for one row: a row survives only when it is
/// included in the full model and its distribution, restricted to the
/// partition's topics, sums to strictly more than zero.
fn restrict_row(
    row: &ModelRow,
    indices: &[usize],
    position: usize,
) -> Result<Option<ModelRow>, ExtractError> {
    if !row.included_in_model {
        return Ok(None);
    }
    let restricted = restrict_distribution(&row.topic_distribution, indices, position)?;
    if restricted.iter().sum::<f64>() > 0.0 {
        let mut kept = row.clone();
        kept.topic_distribution = restricted;
        Ok(Some(kept))
    } else {
        Ok(None)
    }
}

fn restrict_distribution(
    distribution: &[f64],
    indices: &[usize],
    position: usize,
) -> Result<Vec<f64>, ExtractError> {
    indices
        .iter()
        .map(|&index| {
            distribution
                .get(index)
                .copied()
                .ok_or(ExtractError::RowDistribution {
                    index,
                    row: position,
                    len: distribution.len(),
                })
        })
        .collect()
}

/// Split one full model into per-partition files, one per mapping row,
/// in table order.
pub fn split_model(model_path: &Path, mapping_path: &Path, settings: &Settings) -> Result<()> {
    let started = Instant::now();

    let mapping = mapping::load_mapping(mapping_path)?;
    let full = TopicModel::load(model_path)?;
    info!(
        partitions = mapping.len(),
        rows = full.row_data.len(),
        topics = full.topic_details.len(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "inputs loaded"
    );

    for (index, entry) in mapping.iter().enumerate() {
        let sub = extract_sub_model(&full, entry)
            .with_context(|| format!("extracting partition {}", entry.partition_id))?;
        let path = settings.partition_model_path(&entry.partition_id);
        sub.save(&path)?;
        info!(
            partition = %entry.partition_id,
            index,
            kept_rows = sub.row_data.len(),
            elapsed_s = started.elapsed().as_secs_f64(),
            "wrote sub-model"
        );
    }

    info!(elapsed_s = started.elapsed().as_secs_f64(), "split completed");
    Ok(())
}
