//! Super-to-sub partition mapping table.

use std::path::Path;

use anyhow::{bail, Context, Result};

/// One mapping-table row: a partition and the full-model topic ids that
/// belong to it. Indices keep the table's order and are neither required
/// to be sorted nor contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub partition_id: String,
    pub topic_indices: Vec<usize>,
}

/// Load the comma-separated mapping table, discarding the header row.
///
/// Row shape is `partitionId, <ignored>, topicIdx0, topicIdx1, ...`;
/// trailing empty cells are skipped. A non-numeric topic cell aborts the
/// whole load.
pub fn load_mapping(path: &Path) -> Result<Vec<MappingEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening mapping table {}", path.display()))?;

    let mut entries = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        // header occupies line 1
        let line = offset + 2;
        let record =
            record.with_context(|| format!("reading mapping table {}", path.display()))?;
        let mut cells = record.iter();

        let partition_id = match cells.next().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => bail!(
                "mapping table {}: line {line} has no partition id",
                path.display()
            ),
        };
        // second column is a display label for the partition, unused here
        cells.next();

        let mut topic_indices = Vec::new();
        for cell in cells {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            let index: usize = cell.parse().with_context(|| {
                format!(
                    "mapping table {}: line {line} has non-numeric topic index {cell:?}",
                    path.display()
                )
            })?;
            topic_indices.push(index);
        }

        entries.push(MappingEntry {
            partition_id,
            topic_indices,
        });
    }

    Ok(entries)
}
