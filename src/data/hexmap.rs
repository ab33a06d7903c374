//! Hexagonal map files produced by the layout tool.
//!
//! Only the `conceptsData` shape consumed by the label index is modelled;
//! map files are passthrough artifacts everywhere else.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct HexMap {
    #[serde(rename = "conceptsData")]
    pub concepts_data: Vec<Concept>,
}

/// One laid-out concept with its ordered label entries.
#[derive(Debug, Clone, Deserialize)]
pub struct Concept {
    #[serde(rename = "conceptId")]
    pub concept_id: Value,
    #[serde(default)]
    pub labels: Vec<ConceptLabel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConceptLabel {
    pub label: String,
}

impl HexMap {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading hex map {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing hex map {}", path.display()))
    }
}
