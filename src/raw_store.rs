use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_RAW_OUTPUT: &str = "extracted_raw_problems.json";

/// Flattened text of one document package, keyed by its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub filename: String,
    pub content: String,
}

pub fn save(path: &Path, docs: &[RawDocument]) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(docs)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), documents = docs.len(), "Saved extracted text");
    Ok(())
}

pub fn load(path: &Path) -> Result<Vec<RawDocument>> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let docs: Vec<RawDocument> = serde_json::from_str(&json)
        .with_context(|| format!("Invalid extracted-text file {}", path.display()))?;
    Ok(docs)
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}
