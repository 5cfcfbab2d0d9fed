use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::docx::{self, ExtractError};
use crate::raw_store::RawDocument;

const PACKAGE_SUFFIX: &str = ".docx";
/// Word's owner/lock files sit next to the open document with this prefix.
const LOCK_FILE_PREFIX: &str = "~$";

/// A document the extractor gave up on.
#[derive(Debug)]
pub struct SkippedDocument {
    pub filename: String,
    pub error: ExtractError,
}

#[derive(Debug, Default)]
pub struct ExtractionBatch {
    pub documents: Vec<RawDocument>,
    pub skipped: Vec<SkippedDocument>,
}

pub fn is_document_package(name: &str) -> bool {
    name.ends_with(PACKAGE_SUFFIX) && !name.starts_with(LOCK_FILE_PREFIX)
}

/// List the document packages directly inside `dir`, sorted by file name.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!(file = ?name, "Skipping non UTF-8 file name");
            continue;
        };
        if !is_document_package(name) || !entry.path().is_file() {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Extract every path independently; failures are logged and set aside.
pub fn extract_all(paths: &[PathBuf], progress: &ProgressBar) -> ExtractionBatch {
    let batch = paths
        .iter()
        .fold(ExtractionBatch::default(), |mut batch, path| {
            let filename = file_name(path);
            match docx::extract_text(path) {
                Ok(content) => {
                    debug!(file = %filename, chars = content.chars().count(), "Extracted");
                    batch.documents.push(RawDocument { filename, content });
                }
                Err(error) => {
                    warn!(file = %filename, %error, "Skipping document");
                    batch.skipped.push(SkippedDocument { filename, error });
                }
            }
            progress.inc(1);
            batch
        });
    progress.finish_and_clear();
    batch
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
