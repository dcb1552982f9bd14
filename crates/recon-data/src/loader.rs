//! Export file loading.
//!
//! Reading the file is the only step that suspends; parsing runs to
//! completion once the text is in memory.

use std::path::Path;

use recon_core::error::{ReconError, Result};
use recon_core::models::Dataset;
use tracing::{debug, info};

use crate::reader::parse_csv;

/// `true` when `path` ends in `.csv`, ignoring case.
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Read and parse the export at `path`.
///
/// Fails with [`ReconError::NotCsv`] for other extensions,
/// [`ReconError::FileRead`] when the file cannot be read as UTF-8 text, and
/// [`ReconError::EmptyDataset`] when no records survive parsing.
pub async fn load_dataset(path: &Path) -> Result<Dataset> {
    if !has_csv_extension(path) {
        return Err(ReconError::NotCsv(path.to_path_buf()));
    }

    debug!("Reading {}", path.display());
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReconError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    load_dataset_from_text(path, &text)
}

/// Parse already-read `text` as if it came from `path`.
pub fn load_dataset_from_text(path: &Path, text: &str) -> Result<Dataset> {
    if !has_csv_extension(path) {
        return Err(ReconError::NotCsv(path.to_path_buf()));
    }

    let dataset = parse_csv(text)?;
    if dataset.is_empty() {
        return Err(ReconError::EmptyDataset(path.to_path_buf()));
    }

    info!(
        "Loaded {} ({} records, {} columns)",
        display_name(path),
        dataset.len(),
        dataset.headers().len()
    );
    Ok(dataset)
}

/// File name for status messages, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
