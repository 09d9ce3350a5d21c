// src/pipeline.rs - Load -> extract -> persist

use std::path::Path;

use crate::dataset::Dataset;
use crate::infra::config::DatasetConfig;
use crate::infra::errors::Result;
use crate::patterns::{PatternExtractor, PatternMap};
use crate::store;

/// Run one extraction and write the artifact to `output`.
///
/// Nothing is written unless loading and extraction both succeed.
pub fn run(dataset_path: &Path, output: &Path, columns: &DatasetConfig) -> Result<PatternMap> {
    let patterns = extract_from_file(dataset_path, columns)?;
    store::save_patterns(&patterns, output)?;
    Ok(patterns)
}

/// Load and extract without persisting.
pub fn extract_from_file(dataset_path: &Path, columns: &DatasetConfig) -> Result<PatternMap> {
    let dataset = Dataset::load(dataset_path, columns)?;
    let patterns = PatternExtractor::new(&dataset, columns).extract()?;
    tracing::info!(
        "Extracted {} day-type patterns from {} rows",
        patterns.len(),
        dataset.len()
    );
    Ok(patterns)
}
