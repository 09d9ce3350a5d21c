// src/infra/errors.rs - Error types for daypattern

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    // Dataset errors
    #[error("Dataset not found: {}", path.display())]
    DatasetNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset '{}': {reason}", path.display())]
    DatasetMalformed { path: PathBuf, reason: String },

    // Extraction errors
    #[error("Column '{column}' has no values for day type '{day_type}'")]
    EmptyColumn { day_type: String, column: String },

    // Artifact errors
    #[error("Failed to write patterns to {}: {source}", path.display())]
    PersistenceWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Pattern artifact not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("Corrupt pattern artifact '{}': {reason}", path.display())]
    ArtifactCorrupt { path: PathBuf, reason: String },

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PatternError {
    /// Stable short name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            PatternError::DatasetNotFound { .. } => "dataset_not_found",
            PatternError::DatasetMalformed { .. } => "dataset_malformed",
            PatternError::EmptyColumn { .. } => "empty_column",
            PatternError::PersistenceWriteError { .. } => "persistence_write_error",
            PatternError::ArtifactNotFound { .. } => "artifact_not_found",
            PatternError::ArtifactCorrupt { .. } => "artifact_corrupt",
            PatternError::Config(_) => "config",
            PatternError::Io(_) => "io",
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PatternError::DatasetMalformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
