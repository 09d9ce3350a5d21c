// src/infra/config.rs - Configuration loading (TOML)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::errors::PatternError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Column layout of the input dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub day_type_column: String,
    pub leaving_column: String,
    pub returning_column: String,
    pub delimiter: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            day_type_column: "day_type".into(),
            leaving_column: "leaving_time".into(),
            returning_column: "returning_time".into(),
            delimiter: ",".into(),
        }
    }
}

impl DatasetConfig {
    /// The delimiter as a single byte, as the csv reader wants it.
    pub fn delimiter_byte(&self) -> Result<u8, PatternError> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(PatternError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(paths::DEFAULT_ARTIFACT),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Dates classified as `holiday` by `predict`.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.dataset.delimiter_byte()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
