// src/store/artifact.rs - Binary pattern artifact (bincode)
//
// File format:
//   magic b"DPAT" | version u8 | bincode Vec<(day_type, PatternRecord)>
//
// Writes go to a uniquely named temp file in the target directory. It is
// flushed and synced, renamed over the target, and then the directory itself
// is synced. A failed write never touches an existing artifact.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::infra::errors::{PatternError, Result};
use crate::patterns::{PatternMap, PatternRecord};

pub const MAGIC: [u8; 4] = *b"DPAT";
pub const FORMAT_VERSION: u8 = 2;

const HEADER_LEN: usize = MAGIC.len() + 1;

/// Encode a pattern map into the artifact byte layout.
pub fn encode(patterns: &PatternMap) -> bincode::Result<Vec<u8>> {
    let entries: Vec<(String, PatternRecord)> = patterns.clone().into();
    let payload = bincode::serialize(&entries)?;

    let mut data = Vec::with_capacity(HEADER_LEN + payload.len());
    data.extend_from_slice(&MAGIC);
    data.push(FORMAT_VERSION);
    data.extend_from_slice(&payload);
    Ok(data)
}

/// Decode artifact bytes. `path` only labels errors.
pub fn decode(bytes: &[u8], path: &Path) -> Result<PatternMap> {
    let corrupt = |reason: String| PatternError::ArtifactCorrupt {
        path: path.to_path_buf(),
        reason,
    };

    if bytes.len() < HEADER_LEN || bytes[..MAGIC.len()] != MAGIC {
        return Err(corrupt("bad magic bytes".into()));
    }
    let version = bytes[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(corrupt(format!("unsupported format version {version}")));
    }

    let entries: Vec<(String, PatternRecord)> = bincode::deserialize(&bytes[HEADER_LEN..])
        .map_err(|e| corrupt(format!("bincode deserialization failed: {e}")))?;
    Ok(PatternMap::from(entries))
}

/// Persist a pattern map to `path`, replacing any previous artifact.
pub fn save_patterns(patterns: &PatternMap, path: &Path) -> Result<()> {
    let data = encode(patterns).map_err(|e| encode_failure(path, e))?;
    let write_error = |source: std::io::Error| PatternError::PersistenceWriteError {
        path: path.to_path_buf(),
        source,
    };

    let dir = parent_dir(path);
    let temp = write_temp(dir, &data).map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;
    sync_dir(dir).map_err(write_error)?;

    tracing::info!(
        "Wrote {} patterns to {} ({} bytes)",
        patterns.len(),
        path.display(),
        data.len()
    );
    Ok(())
}

/// Load a pattern map written by [`save_patterns`].
pub fn load_patterns(path: &Path) -> Result<PatternMap> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PatternError::ArtifactNotFound {
            path: path.to_path_buf(),
        },
        _ => PatternError::Io(e),
    })?;
    let patterns = decode(&bytes, path)?;
    tracing::debug!("Loaded {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}

fn encode_failure(path: &Path, err: bincode::Error) -> PatternError {
    PatternError::PersistenceWriteError {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, err),
    }
}

/// The temp file is removed when dropped, so every error path cleans up.
fn write_temp(dir: &Path, data: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        writer.write_all(data)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    Ok(temp)
}

/// Make the rename itself durable.
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        fs::File::open(dir)?.sync_all()?;
    }
    #[cfg(not(unix))]
    {
        let _ = dir;
    }
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
