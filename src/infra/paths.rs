// src/infra/paths.rs - Config path resolution
//
// DAYPATTERN_HOME overrides the config directory. When unset, config lives
// in ~/.daypattern/.

use std::path::PathBuf;

/// Default artifact file name, written to the working directory.
pub const DEFAULT_ARTIFACT: &str = "patterns.bin";

/// Returns the DAYPATTERN_HOME override, if set.
fn daypattern_home() -> Option<PathBuf> {
    std::env::var_os("DAYPATTERN_HOME").map(PathBuf::from)
}

/// Configuration directory: $DAYPATTERN_HOME/ or ~/.daypattern/
///
/// `None` only when neither the override nor a home directory is available.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = daypattern_home() {
        return Some(home);
    }
    dirs_home().map(|home| home.join(".daypattern"))
}

/// Home directory
pub fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
