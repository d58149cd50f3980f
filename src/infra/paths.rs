// src/infra/paths.rs — Config file location
//
// TOOLJUDGE_HOME overrides everything. Otherwise config lives in ~/.tooljudge/.

use directories::BaseDirs;
use std::path::PathBuf;

/// Returns the TOOLJUDGE_HOME override, if set.
fn tooljudge_home() -> Option<PathBuf> {
    std::env::var_os("TOOLJUDGE_HOME").map(PathBuf::from)
}

/// Configuration directory: $TOOLJUDGE_HOME/ or ~/.tooljudge/
///
/// `None` when neither the override nor a home directory is available.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = tooljudge_home() {
        return Some(home);
    }
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".tooljudge"))
}

pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
