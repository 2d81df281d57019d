//! Path resolution for the holdfast data store.
//!
//! Supports HOLDFAST_HOME env var override for testing.

use std::path::{Path, PathBuf};

/// Paths for the holdfast data store.
#[derive(Debug, Clone)]
pub struct HoldfastPaths {
    pub data_dir: PathBuf,
    pub state_file: PathBuf,
    pub preset_file: PathBuf,
}

impl HoldfastPaths {
    /// Build paths from base directory (e.g. ProjectDirs data dir or HOLDFAST_HOME).
    pub fn from_base(base: PathBuf) -> Self {
        let state_file = base.join("state.json");
        let preset_file = base.join("preset_domains.txt");
        Self {
            data_dir: base,
            state_file,
            preset_file,
        }
    }

    /// Paths for testing: use a temp dir as base.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        Self::from_base(base.as_ref().to_path_buf())
    }

    /// Get default holdfast paths (respects HOLDFAST_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var("HOLDFAST_HOME") {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("com", "holdfast", "holdfast") {
            dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from(".holdfast")
        };
        Self::from_base(base)
    }
}

/// Location of the system hosts file.
/// If HOLDFAST_HOSTS_FILE is set (e.g. in tests), that path wins.
pub fn system_hosts_path() -> PathBuf {
    if let Ok(path) = std::env::var("HOLDFAST_HOSTS_FILE") {
        return PathBuf::from(path);
    }
    #[cfg(windows)]
    return PathBuf::from(r"C:\Windows\System32\drivers\etc\hosts");

    #[cfg(not(windows))]
    return PathBuf::from("/etc/hosts");
}
