//! Persisted application state.
//!
//! A single JSON file holds the blocked domain list, the pending gated
//! action, and whether blocking is meant to be on. Only configuration and
//! timer state live here; no activity is tracked.

use anyhow::Result;
use std::fs;

use crate::config::HoldfastPaths;
use crate::gate::PendingAction;
use crate::preset;

/// state.json schema. Unknown fields are tolerated, missing ones default.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct State {
    pub domains: Vec<String>,
    pub pending_action: Option<PendingAction>,
    pub blocking_active: bool,
}

impl State {
    /// Load state (with shared lock when the file exists).
    ///
    /// A missing file yields defaults, seeded from the preset file on first
    /// run. A malformed file yields plain defaults; never an error.
    pub fn load(paths: &HoldfastPaths) -> Result<State> {
        if paths.state_file.is_file() {
            let mut file = fs::OpenOptions::new().read(true).open(&paths.state_file)?;
            fs2::FileExt::lock_shared(&file)?;
            use std::io::Read;
            let mut s = String::new();
            file.read_to_string(&mut s)?;
            match serde_json::from_str(&s) {
                Ok(state) => Ok(state),
                Err(_) => Ok(State::default()),
            }
        } else {
            Ok(State {
                domains: preset::load_preset(&paths.preset_file),
                ..State::default()
            })
        }
    }

    /// Save state (with exclusive lock). Creates parent dirs if needed.
    ///
    /// Writes to a temp file and renames it over state.json, so an
    /// interrupted save never leaves a truncated state file behind.
    pub fn save(&self, paths: &HoldfastPaths) -> Result<()> {
        if let Some(p) = paths.state_file.parent() {
            fs::create_dir_all(p)?;
        }
        let tmp = paths.state_file.with_extension("tmp");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp)?;
        fs2::FileExt::lock_exclusive(&file)?;
        let s = serde_json::to_string_pretty(self)?;
        use std::io::Write;
        file.write_all(s.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, &paths.state_file)?;
        Ok(())
    }
}
