//! Data store operations and directory layout.

use anyhow::Result;

use crate::config::HoldfastPaths;
use crate::state::State;

/// Ensure the holdfast data directory exists.
pub fn ensure_dirs(paths: &HoldfastPaths) -> Result<()> {
    std::fs::create_dir_all(&paths.data_dir)?;
    Ok(())
}

/// Load state from store.
pub fn load_state(paths: &HoldfastPaths) -> Result<State> {
    State::load(paths)
}

/// Save state to store.
pub fn save_state(paths: &HoldfastPaths, state: &State) -> Result<()> {
    State::save(state, paths)
}
