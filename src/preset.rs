//! Preset loader: optional starter domain list.
//!
//! No domain list ships with the tool. Users may drop a
//! `preset_domains.txt` (one domain per line) into the data directory to
//! seed the list on first run. Blank lines and `#` comments are ignored.

use std::path::Path;

use crate::domain;

/// Load starter domains from the preset file if present.
/// Returns an empty list when the file is missing or unreadable.
pub fn load_preset(path: &Path) -> Vec<String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    parse_preset(&raw)
}

/// Parse preset text: one domain per line, skipping blanks and comments.
pub fn parse_preset(raw: &str) -> Vec<String> {
    let lines = raw
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from);
    domain::normalize_list(lines)
}
