//! Managed hosts-file section: apply, remove, inspect.
//!
//! Holdfast owns exactly one section of the hosts file, bounded by fixed
//! marker lines. Everything outside the markers is preserved untouched.
//! Re-applying an unchanged domain list yields byte-identical content.

use crate::platform::{self, HostsEditor};

pub const BLOCK_START: &str = "# holdfast START";
pub const BLOCK_END: &str = "# holdfast END";

/// Hosts-file failure. Permission problems get their own variant so callers
/// can tell the user to rerun elevated instead of showing a raw IO error.
#[derive(Debug, thiserror::Error)]
pub enum HostsError {
    #[error("permission denied editing the hosts file; rerun with administrator/root rights")]
    PermissionDenied(#[source] std::io::Error),
    #[error("hosts file error: {0}")]
    Io(#[source] std::io::Error),
}

fn classify(e: std::io::Error) -> HostsError {
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        HostsError::PermissionDenied(e)
    } else {
        HostsError::Io(e)
    }
}

/// Expand a domain list for blocking: trim, drop empties, add a `www.` twin
/// for names lacking one, then sort and dedupe.
pub fn expand_domains(domains: &[String]) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::new();
    for d in domains {
        let d = d.trim();
        if d.is_empty() {
            continue;
        }
        expanded.push(d.to_string());
        if !d.starts_with("www.") {
            expanded.push(format!("www.{d}"));
        }
    }
    expanded.sort();
    expanded.dedup();
    expanded
}

/// Content with the managed section's lines removed. Everything else is
/// kept as-is (a file lacking a final newline gains one, so the section can
/// be appended on its own line). Ends with a newline when non-empty.
fn strip_section(content: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_section = false;
    for line in content.lines() {
        let t = line.trim();
        if t == BLOCK_START {
            in_section = true;
            continue;
        }
        if t == BLOCK_END {
            in_section = false;
            continue;
        }
        if !in_section {
            kept.push(line);
        }
    }
    let mut out = kept.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Render the managed section for the given (unexpanded) domain list.
pub fn render_section(domains: &[String]) -> String {
    let mut lines = vec![
        BLOCK_START.to_string(),
        "# Entries below are managed by holdfast to intentionally block domains.".to_string(),
        "# Remove this section to unblock (requires admin/root).".to_string(),
    ];
    for d in expand_domains(domains) {
        lines.push(format!("127.0.0.1 {d}"));
        lines.push(format!("::1 {d}"));
    }
    lines.push(BLOCK_END.to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Replace the managed section with a fresh one for `domains`.
pub fn apply_block(editor: &dyn HostsEditor, domains: &[String]) -> Result<(), HostsError> {
    let content = editor.read().map_err(classify)?;
    let mut out = strip_section(&content);
    out.push_str(&render_section(domains));
    editor.write(&out).map_err(classify)?;
    platform::flush_dns();
    Ok(())
}

/// Remove the managed section, leaving everything else as-is.
/// No-op (no write) when no section exists.
pub fn remove_block(editor: &dyn HostsEditor) -> Result<(), HostsError> {
    let content = editor.read().map_err(classify)?;
    if !content.contains(BLOCK_START) && !content.contains(BLOCK_END) {
        return Ok(());
    }
    editor.write(&strip_section(&content)).map_err(classify)?;
    platform::flush_dns();
    Ok(())
}

/// True iff the managed section exists and covers every expanded domain.
pub fn block_active(editor: &dyn HostsEditor, domains: &[String]) -> Result<bool, HostsError> {
    let content = editor.read().map_err(classify)?;
    let section = match managed_section(&content) {
        Some(s) => s,
        None => return Ok(false),
    };
    let covered = |d: &str| {
        section
            .lines()
            .any(|line| line.trim().ends_with(&format!(" {d}")))
    };
    Ok(expand_domains(domains).iter().all(|d| covered(d)))
}

/// The text between the markers, if both are present in order.
fn managed_section(content: &str) -> Option<&str> {
    let start = content.find(BLOCK_START)?;
    let rest = &content[start + BLOCK_START.len()..];
    let end = rest.find(BLOCK_END)?;
    Some(&rest[..end])
}
