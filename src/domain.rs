//! Hostname validation and domain-list normalization.

use anyhow::Result;

/// Validate hostname format.
pub fn validate_hostname(domain: &str) -> Result<()> {
    if domain.is_empty() {
        anyhow::bail!("empty hostname");
    }
    if domain.contains("..") {
        anyhow::bail!("invalid hostname: consecutive dots");
    }
    if domain == "localhost" {
        anyhow::bail!("bare localhost not allowed");
    }
    for label in domain.split('.') {
        if label.is_empty() {
            anyhow::bail!("invalid hostname: empty label");
        }
        for c in label.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' {
                anyhow::bail!("invalid hostname: illegal char {c:?}");
            }
        }
        if label.starts_with('-') || label.ends_with('-') {
            anyhow::bail!("invalid hostname: label cannot start/end with hyphen");
        }
    }
    Ok(())
}

/// Canonical form for storage: trimmed, lowercase.
pub fn normalize(domain: &str) -> String {
    domain.trim().to_lowercase()
}

/// Normalize a list, dropping empties and duplicates while preserving the
/// first-seen order (the stored list keeps insertion order for display).
pub fn normalize_list<I>(domains: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for d in domains {
        let d = normalize(&d);
        if d.is_empty() || out.contains(&d) {
            continue;
        }
        out.push(d);
    }
    out
}
