//! Windows platform implementations.

use std::process::Command;

/// Flush the platform DNS cache, ignoring failures.
pub fn flush_dns() {
    let _ = Command::new("ipconfig").arg("/flushdns").status();
}
