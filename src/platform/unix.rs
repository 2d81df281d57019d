//! Unix (macOS, Linux) platform implementations.

use std::process::Command;

/// Flush the platform DNS cache, ignoring failures.
pub fn flush_dns() {
    #[cfg(target_os = "macos")]
    {
        let _ = Command::new("/usr/bin/dscacheutil")
            .arg("-flushcache")
            .status();
        let _ = Command::new("/usr/bin/killall")
            .args(["-HUP", "mDNSResponder"])
            .status();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // Linux: resolver caches vary; try the common ones.
        let _ = Command::new("resolvectl").arg("flush-caches").status();
        let _ = Command::new("nscd").args(["-i", "hosts"]).status();
    }
}
