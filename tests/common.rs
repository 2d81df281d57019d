//! Shared test helpers.

use tempfile::TempDir;

/// Create a temp directory for use as HOLDFAST_HOME.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_holdfast_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("holdfast_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| std::path::Path::new(".").into()))
        .expect("temp dir")
}

/// Skip the DNS cache flush for the whole test process.
pub fn skip_dns_flush() {
    std::env::set_var("HOLDFAST_SKIP_DNS_FLUSH", "1");
}
