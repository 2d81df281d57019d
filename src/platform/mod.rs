//! Platform abstraction for the hosts file and DNS cache.

use std::io;
use std::path::{Path, PathBuf};

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use crate::config;

/// Trait for raw hosts-file access. Section handling lives in `hosts`;
/// implementations only read and write whole-file content.
pub trait HostsEditor: Send + Sync {
    /// Read the full hosts file. A missing file reads as empty.
    fn read(&self) -> io::Result<String>;
    /// Replace the full hosts file content.
    fn write(&self, content: &str) -> io::Result<()>;
}

/// Get the platform HostsEditor.
/// If HOLDFAST_HOSTS_FILE is set (e.g. in tests), that path is edited instead
/// of the system hosts file.
pub fn default_hosts_editor() -> Box<dyn HostsEditor> {
    Box::new(FileHostsEditor::new(config::system_hosts_path()))
}

/// HostsEditor that reads/writes a file at the given path.
#[derive(Clone)]
pub struct FileHostsEditor {
    path: PathBuf,
}

impl FileHostsEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HostsEditor for FileHostsEditor {
    fn read(&self) -> io::Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Ok(s),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e),
        }
    }

    fn write(&self, content: &str) -> io::Result<()> {
        std::fs::write(&self.path, content)
    }
}

/// Best-effort DNS cache flush so hosts changes take effect sooner.
/// Errors are ignored; flushing is advisory.
/// HOLDFAST_SKIP_DNS_FLUSH disables it (e.g. in tests).
pub fn flush_dns() {
    if std::env::var("HOLDFAST_SKIP_DNS_FLUSH").is_ok() {
        return;
    }
    #[cfg(unix)]
    unix::flush_dns();

    #[cfg(windows)]
    windows::flush_dns();
}
