//! Hosts file loading and first-time bootstrap

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::document::parse_document;
use crate::entry::ConfigEntry;
use crate::error::HostsError;
use crate::resolver::resolve_entry;

/// The well-known host resolved by the default entry point.
pub const DEFAULT_HOSTNAME: &str = "github.com";

/// First-time setup collaborator.
///
/// Invoked when the backing hosts file does not exist yet; expected to create
/// and populate it, returning the freshly created entry. This is the only
/// error kind the loader recovers from.
pub trait Bootstrap {
    fn create(&self, path: &Path) -> Result<ConfigEntry, HostsError>;
}

/// File-backed hosts loader
///
/// # Example
///
/// ```no_run
/// use hostcred_core::HostsFile;
///
/// // User-level hosts file
/// let hosts = HostsFile::user();
///
/// // Or an explicit path
/// let hosts = HostsFile::new("/etc/hostcred/hosts.yml");
/// ```
#[derive(Debug, Clone)]
pub struct HostsFile {
    path: PathBuf,
}

impl HostsFile {
    /// Create a loader for a specific hosts file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// User-level hosts file (`~/.config/hostcred/hosts.yml`).
    pub fn user() -> Self {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        Self::new(config_dir.join("hostcred").join("hosts.yml"))
    }

    /// Get the hosts file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the hosts file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Resolve `hostname` from the backing file.
    ///
    /// A missing file is [`HostsError::NotFound`]; any other read failure is
    /// [`HostsError::Io`].
    pub fn resolve(&self, hostname: &str) -> Result<ConfigEntry, HostsError> {
        let bytes = fs::read(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                HostsError::NotFound(self.path.clone())
            } else {
                HostsError::Io(e)
            }
        })?;
        let root = parse_document(&bytes)?;
        resolve_entry(&root, hostname)
    }

    /// Resolve `hostname`, bootstrapping the file if it does not exist yet.
    ///
    /// [`HostsError::NotFound`] delegates to the collaborator and returns its
    /// result; every other error propagates unchanged.
    pub fn resolve_or_bootstrap<B: Bootstrap>(
        &self,
        hostname: &str,
        bootstrap: &B,
    ) -> Result<ConfigEntry, HostsError> {
        match self.resolve(hostname) {
            Err(HostsError::NotFound(path)) => {
                warn!(path = %path.display(), "hosts file missing, running first-time setup");
                bootstrap.create(&path)
            }
            other => other,
        }
    }
}

/// Resolve `hostname` from any readable byte stream.
pub fn resolve_from_reader<R: Read>(
    mut reader: R,
    hostname: &str,
) -> Result<ConfigEntry, HostsError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let root = parse_document(&bytes)?;
    resolve_entry(&root, hostname)
}

/// Resolve [`DEFAULT_HOSTNAME`] from the hosts file at `path`.
pub fn resolve_default_host(path: impl Into<PathBuf>) -> Result<ConfigEntry, HostsError> {
    HostsFile::new(path).resolve(DEFAULT_HOSTNAME)
}
