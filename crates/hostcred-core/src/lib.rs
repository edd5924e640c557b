//! Hostcred Core
//!
//! Resolves host credential configuration from a YAML hosts document.
//! Top-level keys are hostnames; each value holds either static credentials
//! or a helper command whose stdout supplies dynamically generated ones.
//!
//! ```no_run
//! use hostcred_core::HostsFile;
//!
//! let hosts = HostsFile::user();
//! let entry = hosts.resolve("github.com")?;
//! println!("authenticated as {:?}", entry.user);
//! # Ok::<(), hostcred_core::HostsError>(())
//! ```

pub mod document;
pub mod entry;
pub mod error;
pub mod helper;
pub mod loader;
pub mod resolver;

// Re-export commonly used types
pub use document::{parse_document, Node};
pub use entry::{ConfigEntry, ExecEntry, HelperCommand};
pub use error::{HostsError, HostsResult};
pub use helper::run_credential_helper;
pub use loader::{
    resolve_default_host, resolve_from_reader, Bootstrap, HostsFile, DEFAULT_HOSTNAME,
};
pub use resolver::resolve_entry;
