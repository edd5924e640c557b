//! Error surface for host credential resolution

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a host credential entry
#[derive(Error, Debug)]
pub enum HostsError {
    /// The backing hosts file does not exist.
    ///
    /// Recoverable only at the loader boundary, where it triggers the
    /// first-time setup collaborator. Everywhere else it is terminal.
    #[error("hosts file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes are not well-formed YAML, or a helper's stdout is not a
    /// decodable entry.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Well-formed document without the expected top-level mapping.
    #[error("malformed hosts document: expected a top-level mapping")]
    MalformedDocument,

    #[error("could not find config entry for {0:?}")]
    EntryNotFound(String),

    /// The matched value decoded under neither schema. Wraps the static-entry
    /// decode error; the helper-schema failure is the expected mismatch case
    /// and is not surfaced.
    #[error("host entry matches neither credential schema: {0}")]
    SchemaDecode(#[source] serde_yaml::Error),

    /// The credential helper failed to launch or exited non-zero. Both
    /// captured streams are attached for diagnosing misconfigured helpers.
    #[error(
        "credential helper failed: {reason} with stdout {:?} and stderr {:?}",
        String::from_utf8_lossy(.stdout),
        String::from_utf8_lossy(.stderr)
    )]
    HelperExecution {
        reason: String,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    #[error("entry sequence for {0:?} is empty")]
    EmptyEntrySequence(String),
}

pub type HostsResult<T> = Result<T, HostsError>;
