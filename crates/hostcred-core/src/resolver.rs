//! Entry lookup and schema disambiguation

use tracing::debug;

use crate::document::Node;
use crate::entry::{ConfigEntry, ExecEntry};
use crate::error::HostsError;
use crate::helper::run_credential_helper;

/// Resolve the credential entry for `hostname` from a parsed hosts document.
///
/// The top-level mapping is scanned in document order; the first key whose
/// literal value equals `hostname` wins. The matched value decodes
/// preferentially as a sequence of [`ExecEntry`] (the helper schema) and, on
/// schema mismatch, as a sequence of [`ConfigEntry`]. Only the first element
/// of whichever sequence decodes is honored; later elements are ignored.
///
/// The only side effect is the subprocess spawned on the helper path.
pub fn resolve_entry(root: &Node, hostname: &str) -> Result<ConfigEntry, HostsError> {
    let pairs = root.as_mapping().ok_or(HostsError::MalformedDocument)?;

    for (key, value) in pairs {
        if key.as_scalar() == Some(hostname) {
            return resolve_value(value, hostname);
        }
    }

    Err(HostsError::EntryNotFound(hostname.to_string()))
}

/// Decode a matched value node under the two competing schemas.
fn resolve_value(value: &Node, hostname: &str) -> Result<ConfigEntry, HostsError> {
    // Helper schema first. A mismatch here is the expected case for static
    // entries and triggers the fallback instead of surfacing.
    match value.decode::<Vec<ExecEntry>>() {
        Ok(exec_entries) => {
            let entry = exec_entries
                .first()
                .ok_or_else(|| HostsError::EmptyEntrySequence(hostname.to_string()))?;
            debug!(host = hostname, command = %entry.exec.command, "entry uses a credential helper");
            run_credential_helper(&entry.exec)
        }
        Err(mismatch) => {
            debug!(host = hostname, %mismatch, "not a helper entry, decoding static credentials");
            let entries: Vec<ConfigEntry> = value.decode().map_err(HostsError::SchemaDecode)?;
            // An empty sequence decodes under the helper schema above and is
            // caught there; this guard covers the direct decode path only.
            entries
                .into_iter()
                .next()
                .ok_or_else(|| HostsError::EmptyEntrySequence(hostname.to_string()))
        }
    }
}
