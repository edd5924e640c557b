//! Credential helper subprocess invoker

use std::process::Command;

use tracing::debug;

use crate::entry::{ConfigEntry, HelperCommand};
use crate::error::HostsError;

/// Run a credential helper and decode its stdout as a [`ConfigEntry`].
///
/// The child runs synchronously with stdout and stderr captured separately
/// and nothing on stdin; this call blocks until it exits. There is no retry
/// and no timeout: a hanging helper blocks resolution indefinitely.
///
/// Launch failure and non-zero exit both surface as
/// [`HostsError::HelperExecution`] carrying the captured streams. On success
/// the stdout bytes must decode as a single entry, not a sequence.
pub fn run_credential_helper(helper: &HelperCommand) -> Result<ConfigEntry, HostsError> {
    debug!(command = %helper.command, args = ?helper.args, "spawning credential helper");

    let output = Command::new(&helper.command)
        .args(&helper.args)
        .output()
        .map_err(|e| HostsError::HelperExecution {
            reason: format!("failed to launch {:?}: {}", helper.command, e),
            stdout: Vec::new(),
            stderr: Vec::new(),
        })?;

    if !output.status.success() {
        return Err(HostsError::HelperExecution {
            reason: format!("{:?} exited with {}", helper.command, output.status),
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }

    let entry: ConfigEntry = serde_yaml::from_slice(&output.stdout)?;
    Ok(entry)
}
