//! The two competing entry schemas

use serde::{Deserialize, Serialize};

/// One resolved credential record for a host.
///
/// Immutable once constructed; owned by the caller that requested it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Account identifier, when the source document carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// The credential itself; named `oauth_token` in the document.
    #[serde(rename = "oauth_token")]
    pub token: String,
}

/// The alternate schema: a description of an external credential helper.
///
/// Used transiently to launch the helper subprocess, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecEntry {
    pub exec: HelperCommand,
}

/// An external command whose stdout supplies dynamically generated
/// credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperCommand {
    /// Executable path or name.
    pub command: String,
    /// Ordered argument list.
    #[serde(default)]
    pub args: Vec<String>,
}
