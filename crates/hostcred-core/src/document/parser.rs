//! Raw bytes to document tree

use super::node::Node;
use crate::error::HostsError;

/// Parse a raw byte buffer as a YAML document tree.
///
/// Checks syntactic well-formedness only; shape validation happens at
/// resolution time. Duplicate mapping keys are preserved in document order.
pub fn parse_document(bytes: &[u8]) -> Result<Node, HostsError> {
    let node: Node = serde_yaml::from_slice(bytes)?;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mapping_document() {
        let root = parse_document(b"github.com:\n  - user: alice\n").unwrap();
        assert!(root.as_mapping().is_some());
    }

    #[test]
    fn test_parse_accepts_duplicate_keys() {
        let root =
            parse_document(b"github.com:\n  - user: a\ngithub.com:\n  - user: b\n").unwrap();
        assert_eq!(root.as_mapping().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let err = parse_document(b"github.com: [unclosed").unwrap_err();
        assert!(matches!(err, HostsError::Parse(_)));
    }

    #[test]
    fn test_parse_empty_input_is_a_null_scalar() {
        // Shape errors are deferred to the resolver.
        let root = parse_document(b"").unwrap();
        assert_eq!(root.as_scalar(), Some(""));
    }
}
