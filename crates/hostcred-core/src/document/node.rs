//! Ordered document tree with targeted decoding

use std::fmt;

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_yaml::Value;

/// A generic, ordered, heterogeneous view of a YAML document.
///
/// Mapping nodes keep their key/value pairs in document order, including
/// duplicate keys; scalar nodes hold the literal value as text. Sub-trees
/// decode on demand via [`Node::decode`], so a document never needs a single
/// universal schema.
///
/// A tree is built fresh per resolution call and discarded once the target
/// entry is extracted.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Key/value pairs in document order. Duplicate keys are preserved;
    /// lookups scan in order, so the first occurrence wins.
    Mapping(Vec<(Node, Node)>),
    Sequence(Vec<Node>),
    /// Literal value as text; null renders as the empty string.
    Scalar(String),
}

impl Node {
    fn to_value(&self) -> Value {
        match self {
            Node::Scalar(s) => Value::String(s.clone()),
            Node::Sequence(items) => Value::Sequence(items.iter().map(Node::to_value).collect()),
            Node::Mapping(pairs) => {
                let mut map = serde_yaml::Mapping::new();
                for (key, value) in pairs {
                    map.insert(key.to_value(), value.to_value());
                }
                Value::Mapping(map)
            }
        }
    }

    /// Decode this node as `T`.
    ///
    /// A failure here means the node does not match `T`'s schema, not that
    /// anything went wrong with I/O; callers decide whether a mismatch is
    /// terminal or a fallback trigger.
    ///
    /// Scalars carry only their literal text, so a `String` field accepts
    /// values written as YAML numbers or booleans (`oauth_token: 12345`
    /// decodes as `"12345"`). The leniency is deliberate.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_yaml::Error> {
        serde_yaml::from_value(self.to_value())
    }

    /// The literal value, if this is a scalar node.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The ordered key/value pairs, if this is a mapping node.
    pub fn as_mapping(&self) -> Option<&[(Node, Node)]> {
        match self {
            Node::Mapping(pairs) => Some(pairs),
            _ => None,
        }
    }
}

// Nodes deserialize directly from the YAML stream rather than through
// `serde_yaml::Value`: `Value`'s mapping rejects duplicate keys, while a
// hosts document may legitimately repeat a hostname.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a YAML mapping, sequence, or scalar")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::Scalar(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Scalar(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Scalar(String::new()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut pairs = Vec::new();
        while let Some(pair) = map.next_entry()? {
            pairs.push(pair);
        }
        Ok(Node::Mapping(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn node(yaml: &str) -> Node {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_mapping_preserves_document_order() {
        let root = node("zeta: 1\nalpha: 2\nmiddle: 3\n");
        let pairs = root.as_mapping().unwrap();
        let keys: Vec<_> = pairs.iter().filter_map(|(k, _)| k.as_scalar()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "middle"]);
    }

    #[test]
    fn test_mapping_keeps_duplicate_keys() {
        let root = node("host: 1\nother: 2\nhost: 3\n");
        let pairs = root.as_mapping().unwrap();
        let keys: Vec<_> = pairs.iter().filter_map(|(k, _)| k.as_scalar()).collect();
        assert_eq!(keys, vec!["host", "other", "host"]);
        assert_eq!(pairs[0].1.as_scalar(), Some("1"));
        assert_eq!(pairs[2].1.as_scalar(), Some("3"));
    }

    #[test]
    fn test_scalar_literals() {
        assert_eq!(node("hello").as_scalar(), Some("hello"));
        assert_eq!(node("42").as_scalar(), Some("42"));
        assert_eq!(node("true").as_scalar(), Some("true"));
        assert_eq!(node("null").as_scalar(), Some(""));
    }

    #[test]
    fn test_non_scalar_accessors() {
        let root = node("- a\n- b\n");
        assert!(root.as_scalar().is_none());
        assert!(root.as_mapping().is_none());
        assert!(matches!(root, Node::Sequence(ref items) if items.len() == 2));
    }

    #[test]
    fn test_targeted_decode_of_subtree() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Inner {
            name: String,
            #[serde(default)]
            tags: Vec<String>,
        }

        let root = node("outer:\n  name: example\n  tags: [a, b]\n");
        let pairs = root.as_mapping().unwrap();
        let inner: Inner = pairs[0].1.decode().unwrap();
        assert_eq!(
            inner,
            Inner {
                name: "example".to_string(),
                tags: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn test_decode_treats_scalars_as_text() {
        #[derive(Debug, Deserialize)]
        struct Shaped {
            value: String,
        }

        let root = node("outer:\n  value: 12345\n");
        let pairs = root.as_mapping().unwrap();
        let inner: Shaped = pairs[0].1.decode().unwrap();
        assert_eq!(inner.value, "12345");
    }

    #[test]
    fn test_decode_mismatch_is_an_error() {
        #[derive(Debug, Deserialize)]
        struct Shaped {
            #[allow(dead_code)]
            required: String,
        }

        let root = node("something: else\n");
        assert!(root.decode::<Vec<Shaped>>().is_err());
    }
}
