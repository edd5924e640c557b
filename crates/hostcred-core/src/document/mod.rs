//! Generic document model
//!
//! An ordered node tree mirroring the YAML document's shape. The hosts file
//! is never materialized into one typed struct; the resolver walks the tree
//! and decodes exactly the sub-node it needs.

mod node;
mod parser;

pub use node::Node;
pub use parser::parse_document;
