//! Loading the AST dump produced by `luau --ast`.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::ast::{Node, StatBlock};
use crate::diagnostics::ReconstructError;

/// A decoded AST dump. The root is always a block.
#[derive(Debug, Clone, PartialEq)]
pub struct AstDocument {
    pub root: StatBlock,
}

impl AstDocument {
    /// Accepts either the full dump (`{"root": {...}, "commentLocations": [...]}`) or a bare
    /// `AstStatBlock` node.
    pub fn from_json_str(source: &str) -> Result<Self, ReconstructError> {
        let mut value: Value = serde_json::from_str(source)?;
        let root = if value.get("root").is_some() {
            value["root"].take()
        } else {
            value
        };
        let node = Node::from_json(root)?;
        match node {
            Node::Block(root) => {
                debug!(statements = root.body.len(), "decoded AST document");
                Ok(Self { root })
            }
            other => Err(ReconstructError::BadRoot {
                found: other.kind().to_string(),
            }),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ReconstructError> {
        let source = std::fs::read_to_string(path).map_err(|source| ReconstructError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }
}
