//! Error and diagnostic types for the reconstruction engine.
//!
//! Two channels exist and they are deliberately separate:
//!
//! - [`ReconstructError`] is returned through `Result` and stops the render outright
//!   (malformed spans, kind mismatches in custom renderers, loader failures).
//! - [`UnsupportedNode`] is *reported* through an injected [`DiagnosticSink`]. It halts the
//!   sequence that contained the node but the render as a whole carries on and returns the
//!   partial text.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Node;

// ============================================================================
// HARD ERRORS
// ============================================================================

#[derive(Debug, Error, Diagnostic)]
pub enum ReconstructError {
    #[error("malformed span `{location}`: {reason}")]
    #[diagnostic(
        code(luau_reconstruct::malformed_span),
        help("expected `row,col - row,col`")
    )]
    MalformedSpan { location: String, reason: String },

    #[error("renderer for `{expected}` was handed a `{found}` node")]
    #[diagnostic(
        code(luau_reconstruct::kind_mismatch),
        help("a custom renderer was registered under the wrong kind tag")
    )]
    KindMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("invalid AST node: {message}")]
    #[diagnostic(code(luau_reconstruct::invalid_node))]
    InvalidNode { message: String },

    #[error("AST document root must be an `AstStatBlock`, found `{found}`")]
    #[diagnostic(
        code(luau_reconstruct::bad_root),
        help("pass the JSON produced by `luau --ast`, or a bare block node")
    )]
    BadRoot { found: String },

    #[error("could not decode AST JSON")]
    #[diagnostic(code(luau_reconstruct::json))]
    Json(#[from] serde_json::Error),

    #[error("could not read `{}`", path.display())]
    #[diagnostic(code(luau_reconstruct::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReconstructError {
    pub(crate) fn kind_mismatch(expected: &'static str, node: &Node) -> Self {
        ReconstructError::KindMismatch {
            expected,
            found: node.kind().to_string(),
        }
    }
}

// ============================================================================
// REPORTED DIAGNOSTICS
// ============================================================================

/// A node whose kind has no renderer and is not a type annotation.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("Unknown node type: {kind} at {location}")]
#[diagnostic(
    code(luau_reconstruct::unsupported_node),
    severity(Warning),
    help("register a renderer for `{kind}` to reconstruct this node")
)]
pub struct UnsupportedNode {
    pub kind: String,
    pub location: String,
    /// The node's own data, as JSON when it was decoded from an unmodelled kind.
    pub detail: String,
}

impl UnsupportedNode {
    pub fn from_node(node: &Node) -> Self {
        Self {
            kind: node.kind().to_string(),
            location: node.location().to_string(),
            detail: node.describe(),
        }
    }
}

/// Receiver for diagnostics raised while rendering. Injected so that the core never touches
/// stderr on its own.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &UnsupportedNode);
}

/// Discards everything.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: &UnsupportedNode) {}
}

/// Keeps every reported diagnostic, in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub reported: Vec<UnsupportedNode>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: &UnsupportedNode) {
        self.reported.push(diagnostic.clone());
    }
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&UnsupportedNode),
{
    fn report(&mut self, diagnostic: &UnsupportedNode) {
        (self)(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use miette::Report;

    use super::*;

    #[test]
    fn malformed_span_renders_help() {
        let err = ReconstructError::MalformedSpan {
            location: "x".to_string(),
            reason: "expected `r1,c1 - r2,c2`".to_string(),
        };
        let output = format!("{:?}", Report::new(err));
        assert!(output.contains("malformed span `x`"));
        assert!(output.contains("row,col - row,col"));
    }

    #[test]
    fn closure_sinks_receive_reports() {
        let mut seen = Vec::new();
        {
            let mut sink = |d: &UnsupportedNode| seen.push(d.kind.clone());
            sink.report(&UnsupportedNode {
                kind: "AstStatWhile".to_string(),
                location: "0,0 - 1,3".to_string(),
                detail: "{}".to_string(),
            });
        }
        assert_eq!(seen, vec!["AstStatWhile".to_string()]);
    }
}
