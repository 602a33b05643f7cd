//! AST-to-text reconstruction.
//!
//! ## Module Structure
//!
//! - **`registry`**: kind tag -> renderer mapping and the default population
//! - **`walker`**: statement list traversal and the `do ... end` path
//! - **`assignment`**: shared target/value list rendering for `local` and `=`
//! - **`literals`**, **`expressions`**, **`statements`**: per-kind renderers
//!
//! Renderers communicate only through the [`RenderContext`]: they write into its buffer and
//! dispatch children back through its registry.

use tracing::{debug, trace};

use crate::ast::{kind, Coordinate, Node, StatBlock};
use crate::buffer::{PositionedBuffer, WriteMode};
use crate::diagnostics::{DiagnosticSink, NullSink, ReconstructError, UnsupportedNode};

pub mod assignment;
pub mod expressions;
pub mod literals;
pub mod registry;
pub mod statements;
pub mod walker;

pub use registry::{build_default_registry, default_registry, RenderFn, RendererRegistry};
pub use walker::{render_do_block, walk};

// ============================================================================
// DISPATCH
// ============================================================================

/// What happened when a single node was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Rendered,
    /// Type annotation; silently consumed.
    Ignored,
    /// No renderer; a diagnostic has been reported and the caller must stop its sequence.
    Unsupported,
}

impl Dispatch {
    pub fn is_unsupported(self) -> bool {
        self == Dispatch::Unsupported
    }
}

/// State threaded through one render: the buffer, the registry and the diagnostic sink.
pub struct RenderContext<'a> {
    buffer: PositionedBuffer,
    registry: &'a RendererRegistry,
    sink: &'a mut dyn DiagnosticSink,
    unsupported: Vec<UnsupportedNode>,
}

impl<'a> RenderContext<'a> {
    pub fn new(registry: &'a RendererRegistry, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self::with_buffer(PositionedBuffer::new(), registry, sink)
    }

    /// Continues writing into a buffer the caller already holds.
    pub fn with_buffer(
        buffer: PositionedBuffer,
        registry: &'a RendererRegistry,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            buffer,
            registry,
            sink,
            unsupported: Vec::new(),
        }
    }

    pub fn buffer(&self) -> &PositionedBuffer {
        &self.buffer
    }

    pub fn registry(&self) -> &'a RendererRegistry {
        self.registry
    }

    /// Writes at a coordinate in overwrite mode.
    pub fn write(&mut self, text: &str, at: Coordinate) {
        self.buffer.write_at(text, at, WriteMode::Overwrite);
    }

    pub fn write_with(&mut self, text: &str, at: Coordinate, mode: WriteMode) {
        self.buffer.write_at(text, at, mode);
    }

    /// Writes at the start of `node`'s span.
    pub fn write_at_start(&mut self, text: &str, node: &Node) -> Result<(), ReconstructError> {
        let at = node.location().start()?;
        self.write(text, at);
        Ok(())
    }

    pub fn append(&mut self, text: &str) {
        self.buffer.append(text);
    }

    /// Renders one node through the registry.
    pub fn dispatch(&mut self, node: &Node) -> Result<Dispatch, ReconstructError> {
        let tag = node.kind();
        if let Some(render) = self.registry.get(tag) {
            trace!(kind = tag, location = %node.location(), "dispatch");
            render(node, self)?;
            return Ok(Dispatch::Rendered);
        }
        if kind::is_type_annotation(tag) {
            trace!(kind = tag, "skipping type annotation");
            return Ok(Dispatch::Ignored);
        }
        self.report_unsupported(node);
        Ok(Dispatch::Unsupported)
    }

    /// Dispatches each node in order, stopping at the first unsupported one. `separator` is
    /// appended between rendered nodes; ignored type annotations get none.
    pub fn dispatch_list(
        &mut self,
        nodes: &[Node],
        separator: &str,
    ) -> Result<Dispatch, ReconstructError> {
        let mut rendered_any = false;
        for node in nodes {
            if !self.registry.has(node.kind()) {
                if kind::is_type_annotation(node.kind()) {
                    trace!(kind = node.kind(), "skipping type annotation");
                    continue;
                }
                self.report_unsupported(node);
                return Ok(Dispatch::Unsupported);
            }
            if rendered_any {
                self.append(separator);
            }
            if self.dispatch(node)?.is_unsupported() {
                return Ok(Dispatch::Unsupported);
            }
            rendered_any = true;
        }
        Ok(Dispatch::Rendered)
    }

    pub fn report_unsupported(&mut self, node: &Node) {
        let diagnostic = UnsupportedNode::from_node(node);
        debug!(kind = %diagnostic.kind, location = %diagnostic.location, "unsupported node");
        self.sink.report(&diagnostic);
        self.unsupported.push(diagnostic);
    }

    /// Hands back the buffer and everything reported during the render.
    pub fn finish(self) -> (PositionedBuffer, RenderOutcome) {
        let outcome = if self.unsupported.is_empty() {
            RenderOutcome::Complete
        } else {
            RenderOutcome::Partial {
                unsupported: self.unsupported,
            }
        };
        (self.buffer, outcome)
    }
}

// ============================================================================
// TOP-LEVEL API
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Complete,
    Partial { unsupported: Vec<UnsupportedNode> },
}

impl RenderOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, RenderOutcome::Complete)
    }

    pub fn unsupported(&self) -> &[UnsupportedNode] {
        match self {
            RenderOutcome::Complete => &[],
            RenderOutcome::Partial { unsupported } => unsupported,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    pub text: String,
    pub outcome: RenderOutcome,
}

/// Library-level switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Treat partial output as a failure at the caller's boundary.
    pub strict: bool,
}

impl RenderOptions {
    pub fn accepts(&self, outcome: &RenderOutcome) -> bool {
        !self.strict || outcome.is_complete()
    }
}

/// Reconstructs the source of `root`, reporting unsupported nodes to `sink`.
pub fn reconstruct(
    root: &StatBlock,
    registry: &RendererRegistry,
    sink: &mut dyn DiagnosticSink,
) -> Result<Reconstruction, ReconstructError> {
    let mut cx = RenderContext::new(registry, sink);
    walk(root, &mut cx)?;
    let (buffer, outcome) = cx.finish();
    debug!(
        rows = buffer.row_count(),
        complete = outcome.is_complete(),
        "reconstruction finished"
    );
    Ok(Reconstruction {
        text: buffer.render(),
        outcome,
    })
}

/// [`reconstruct`] with the default registry, discarding diagnostics. The outcome still lists
/// every unsupported node.
pub fn reconstruct_default(root: &StatBlock) -> Result<Reconstruction, ReconstructError> {
    reconstruct(root, default_registry(), &mut NullSink)
}
