//! Statement list traversal.

use tracing::debug;

use crate::ast::{kind, Node, StatBlock};
use crate::diagnostics::ReconstructError;
use crate::render::registry::DO_BLOCK;
use crate::render::{Dispatch, RenderContext};

/// Renders every statement of `block` in order.
///
/// A block nested directly in a statement list can only be a `do ... end`, so it goes through
/// the [`DO_BLOCK`] renderer. The walk of this block stops at the first statement whose kind
/// is neither registered nor a type annotation; enclosing blocks keep going.
pub fn walk(block: &StatBlock, cx: &mut RenderContext<'_>) -> Result<Dispatch, ReconstructError> {
    for statement in &block.body {
        let dispatch = match statement {
            Node::Block(_) => match cx.registry().get(DO_BLOCK) {
                Some(render) => {
                    render(statement, cx)?;
                    Dispatch::Rendered
                }
                None => {
                    cx.report_unsupported(statement);
                    Dispatch::Unsupported
                }
            },
            _ => cx.dispatch(statement)?,
        };
        if dispatch.is_unsupported() {
            debug!(
                location = %block.location,
                halted_at = statement.kind(),
                "halting block walk"
            );
            return Ok(Dispatch::Unsupported);
        }
    }
    Ok(Dispatch::Rendered)
}

/// `do` at the block's start, its body, and `end` at the block's end coordinate when the block
/// owns its terminator.
pub fn render_do_block(block: &StatBlock, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let span = block.location.span()?;
    cx.write("do", span.start);
    walk(block, cx)?;
    if block.has_end {
        cx.write("end", span.end);
    }
    Ok(())
}

pub(crate) fn render_do_block_node(
    node: &Node,
    cx: &mut RenderContext<'_>,
) -> Result<(), ReconstructError> {
    let block = node
        .as_block()
        .ok_or_else(|| ReconstructError::kind_mismatch(kind::STAT_BLOCK, node))?;
    render_do_block(block, cx)
}

/// A block reached through the registry rather than a statement list: a body whose keywords
/// belong to the enclosing construct. Only the statements are written.
pub(crate) fn render_block_body(
    node: &Node,
    cx: &mut RenderContext<'_>,
) -> Result<(), ReconstructError> {
    let block = node
        .as_block()
        .ok_or_else(|| ReconstructError::kind_mismatch(kind::STAT_BLOCK, node))?;
    walk(block, cx)?;
    Ok(())
}
