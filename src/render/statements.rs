//! Statements other than blocks and assignments.

use crate::ast::{kind, Node};
use crate::diagnostics::ReconstructError;
use crate::render::RenderContext;

pub(crate) fn render_return(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Return(ret) = node else {
        return Err(ReconstructError::kind_mismatch(kind::STAT_RETURN, node));
    };
    cx.write("return", ret.location.start()?);
    cx.dispatch_list(&ret.list, ",")?;
    Ok(())
}

pub(crate) fn render_expr_stat(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::ExprStat(stat) = node else {
        return Err(ReconstructError::kind_mismatch(kind::STAT_EXPR, node));
    };
    cx.dispatch(&stat.expr)?;
    Ok(())
}

pub(crate) fn render_break(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    if !matches!(node, Node::Break(_)) {
        return Err(ReconstructError::kind_mismatch(kind::STAT_BREAK, node));
    }
    cx.write_at_start("break", node)
}

pub(crate) fn render_continue(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    if !matches!(node, Node::Continue(_)) {
        return Err(ReconstructError::kind_mismatch(kind::STAT_CONTINUE, node));
    }
    cx.write_at_start("continue", node)
}
