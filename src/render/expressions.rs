//! Name and compound expression renderers.
//!
//! Sub-expressions are placed at their own coordinates. Operators and punctuation the dump
//! records no location for are appended after the previous write, as assignment separators
//! are; closing delimiters go on the last column of the parent span.

use crate::ast::{kind, Node};
use crate::diagnostics::ReconstructError;
use crate::render::RenderContext;

pub(crate) fn render_binding(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Binding(binding) = node else {
        return Err(ReconstructError::kind_mismatch(kind::LOCAL, node));
    };
    cx.write_at_start(&binding.name, node)
}

pub(crate) fn render_local_ref(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::LocalRef(local) = node else {
        return Err(ReconstructError::kind_mismatch(kind::EXPR_LOCAL, node));
    };
    cx.write_at_start(&local.local.name, node)
}

pub(crate) fn render_global(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Global(global) = node else {
        return Err(ReconstructError::kind_mismatch(kind::EXPR_GLOBAL, node));
    };
    cx.write_at_start(&global.global, node)
}

pub(crate) fn render_varargs(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    if !matches!(node, Node::Varargs(_)) {
        return Err(ReconstructError::kind_mismatch(kind::EXPR_VARARGS, node));
    }
    cx.write_at_start("...", node)
}

/// `base.name` or `base:name`.
pub(crate) fn render_index_name(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::IndexName(index) = node else {
        return Err(ReconstructError::kind_mismatch(kind::EXPR_INDEX_NAME, node));
    };
    if cx.dispatch(&index.expr)?.is_unsupported() {
        return Ok(());
    }
    cx.append(index.op.as_deref().unwrap_or("."));
    match &index.index_location {
        Some(location) => cx.write(&index.index, location.start()?),
        None => cx.append(&index.index),
    }
    Ok(())
}

pub(crate) fn render_group(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Group(group) = node else {
        return Err(ReconstructError::kind_mismatch(kind::EXPR_GROUP, node));
    };
    let span = group.location.span()?;
    cx.write("(", span.start);
    if cx.dispatch(&group.expr)?.is_unsupported() {
        return Ok(());
    }
    cx.write(")", span.last());
    Ok(())
}

pub(crate) fn render_call(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Call(call) = node else {
        return Err(ReconstructError::kind_mismatch(kind::EXPR_CALL, node));
    };
    let span = call.location.span()?;
    if cx.dispatch(&call.func)?.is_unsupported() {
        return Ok(());
    }
    cx.append("(");
    if cx.dispatch_list(&call.args, ",")?.is_unsupported() {
        return Ok(());
    }
    cx.write(")", span.last());
    Ok(())
}

pub(crate) fn render_unary(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Unary(unary) = node else {
        return Err(ReconstructError::kind_mismatch(kind::EXPR_UNARY, node));
    };
    cx.write_at_start(unary_operator(&unary.op), node)?;
    cx.dispatch(&unary.expr)?;
    Ok(())
}

pub(crate) fn render_binary(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Binary(binary) = node else {
        return Err(ReconstructError::kind_mismatch(kind::EXPR_BINARY, node));
    };
    if cx.dispatch(&binary.left)?.is_unsupported() {
        return Ok(());
    }
    cx.append(&format!(" {} ", binary_operator(&binary.op)));
    cx.dispatch(&binary.right)?;
    Ok(())
}

/// Luau operator names to source symbols. Anything else is assumed to already be a symbol.
pub fn binary_operator(op: &str) -> &str {
    match op {
        "Add" => "+",
        "Sub" => "-",
        "Mul" => "*",
        "Div" => "/",
        "FloorDiv" => "//",
        "Mod" => "%",
        "Pow" => "^",
        "Concat" => "..",
        "CompareNe" => "~=",
        "CompareEq" => "==",
        "CompareLt" => "<",
        "CompareLe" => "<=",
        "CompareGt" => ">",
        "CompareGe" => ">=",
        "And" => "and",
        "Or" => "or",
        other => other,
    }
}

/// Unary operators, including the trailing space `not` needs.
pub fn unary_operator(op: &str) -> &str {
    match op {
        "Not" | "not" => "not ",
        "Minus" => "-",
        "Len" => "#",
        other => other,
    }
}
