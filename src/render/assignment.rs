//! Shared rendering for `local a, b = x, y` and `a, b = x, y`.
//!
//! Targets and values are placed at their own coordinates, but the `,` and ` = ` separators
//! are appended after whatever the buffer last received. An unsupported target or value halts
//! only its own list after reporting it: a halted target list still goes on to the values.

use crate::ast::{kind, Node};
use crate::diagnostics::ReconstructError;
use crate::render::{Dispatch, RenderContext};

/// Renders the target list, then ` = ` and the value list when values are present.
pub fn render_assignment(
    vars: &[Node],
    values: Option<&[Node]>,
    cx: &mut RenderContext<'_>,
) -> Result<Dispatch, ReconstructError> {
    let targets = cx.dispatch_list(vars, ",")?;
    let Some(values) = values else {
        return Ok(targets);
    };
    if let Some(first) = values.first() {
        if cx.registry().has(first.kind()) {
            cx.append(" = ");
        }
    }
    let values = cx.dispatch_list(values, ",")?;
    if targets.is_unsupported() {
        return Ok(Dispatch::Unsupported);
    }
    Ok(values)
}

pub(crate) fn render_local(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Local(local) = node else {
        return Err(ReconstructError::kind_mismatch(kind::STAT_LOCAL, node));
    };
    cx.write("local", local.location.start()?);
    render_assignment(&local.vars, local.values.as_deref(), cx)?;
    Ok(())
}

pub(crate) fn render_assign(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Assign(assign) = node else {
        return Err(ReconstructError::kind_mismatch(kind::STAT_ASSIGN, node));
    };
    render_assignment(&assign.vars, assign.values.as_deref(), cx)?;
    Ok(())
}
