//! Constant renderers. Each writes its canonical text at the node's start coordinate.

use crate::ast::{kind, Node};
use crate::diagnostics::ReconstructError;
use crate::render::RenderContext;

pub(crate) fn render_bool(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Bool(constant) = node else {
        return Err(ReconstructError::kind_mismatch(kind::CONSTANT_BOOL, node));
    };
    let text = if constant.value { "true" } else { "false" };
    cx.write_at_start(text, node)
}

pub(crate) fn render_number(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Number(constant) = node else {
        return Err(ReconstructError::kind_mismatch(kind::CONSTANT_NUMBER, node));
    };
    cx.write_at_start(&format_number(constant.value), node)
}

pub(crate) fn render_string(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    let Node::Str(constant) = node else {
        return Err(ReconstructError::kind_mismatch(kind::CONSTANT_STRING, node));
    };
    cx.write_at_start(&format!("\"{}\"", constant.value), node)
}

pub(crate) fn render_nil(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError> {
    if !matches!(node, Node::Nil(_)) {
        return Err(ReconstructError::kind_mismatch(kind::CONSTANT_NIL, node));
    }
    cx.write_at_start("nil", node)
}

/// Shortest text that reads back as `value` in Luau.
///
/// Magnitudes are always written out in positional form, so `1e21` becomes 22 digits and
/// `1e-7` becomes `0.0000001`. JavaScript's `Number#toString` prints those in exponent form
/// (`1e+21`, `1e-7`); both read back as the same number.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "0/0".to_string()
    } else if value == f64::INFINITY {
        "math.huge".to_string()
    } else if value == f64::NEG_INFINITY {
        "-math.huge".to_string()
    } else {
        // `Display` for f64 already drops a zero fraction (`1.0` -> `1`) and never uses
        // exponent notation.
        value.to_string()
    }
}
