//! # Renderer Registry
//!
//! Maps a node kind tag to the function that renders it. The default registry covers the kinds
//! listed in [`build_default_registry`]; callers extend coverage by registering their own
//! functions, including for kinds that decode into [`crate::ast::Node::Other`].
//!
//! ## Usage
//! ```rust
//! use luau_reconstruct::render::build_default_registry;
//! let registry = build_default_registry();
//! assert!(registry.has("AstStatLocal"));
//! assert!(!registry.has("AstStatWhile"));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ast::{kind, Node};
use crate::diagnostics::ReconstructError;
use crate::render::{assignment, expressions, literals, statements, walker, RenderContext};

/// Renderer signature. A renderer's only effect is writing through the context.
pub type RenderFn = fn(node: &Node, cx: &mut RenderContext<'_>) -> Result<(), ReconstructError>;

/// Registry key for the `do ... end` path. Not a kind the dump ever emits; the walker routes
/// nested statement blocks here.
pub const DO_BLOCK: &str = "DoBlock";

#[derive(Default, Clone)]
pub struct RendererRegistry {
    renderers: HashMap<String, RenderFn>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: &str) -> Option<RenderFn> {
        self.renderers.get(kind).copied()
    }

    pub fn has(&self, kind: &str) -> bool {
        self.renderers.contains_key(kind)
    }

    /// Registered kinds, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.renderers.keys().cloned().collect();
        kinds.sort();
        kinds
    }

    /// Adds or replaces the renderer for `kind`.
    pub fn register(&mut self, kind: &str, render: RenderFn) {
        self.renderers.insert(kind.to_string(), render);
    }

    pub fn remove(&mut self, kind: &str) -> Option<RenderFn> {
        self.renderers.remove(kind)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("kinds", &self.list())
            .finish()
    }
}

/// Builds a registry with every built-in renderer.
pub fn build_default_registry() -> RendererRegistry {
    let mut registry = RendererRegistry::new();

    // Blocks and statements
    registry.register(kind::STAT_BLOCK, walker::render_block_body);
    registry.register(DO_BLOCK, walker::render_do_block_node);
    registry.register(kind::STAT_LOCAL, assignment::render_local);
    registry.register(kind::STAT_ASSIGN, assignment::render_assign);
    registry.register(kind::STAT_RETURN, statements::render_return);
    registry.register(kind::STAT_EXPR, statements::render_expr_stat);
    registry.register(kind::STAT_BREAK, statements::render_break);
    registry.register(kind::STAT_CONTINUE, statements::render_continue);

    // Names
    registry.register(kind::LOCAL, expressions::render_binding);
    registry.register(kind::EXPR_LOCAL, expressions::render_local_ref);
    registry.register(kind::EXPR_GLOBAL, expressions::render_global);

    // Compound expressions
    registry.register(kind::EXPR_INDEX_NAME, expressions::render_index_name);
    registry.register(kind::EXPR_GROUP, expressions::render_group);
    registry.register(kind::EXPR_CALL, expressions::render_call);
    registry.register(kind::EXPR_UNARY, expressions::render_unary);
    registry.register(kind::EXPR_BINARY, expressions::render_binary);
    registry.register(kind::EXPR_VARARGS, expressions::render_varargs);

    // Literals
    registry.register(kind::CONSTANT_BOOL, literals::render_bool);
    registry.register(kind::CONSTANT_NUMBER, literals::render_number);
    registry.register(kind::CONSTANT_STRING, literals::render_string);
    registry.register(kind::CONSTANT_NIL, literals::render_nil);

    registry
}

static DEFAULT_REGISTRY: Lazy<RendererRegistry> = Lazy::new(build_default_registry);

/// Shared, lazily built default registry.
pub fn default_registry() -> &'static RendererRegistry {
    &DEFAULT_REGISTRY
}
