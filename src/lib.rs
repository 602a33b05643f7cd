pub use crate::diagnostics::{DiagnosticSink, ReconstructError, UnsupportedNode};
pub use crate::render::{reconstruct, reconstruct_default, Reconstruction, RenderOutcome};

pub mod ast;
pub mod buffer;
pub mod cli;
pub mod diagnostics;
pub mod render;
