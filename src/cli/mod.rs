//! The `luau-reconstruct` command-line interface.
//!
//! Loads AST dumps, drives the reconstruction core and reports through colored stderr output.
//! The core itself never prints; everything user-facing lives here.

use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::ast::AstDocument;
use crate::cli::args::{Command, ReconstructArgs};
use crate::cli::output::{print_diff, print_kinds, StderrSink};
use crate::diagnostics::ReconstructError;
use crate::render::{default_registry, reconstruct, Reconstruction, RenderOptions};

pub mod args;
pub mod output;

/// Exit status when `--strict` rejects a partial reconstruction.
pub const EXIT_PARTIAL: i32 = 2;

/// The main entry point for the CLI.
pub fn run() {
    let args = ReconstructArgs::parse();
    init_tracing(args.verbose);

    let code = match args.command {
        Command::Render {
            file,
            output,
            strict,
        } => handle_render(&file, output.as_deref(), RenderOptions { strict }),
        Command::Diff { file, source } => handle_diff(&file, &source),
        Command::Ast { file } => handle_ast(&file),
        Command::ListKinds => {
            print_kinds(&default_registry().list());
            Ok(0)
        }
    };

    match code {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ============================================================================
// SUBCOMMAND HANDLERS
// ============================================================================

fn handle_render(
    file: &Path,
    output: Option<&Path>,
    options: RenderOptions,
) -> Result<i32, ReconstructError> {
    let result = reconstruct_file(file)?;
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", result.text)).map_err(|source| {
                ReconstructError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }
        None => println!("{}", result.text),
    }
    if options.accepts(&result.outcome) {
        Ok(0)
    } else {
        eprintln!(
            "reconstruction is partial: {} unsupported node(s)",
            result.outcome.unsupported().len()
        );
        Ok(EXIT_PARTIAL)
    }
}

fn handle_diff(file: &Path, source: &Path) -> Result<i32, ReconstructError> {
    let result = reconstruct_file(file)?;
    let original = std::fs::read_to_string(source).map_err(|e| ReconstructError::Io {
        path: source.to_path_buf(),
        source: e,
    })?;
    let expected = original.trim_end_matches(['\n', '\r']);
    if print_diff(expected, &result.text) {
        Ok(1)
    } else {
        println!("reconstruction matches {}", source.display());
        Ok(0)
    }
}

fn handle_ast(file: &Path) -> Result<i32, ReconstructError> {
    let document = AstDocument::from_path(file)?;
    if document.root.body.is_empty() {
        println!("(empty)");
    }
    for (index, node) in document.root.body.iter().enumerate() {
        println!("\nStatement {}: {node}", index + 1);
        println!("{node:#?}");
    }
    Ok(0)
}

fn reconstruct_file(file: &Path) -> Result<Reconstruction, ReconstructError> {
    let document = AstDocument::from_path(file)?;
    let mut sink = StderrSink::new();
    reconstruct(&document.root, default_registry(), &mut sink)
}
