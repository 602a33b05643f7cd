//! Command-line arguments and subcommands, declared with `clap` derive.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "luau-reconstruct",
    version,
    about = "Rebuild Luau source text from a position-annotated JSON AST."
)]
pub struct ReconstructArgs {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconstruct source text from an AST dump.
    Render {
        /// AST JSON produced by `luau --ast`.
        #[arg(required = true)]
        file: PathBuf,
        /// Write the text here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Exit with status 2 when any node could not be reconstructed.
        #[arg(long)]
        strict: bool,
    },
    /// Reconstruct and diff the result against the original source.
    Diff {
        /// AST JSON produced by `luau --ast`.
        #[arg(required = true)]
        file: PathBuf,
        /// The source file the AST was produced from.
        #[arg(required = true)]
        source: PathBuf,
    },
    /// Show the decoded node tree.
    Ast {
        #[arg(required = true)]
        file: PathBuf,
    },
    /// List node kinds with a registered renderer.
    ListKinds,
}
