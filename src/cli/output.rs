//! User-facing CLI output: colored diagnostics on stderr and source diffs on stdout.

use std::io::Write;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::{DiagnosticSink, UnsupportedNode};

// ============================================================================
// DIAGNOSTIC SINKS
// ============================================================================

/// Writes every unsupported node to stderr, followed by the node's own data.
pub struct StderrSink {
    stream: StandardStream,
}

impl StderrSink {
    pub fn new() -> Self {
        Self {
            stream: StandardStream::stderr(ColorChoice::Auto),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: &UnsupportedNode) {
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
        let _ = write!(self.stream, "warning");
        let _ = self.stream.reset();
        let _ = writeln!(self.stream, ": {diagnostic}");
        let _ = writeln!(self.stream, "  {}", diagnostic.detail);
    }
}

// ============================================================================
// DIFFS
// ============================================================================

/// Prints a line diff from `expected` to `actual`. Returns whether the two differ.
pub fn print_diff(expected: &str, actual: &str) -> bool {
    let changeset = Changeset::new(expected, actual, "\n");
    if changeset.distance == 0 {
        return false;
    }
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(x) => {
                let _ = stdout.reset();
                for line in x.lines() {
                    println!(" {line}");
                }
            }
            Difference::Add(x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                for line in x.lines() {
                    println!("+{line}");
                }
            }
            Difference::Rem(x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                for line in x.lines() {
                    println!("-{line}");
                }
            }
        }
    }
    let _ = stdout.reset();
    true
}

pub fn print_kinds(kinds: &[String]) {
    if kinds.is_empty() {
        println!("  No renderers registered.");
        return;
    }
    for kind in kinds {
        println!("  {kind}");
    }
}
