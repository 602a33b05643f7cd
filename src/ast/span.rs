//! Source locations as recorded by the Luau AST dump.
//!
//! Every node carries a `location` string of the form `"r1,c1 - r2,c2"`. The string is kept
//! verbatim on the node and only parsed when a renderer actually needs a coordinate, so a
//! malformed location on a node that is never placed does not fail the whole render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diagnostics::ReconstructError;

// ============================================================================
// COORDINATES AND SPANS
// ============================================================================

/// Largest row or column a location may name. Anything past it is rejected when parsing
/// rather than grown into.
pub const MAX_COORDINATE: usize = 1 << 20;

/// Zero-based (row, column) position in the reconstructed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The coordinate `n` columns to the left, saturating at column 0.
    pub fn back(self, n: usize) -> Self {
        Self {
            row: self.row,
            column: self.column.saturating_sub(n),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

impl FromStr for Coordinate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `row,col`, found `{s}`"))?;
        Ok(Self {
            row: parse_component("row", row)?,
            column: parse_component("column", column)?,
        })
    }
}

fn parse_component(what: &str, raw: &str) -> Result<usize, String> {
    let raw = raw.trim();
    let value: usize = raw
        .parse()
        .map_err(|_| format!("{what} `{raw}` is not a non-negative integer"))?;
    if value > MAX_COORDINATE {
        return Err(format!("{what} `{raw}` exceeds the limit of {MAX_COORDINATE}"));
    }
    Ok(value)
}

/// Start and end coordinates of a node. The end is exclusive, as in the Luau dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Span {
    /// Position of the last character covered by the span (one column before `end`).
    pub fn last(&self) -> Coordinate {
        self.end.back(1)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

// ============================================================================
// RAW LOCATION STRINGS
// ============================================================================

/// The unparsed `location` field of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(pub String);

impl Location {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the full span, failing with [`ReconstructError::MalformedSpan`].
    pub fn span(&self) -> Result<Span, ReconstructError> {
        let malformed = |reason: String| ReconstructError::MalformedSpan {
            location: self.0.clone(),
            reason,
        };
        let (start, end) = self
            .0
            .split_once('-')
            .ok_or_else(|| malformed("expected `r1,c1 - r2,c2`".to_string()))?;
        Ok(Span {
            start: start.trim().parse().map_err(malformed)?,
            end: end.trim().parse().map_err(malformed)?,
        })
    }

    pub fn start(&self) -> Result<Coordinate, ReconstructError> {
        Ok(self.span()?.start)
    }

    pub fn end(&self) -> Result<Coordinate, ReconstructError> {
        Ok(self.span()?.end)
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
