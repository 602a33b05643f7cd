//! Coordinate-addressed text buffer.
//!
//! Rows are sparse: a cell that was never written holds `None` and only becomes a blank when
//! the buffer is rendered. Writes may land anywhere and in any order; a later write to an
//! occupied cell replaces it.

use std::fmt;

use crate::ast::Coordinate;

/// How an embedded line break inside written text is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Line breaks move to column 0 of the next row. Existing rows never move.
    #[default]
    Overwrite,
    /// Text with a line break is laid onto freshly spliced rows, pushing the target row and
    /// everything below it down by one row per line of text. Single-line text is written in
    /// place, as in `Overwrite`.
    Insert,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionedBuffer {
    rows: Vec<Vec<Option<char>>>,
}

impl PositionedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes `text` starting at `at`.
    pub fn write_at(&mut self, text: &str, at: Coordinate, mode: WriteMode) {
        let Coordinate { mut row, mut column } = at;
        if mode == WriteMode::Insert && text.contains('\n') {
            self.grow_to(row);
            self.rows.insert(row, Vec::new());
        } else {
            self.grow_to(row + 1);
        }

        for ch in text.chars() {
            if ch == '\n' {
                row += 1;
                column = 0;
                match mode {
                    WriteMode::Overwrite => self.grow_to(row + 1),
                    WriteMode::Insert => self.rows.insert(row, Vec::new()),
                }
                continue;
            }
            self.set(row, column, ch);
            column += 1;
        }
    }

    /// Writes `text` directly after the last cell of the last row.
    pub fn append(&mut self, text: &str) {
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        let row = self.rows.len() - 1;
        let column = self.rows[row].len();
        self.write_at(text, Coordinate::new(row, column), WriteMode::Overwrite);
    }

    /// The rendered text of a single row, or `None` past the end of the buffer.
    pub fn row(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(|cells| render_row(cells))
    }

    /// Joins all rows with `\n`, filling unwritten cells with spaces.
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|cells| render_row(cells))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn grow_to(&mut self, rows: usize) {
        if self.rows.len() < rows {
            self.rows.resize_with(rows, Vec::new);
        }
    }

    fn set(&mut self, row: usize, column: usize, ch: char) {
        let cells = &mut self.rows[row];
        if cells.len() <= column {
            cells.resize(column + 1, None);
        }
        cells[column] = Some(ch);
    }
}

impl fmt::Display for PositionedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn render_row(cells: &[Option<char>]) -> String {
    cells.iter().map(|cell| cell.unwrap_or(' ')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, column: usize) -> Coordinate {
        Coordinate::new(row, column)
    }

    #[test]
    fn write_grows_rows_to_reach_target() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("text", at(5, 0), WriteMode::Overwrite);
        assert_eq!(buf.row_count(), 6);
        for row in 0..5 {
            assert_eq!(buf.row(row).as_deref(), Some(""));
        }
        assert_eq!(buf.row(5).as_deref(), Some("text"));
        assert_eq!(buf.render(), "\n\n\n\n\ntext");
    }

    #[test]
    fn gaps_render_as_spaces() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("b", at(0, 4), WriteMode::Overwrite);
        buf.write_at("a", at(0, 1), WriteMode::Overwrite);
        assert_eq!(buf.render(), " a  b");
    }

    #[test]
    fn overwrite_is_idempotent() {
        let mut once = PositionedBuffer::new();
        once.write_at("local", at(1, 2), WriteMode::Overwrite);
        let mut twice = once.clone();
        twice.write_at("local", at(1, 2), WriteMode::Overwrite);
        assert_eq!(once, twice);
    }

    #[test]
    fn last_write_wins() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("xxxx", at(0, 0), WriteMode::Overwrite);
        buf.write_at("ab", at(0, 1), WriteMode::Overwrite);
        assert_eq!(buf.render(), "xabx");
    }

    #[test]
    fn overwrite_line_break_keeps_rows_in_place() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("x", at(0, 0), WriteMode::Overwrite);
        buf.write_at("yyy", at(1, 0), WriteMode::Overwrite);
        buf.write_at("a\nb", at(0, 2), WriteMode::Overwrite);
        assert_eq!(buf.row_count(), 2);
        assert_eq!(buf.render(), "x a\nbyy");
    }

    #[test]
    fn overwrite_line_break_opens_missing_row() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("do\nend", at(0, 0), WriteMode::Overwrite);
        assert_eq!(buf.render(), "do\nend");
    }

    #[test]
    fn insert_line_break_shifts_following_rows() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("x", at(0, 0), WriteMode::Overwrite);
        buf.write_at("a\nb", at(0, 0), WriteMode::Insert);
        assert_eq!(buf.row(0).as_deref(), Some("a"));
        assert_eq!(buf.row(1).as_deref(), Some("b"));
        assert_eq!(buf.row(2).as_deref(), Some("x"));
        assert_eq!(buf.row_count(), 3);
    }

    #[test]
    fn single_line_insert_writes_in_place() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("x", at(0, 0), WriteMode::Overwrite);
        buf.write_at("y", at(0, 0), WriteMode::Insert);
        assert_eq!(buf.row_count(), 1);
        assert_eq!(buf.render(), "y");
    }

    #[test]
    fn insert_on_empty_buffer_does_not_leave_trailing_row() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("end", at(2, 0), WriteMode::Insert);
        assert_eq!(buf.render(), "\n\nend");
    }

    #[test]
    fn append_follows_last_written_cell() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("a", at(0, 0), WriteMode::Overwrite);
        buf.append(",");
        buf.append("b");
        assert_eq!(buf.render(), "a,b");
    }

    #[test]
    fn append_to_empty_buffer_starts_a_row() {
        let mut buf = PositionedBuffer::new();
        buf.append(" = ");
        assert_eq!(buf.row_count(), 1);
        assert_eq!(buf.render(), " = ");
    }

    #[test]
    fn append_targets_last_row_even_if_empty() {
        let mut buf = PositionedBuffer::new();
        buf.write_at("a", at(0, 0), WriteMode::Overwrite);
        buf.write_at("", at(2, 0), WriteMode::Overwrite);
        buf.append("b");
        assert_eq!(buf.render(), "a\n\nb");
    }
}
