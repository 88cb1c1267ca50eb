//! Offset to line/column mapping.

use serde::Serialize;

/// Zero-based line and column. Columns count Unicode scalar values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Maps a byte offset in the scanned text to a document position.
///
/// Hosts that already track positions (an editor buffer, for instance) can pass
/// a closure instead of building a [`LineIndex`].
pub trait PositionMapper {
    fn offset_to_position(&self, offset: usize) -> Position;
}

impl<F> PositionMapper for F
where
    F: Fn(usize) -> Position,
{
    fn offset_to_position(&self, offset: usize) -> Position {
        self(offset)
    }
}

/// Line start offsets of a text, for O(log n) position lookups.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a zero-based line without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        let line_text = &self.text[start..end];
        Some(line_text.strip_suffix('\r').unwrap_or(line_text))
    }

    fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }
}

impl PositionMapper for LineIndex<'_> {
    /// Offsets past the end clamp to the end of the text; offsets inside a
    /// multi-byte character count that character as not yet reached.
    fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self.line_of(offset);
        let start = self.line_starts[line];
        let column = self.text[start..]
            .char_indices()
            .take_while(|(i, _)| start + i < offset)
            .count();
        Position { line, column }
    }
}
