use crate::SourceLocation;

/// A position within GraphQL source text, tracked by the lexer as it scans.
///
/// # Indexing Convention
///
/// **All stored values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: character count within the current line
/// - `col_utf16`: UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// Use [`SourcePosition::location()`] for the 1-based line/column pair that
/// is reported to callers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the first character of a document.
    pub fn start() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    ///
    /// This increments by 1 for each character regardless of its byte
    /// representation.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    ///
    /// Characters outside the Basic Multilingual Plane advance this by 2.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// The 1-based line/column pair for this position.
    pub fn location(&self) -> SourceLocation {
        SourceLocation {
            line: self.line + 1,
            column: self.col_utf8 + 1,
        }
    }
}
