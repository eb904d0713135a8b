use crate::SourceLocation;
use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span anchored at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self::new(pos, pos)
    }

    /// The 1-based location of the first character covered by this span.
    pub fn location(&self) -> SourceLocation {
        self.start_inclusive.location()
    }

    /// Returns the slice of `source` covered by this span, if the span's byte
    /// offsets fall inside it.
    pub fn source_slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(
            self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset(),
        )
    }
}
