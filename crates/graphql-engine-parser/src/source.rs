use serde::Serialize;

/// A 1-based line/column pair, as surfaced to callers in error locations.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

/// The raw text of a GraphQL document along with a display name used when
/// reporting errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    pub const DEFAULT_NAME: &'static str = "GraphQL request";

    pub fn new(body: impl Into<String>) -> Self {
        Self::with_name(body, Self::DEFAULT_NAME)
    }

    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Computes the 1-based line/column of `byte_offset` within this source.
    ///
    /// `\r\n`, `\n` and `\r` each end a line. Offsets past the end of the body
    /// are clamped to the end.
    pub fn location_at(&self, byte_offset: usize) -> SourceLocation {
        let mut line = 1;
        let mut column = 1;
        let mut last_was_cr = false;
        for (offset, ch) in self.body.char_indices() {
            if offset >= byte_offset {
                break;
            }
            match ch {
                '\n' if last_was_cr => {
                    last_was_cr = false;
                },
                '\n' => {
                    line += 1;
                    column = 1;
                },
                '\r' => {
                    line += 1;
                    column = 1;
                    last_was_cr = true;
                },
                _ => {
                    column += 1;
                    last_was_cr = false;
                },
            }
        }
        SourceLocation { line, column }
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}
