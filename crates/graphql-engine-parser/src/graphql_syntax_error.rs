use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxErrorKind;
use crate::SmallVec;
use crate::SourceLocation;

/// A fatal lexing or parsing failure.
///
/// Parsing stops at the first syntax error; no partial document is produced.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLSyntaxError {
    message: String,
    span: GraphQLSourceSpan,
    kind: GraphQLSyntaxErrorKind,
    notes: SmallVec<[String; 2]>,
    source_name: Option<String>,
}

impl GraphQLSyntaxError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLSyntaxErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: SmallVec::new(),
            source_name: None,
        }
    }

    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        notes: SmallVec<[String; 2]>,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLSyntaxErrorKind::LexerError,
            notes,
            source_name: None,
        }
    }

    /// Attaches the name of the [`Source`](crate::Source) this error came
    /// from.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLSyntaxErrorKind {
        &self.kind
    }

    /// Additional help text attached by the lexer or parser.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(message.into());
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// The 1-based line/column where the error starts.
    pub fn location(&self) -> SourceLocation {
        self.span.location()
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// GraphQL request:5:12: error: expected `:`, found `}`
    /// ```
    pub fn format_oneline(&self) -> String {
        let name = self.source_name.as_deref().unwrap_or("<input>");
        let SourceLocation { line, column } = self.location();
        format!("{name}:{line}:{column}: error: {}", self.message)
    }
}
