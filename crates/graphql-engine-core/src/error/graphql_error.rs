use graphql_engine_parser::GraphQLSourceSpan;
use graphql_engine_parser::GraphQLSyntaxError;
use graphql_engine_parser::Source;
use graphql_engine_parser::SourceLocation;
use serde::Serialize;
use std::fmt;

/// A 1-based `{line, column}` pair reported to callers.
pub type ErrorLocation = SourceLocation;

/// One step of a response path: an object key or a list index.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A validation or execution error.
///
/// Serializes to the response shape `{message, locations?, path?}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    pub message: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    /// Name of the [`Source`] the locations refer to, when known.
    #[serde(skip)]
    pub source_name: Option<String>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: None,
            source_name: None,
        }
    }

    /// An error located at the start of each span. Spans that are `None`
    /// (nodes parsed without locations) contribute nothing.
    pub fn with_spans(
        message: impl Into<String>,
        spans: impl IntoIterator<Item = Option<GraphQLSourceSpan>>,
    ) -> Self {
        let mut error = Self::new(message);
        error.locations = spans
            .into_iter()
            .flatten()
            .map(|span| span.location())
            .collect();
        error
    }

    /// An error located at byte offsets within `source`.
    pub fn from_source(
        message: impl Into<String>,
        source: &Source,
        byte_offsets: &[usize],
    ) -> Self {
        let mut error = Self::new(message);
        error.locations = byte_offsets
            .iter()
            .map(|offset| source.location_at(*offset))
            .collect();
        error.source_name = Some(source.name().to_string());
        error
    }

    #[must_use]
    pub fn at(mut self, span: Option<GraphQLSourceSpan>) -> Self {
        if let Some(span) = span {
            self.locations.push(span.location());
        }
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }

    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}

impl From<GraphQLSyntaxError> for GraphQLError {
    fn from(error: GraphQLSyntaxError) -> Self {
        Self {
            message: format!("Syntax Error: {}", error.message()),
            locations: vec![error.location()],
            path: None,
            source_name: error.source_name().map(str::to_string),
        }
    }
}
