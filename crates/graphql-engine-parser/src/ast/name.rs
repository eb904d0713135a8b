use crate::GraphQLSourceSpan;

/// A GraphQL name (identifier): type, field, argument, directive, variable,
/// fragment and enum value names.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Name {
    pub value: String,
    pub span: Option<GraphQLSourceSpan>,
}

impl Name {
    /// A name with no source location, for synthesized nodes.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
