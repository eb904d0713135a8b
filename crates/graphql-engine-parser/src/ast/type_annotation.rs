use crate::ast::Name;
use crate::GraphQLSourceSpan;

/// A type reference as written in a document: `Foo`, `[Foo]`, `Foo!`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Named(NamedType),
    List(Box<ListType>),
    NonNull(Box<NonNullType>),
}

impl TypeAnnotation {
    pub fn span(&self) -> Option<GraphQLSourceSpan> {
        match self {
            TypeAnnotation::Named(t) => t.span,
            TypeAnnotation::List(t) => t.span,
            TypeAnnotation::NonNull(t) => t.span,
        }
    }

    /// The name at the core of this annotation, once all list and non-null
    /// wrappers are removed.
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeAnnotation::Named(t) => t.name.as_str(),
            TypeAnnotation::List(t) => t.of_type.innermost_name(),
            TypeAnnotation::NonNull(t) => t.of_type.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub span: Option<GraphQLSourceSpan>,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            span: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub of_type: TypeAnnotation,
    pub span: Option<GraphQLSourceSpan>,
}

/// A non-null wrapper. The grammar never produces a non-null directly inside
/// another non-null.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub of_type: TypeAnnotation,
    pub span: Option<GraphQLSourceSpan>,
}
