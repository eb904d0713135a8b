use crate::types::GraphQLType;

/// The category of a type, as reported by introspection's `__TypeKind`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}

impl GraphQLTypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }
}

impl From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Scalar(_) => Self::Scalar,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
