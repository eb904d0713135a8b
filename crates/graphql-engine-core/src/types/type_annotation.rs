use crate::schema::Schema;
use crate::types::GraphQLType;
use graphql_engine_parser::ast;
use std::fmt;

/// Why a [`TypeAnnotation`] could not be built.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TypeAnnotationError {
    #[error("a non-null type cannot wrap another non-null type")]
    DoubleNonNull,

    #[error("invalid type reference: {0}")]
    Syntax(String),
}

/// A reference to a named type, possibly wrapped in list and non-null
/// layers, as used for field, argument, input field and variable types.
///
/// Non-null-ness is a flag on each layer rather than a wrapper of its own,
/// so a non-null type wrapping another non-null type cannot be represented.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ListTypeAnnotation {
    pub(super) inner_type: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}

impl ListTypeAnnotation {
    pub fn inner_type(&self) -> &TypeAnnotation {
        &self.inner_type
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(super) name: String,
    pub(super) nullable: bool,
}

impl NamedTypeAnnotation {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

impl TypeAnnotation {
    /// A nullable reference to the type called `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedTypeAnnotation {
            name: name.into(),
            nullable: true,
        })
    }

    /// A nullable list of `inner`.
    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type: Box::new(inner),
            nullable: true,
        })
    }

    /// A non-null reference to the type called `name`.
    pub fn non_null_named(name: impl Into<String>) -> Self {
        Self::Named(NamedTypeAnnotation {
            name: name.into(),
            nullable: false,
        })
    }

    /// A non-null list of `inner`.
    pub fn non_null_list(inner: TypeAnnotation) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type: Box::new(inner),
            nullable: false,
        })
    }

    /// Wraps this annotation in a non-null layer.
    pub fn non_null(self) -> Result<Self, TypeAnnotationError> {
        if !self.is_nullable() {
            return Err(TypeAnnotationError::DoubleNonNull);
        }
        Ok(self.with_nullability(false))
    }

    /// Parses GraphQL type syntax such as `[String!]!`.
    pub fn parse(text: &str) -> Result<Self, TypeAnnotationError> {
        let ast_type = graphql_engine_parser::parse_type(text)
            .map_err(|err| TypeAnnotationError::Syntax(err.message().to_string()))?;
        Self::from_ast(&ast_type)
    }

    /// Converts a parsed type reference. The named type is not looked up.
    pub fn from_ast(ast_type: &ast::TypeAnnotation) -> Result<Self, TypeAnnotationError> {
        match ast_type {
            ast::TypeAnnotation::Named(named) => Ok(Self::named(named.name.value.as_str())),
            ast::TypeAnnotation::List(list) => Ok(Self::list(Self::from_ast(&list.of_type)?)),
            ast::TypeAnnotation::NonNull(non_null) => {
                Self::from_ast(&non_null.of_type)?.non_null()
            },
        }
    }

    /// Converts back to an AST type reference (without locations).
    pub fn to_ast(&self) -> ast::TypeAnnotation {
        let nullable_ast = match self {
            Self::Named(named) => ast::TypeAnnotation::Named(ast::NamedType::new(named.name.as_str())),
            Self::List(list) => ast::TypeAnnotation::List(Box::new(ast::ListType {
                of_type: list.inner_type.to_ast(),
                span: None,
            })),
        };
        if self.is_nullable() {
            nullable_ast
        } else {
            ast::TypeAnnotation::NonNull(Box::new(ast::NonNullType {
                of_type: nullable_ast,
                span: None,
            }))
        }
    }

    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List(list) => list.nullable,
            Self::Named(named) => named.nullable,
        }
    }

    pub fn is_non_null(&self) -> bool {
        !self.is_nullable()
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// This annotation with its outer non-null layer (if any) removed.
    pub fn nullable_type(&self) -> TypeAnnotation {
        self.clone().with_nullability(true)
    }

    /// The element type, if this is a list type (nullable or not).
    pub fn list_item_type(&self) -> Option<&TypeAnnotation> {
        self.as_list_annotation().map(|list| list.inner_type.as_ref())
    }

    /// The name of the named type beneath every list and non-null layer.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List(list) => list.inner_type.innermost_name(),
            Self::Named(named) => named.name.as_str(),
        }
    }

    /// Looks up the named type beneath every wrapper layer.
    pub fn named_type<'schema>(&self, schema: &'schema Schema) -> Option<&'schema GraphQLType> {
        schema.type_named(self.innermost_name())
    }

    /// Whether this annotation is an input type within `schema`. Unknown
    /// names are not.
    pub fn is_input_type(&self, schema: &Schema) -> bool {
        self.named_type(schema).is_some_and(GraphQLType::is_input_type)
    }

    /// Whether this annotation is an output type within `schema`. Unknown
    /// names are not.
    pub fn is_output_type(&self, schema: &Schema) -> bool {
        self.named_type(schema).is_some_and(GraphQLType::is_output_type)
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }

    fn with_nullability(self, nullable: bool) -> Self {
        match self {
            Self::List(list) => Self::List(ListTypeAnnotation { nullable, ..list }),
            Self::Named(named) => Self::Named(NamedTypeAnnotation { nullable, ..named }),
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(list) => write!(f, "[{}]", list.inner_type)?,
            Self::Named(named) => f.write_str(&named.name)?,
        }
        if !self.is_nullable() {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// Resolves a parsed type reference against `schema`, returning `None` when
/// the named type does not exist.
pub fn type_from_ast(schema: &Schema, ast_type: &ast::TypeAnnotation) -> Option<TypeAnnotation> {
    schema.type_named(ast_type.innermost_name())?;
    TypeAnnotation::from_ast(ast_type).ok()
}
