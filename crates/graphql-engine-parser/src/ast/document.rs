use std::sync::Arc;

use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use crate::GraphQLSourceSpan;
use crate::Source;

/// The root of a parsed GraphQL document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub span: Option<GraphQLSourceSpan>,
    /// The source this document was parsed from, unless parsing was asked not
    /// to retain it.
    pub source: Option<Arc<Source>>,
}

impl Document {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }

    /// The first fragment definition named `name`.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|frag| frag.name.value == name)
    }
}

/// A top-level definition within a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    ScalarType(ScalarTypeDefinition),
    ObjectType(ObjectTypeDefinition),
    InterfaceType(InterfaceTypeDefinition),
    UnionType(UnionTypeDefinition),
    EnumType(EnumTypeDefinition),
    InputObjectType(InputObjectTypeDefinition),
    TypeExtension(TypeExtensionDefinition),
    Directive(DirectiveDefinition),
}

impl Definition {
    pub fn span(&self) -> Option<GraphQLSourceSpan> {
        match self {
            Definition::Operation(def) => def.span,
            Definition::Fragment(def) => def.span,
            Definition::Schema(def) => def.span,
            Definition::ScalarType(def) => def.span,
            Definition::ObjectType(def) => def.span,
            Definition::InterfaceType(def) => def.span,
            Definition::UnionType(def) => def.span,
            Definition::EnumType(def) => def.span,
            Definition::InputObjectType(def) => def.span,
            Definition::TypeExtension(def) => def.span,
            Definition::Directive(def) => def.span,
        }
    }

    /// Whether this definition can be executed (operations and fragments).
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }
}
