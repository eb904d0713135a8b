use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;

/// `schema { query: Q mutation: M }`
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub operation: OperationKind,
    pub named_type: NamedType,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeAnnotation,
    pub directives: Vec<Directive>,
    pub span: Option<GraphQLSourceSpan>,
}

/// An argument or input-object field definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub value_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub span: Option<GraphQLSourceSpan>,
}

/// `extend type Foo { ... }`. Only object type extensions are supported.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtensionDefinition {
    pub definition: ObjectTypeDefinition,
    pub span: Option<GraphQLSourceSpan>,
}

/// `directive @name(args) on LOCATION | LOCATION`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub locations: Vec<Name>,
    pub span: Option<GraphQLSourceSpan>,
}
