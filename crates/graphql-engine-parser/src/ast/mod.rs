//! The owned GraphQL abstract syntax tree.
//!
//! Every node carries an optional [`GraphQLSourceSpan`](crate::GraphQLSourceSpan)
//! (absent when parsed with [`ParseOptions::no_location`](crate::ParseOptions)).
//! [`AstNodeRef`] and [`AstNode`] give a uniform, kind-tagged view over all
//! node types; [`NodeKind::child_fields()`] lists the order in which a node's
//! children are traversed.

mod directive_location;
mod document;
mod executable_defs;
mod name;
mod node;
mod type_annotation;
mod type_system_defs;
mod values;

pub use directive_location::DirectiveLocation;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Argument;
pub use executable_defs::Directive;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationKind;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::Variable;
pub use executable_defs::VariableDefinition;
pub use name::Name;
pub use node::AstNode;
pub use node::AstNodeRef;
pub use node::ChildField;
pub use node::NodeKind;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::TypeAnnotation;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::OperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeExtensionDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
