mod deprecation_state;
mod directive;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod scalar_type;
pub mod scalars;
mod thunk;
mod type_annotation;
mod type_comparators;
mod union_type;

pub use deprecation_state::DeprecationState;
pub use directive::Directive;
pub use directive::deprecated_directive;
pub use directive::include_directive;
pub use directive::skip_directive;
pub use directive::specified_directives;
pub use directive::DEFAULT_DEPRECATION_REASON;
pub use enum_type::EnumType;
pub use enum_type::EnumTypeBuilder;
pub use enum_type::EnumValue;
pub use field::Field;
pub use field::InputValue;
pub use field::Resolver;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use input_object_type::InputObjectTypeBuilder;
pub use interface_type::InterfaceType;
pub use interface_type::InterfaceTypeBuilder;
pub use object_type::IsTypeOfFn;
pub use object_type::ObjectType;
pub use object_type::ObjectTypeBuilder;
pub use scalar_type::ParseLiteralFn;
pub use scalar_type::ScalarCoercionFn;
pub use scalar_type::ScalarType;
pub use scalar_type::ScalarTypeBuilder;
pub use thunk::Thunk;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_annotation::TypeAnnotationError;
pub use type_annotation::type_from_ast;
pub use type_comparators::do_types_overlap;
pub use type_comparators::is_equal_type;
pub use type_comparators::is_type_sub_type_of;
pub use union_type::TypeResolverFn;
pub use union_type::UnionType;
pub use union_type::UnionTypeBuilder;

pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub(crate) use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;

#[cfg(test)]
mod tests;
