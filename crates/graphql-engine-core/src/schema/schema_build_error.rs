/// Why a [`Schema`](crate::Schema) could not be built.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("The `{type_name}` type is referenced by `{referenced_by}` but is not defined")]
    DanglingTypeReference {
        type_name: String,
        referenced_by: String,
    },

    #[error("Multiple directives named `@{directive_name}` were defined")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("The `{type_name}` type must define one or more {members}")]
    EmptyFieldSet {
        type_name: String,
        members: &'static str,
    },

    #[error(
        "The name `{name}` is invalid: names starting with `__` are reserved for \
        introspection"
    )]
    InvalidDunderName {
        name: String,
    },

    #[error("The `{type_name}` type does not correctly implement `{interface_name}`: {reason}")]
    InvalidInterfaceImplementation {
        type_name: String,
        interface_name: String,
        reason: String,
    },

    #[error("The {operation} root operation type must be an object type, but `{type_name}` is not")]
    InvalidRootOperationType {
        operation: &'static str,
        type_name: String,
    },

    #[error("The `{union_name}` union may only include object types, but `{member_name}` is not one")]
    InvalidUnionMember {
        union_name: String,
        member_name: String,
    },

    #[error("`{location}` must have an input type, but `{type_name}` is not one")]
    NonInputTypeInInputPosition {
        location: String,
        type_name: String,
    },

    #[error("`{location}` must have an output type, but `{type_name}` is not one")]
    NonOutputTypeInOutputPosition {
        location: String,
        type_name: String,
    },
}
