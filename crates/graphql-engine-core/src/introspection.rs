//! The introspection system: the `__Schema`, `__Type`, `__Field`,
//! `__InputValue`, `__EnumValue`, `__Directive`, `__TypeKind` and
//! `__DirectiveLocation` types, and the `__schema`, `__type` and
//! `__typename` meta-fields available on every query.
//!
//! Introspection objects are plain JSON values describing the schema
//! element they stand for ("markers"). Scalar properties of a marker are
//! read by the default resolver; fields that lead to other schema elements
//! look them up through [`ResolveInfo::schema`](crate::execution::ResolveInfo).

use crate::Value;
use crate::execution::ResolveParams;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::EnumTypeBuilder;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::scalars;
use crate::values::ast_from_value;
use graphql_engine_parser::ast::DirectiveLocation;
use graphql_engine_parser::printer;
use serde_json::json;
use std::sync::LazyLock;

pub const SCHEMA: &str = "__Schema";
pub const TYPE: &str = "__Type";
pub const FIELD: &str = "__Field";
pub const INPUT_VALUE: &str = "__InputValue";
pub const ENUM_VALUE: &str = "__EnumValue";
pub const DIRECTIVE: &str = "__Directive";
pub const TYPE_KIND: &str = "__TypeKind";
pub const DIRECTIVE_LOCATION: &str = "__DirectiveLocation";

pub const SCHEMA_FIELD: &str = "__schema";
pub const TYPE_FIELD: &str = "__type";
pub const TYPENAME_FIELD: &str = "__typename";

static INTROSPECTION_TYPES: LazyLock<Vec<GraphQLType>> = LazyLock::new(|| {
    vec![
        schema_type(),
        type_type(),
        field_type(),
        input_value_type(),
        enum_value_type(),
        directive_type(),
        type_kind_type(),
        directive_location_type(),
    ]
});

static SCHEMA_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    Field::new(SCHEMA_FIELD, TypeAnnotation::non_null_named(SCHEMA))
        .description("Access the current type schema of this server.")
        .resolve_sync(|_| Ok(json!({})))
});

static TYPE_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    Field::new(TYPE_FIELD, TypeAnnotation::named(TYPE))
        .description("Request the type information of a single type.")
        .argument(InputValue::new("name", TypeAnnotation::non_null_named(scalars::STRING)))
        .resolve_sync(|params| {
            let name = params.arg("name").and_then(Value::as_str).unwrap_or_default();
            Ok(params
                .info
                .schema
                .type_named(name)
                .map_or(Value::Null, named_type_marker))
        })
});

static TYPENAME_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    Field::new(TYPENAME_FIELD, TypeAnnotation::non_null_named(scalars::STRING))
        .description("The name of the current Object type at runtime.")
        .resolve_sync(|params| Ok(Value::String(params.info.parent_type.name().to_string())))
});

/// The eight introspection types. Every schema includes them.
pub fn introspection_types() -> Vec<GraphQLType> {
    INTROSPECTION_TYPES.clone()
}

pub fn is_introspection_type(name: &str) -> bool {
    INTROSPECTION_TYPES.iter().any(|graphql_type| graphql_type.name() == name)
}

/// `__schema: __Schema!`, available on the query root type.
pub fn schema_meta_field() -> &'static Field {
    &SCHEMA_META_FIELD
}

/// `__type(name: String!): __Type`, available on the query root type.
pub fn type_meta_field() -> &'static Field {
    &TYPE_META_FIELD
}

/// `__typename: String!`, available on every object, interface and union.
pub fn typename_meta_field() -> &'static Field {
    &TYPENAME_META_FIELD
}

fn named_type_marker(graphql_type: &GraphQLType) -> Value {
    json!({
        "kind": graphql_type.kind().as_str(),
        "name": graphql_type.name(),
        "description": graphql_type.description(),
    })
}

fn type_marker(schema: &Schema, annotation: &TypeAnnotation) -> Value {
    if annotation.is_non_null() {
        return json!({
            "kind": "NON_NULL",
            "ofType": type_marker(schema, &annotation.nullable_type()),
        });
    }
    match annotation {
        TypeAnnotation::List(list) => json!({
            "kind": "LIST",
            "ofType": type_marker(schema, list.inner_type()),
        }),
        TypeAnnotation::Named(named) => schema
            .type_named(named.name())
            .map_or(Value::Null, named_type_marker),
    }
}

fn input_value_marker(schema: &Schema, input_value: &InputValue) -> Value {
    let default_value = input_value
        .default_value
        .as_ref()
        .and_then(|value| ast_from_value(value, &input_value.value_type, schema))
        .map(|literal| printer::print_value(&literal));
    json!({
        "name": input_value.name,
        "description": input_value.description,
        "type": type_marker(schema, &input_value.value_type),
        "defaultValue": default_value,
    })
}

fn field_marker(schema: &Schema, field: &Field) -> Value {
    json!({
        "name": field.name,
        "description": field.description,
        "args": field
            .arguments
            .values()
            .map(|argument| input_value_marker(schema, argument))
            .collect::<Vec<_>>(),
        "type": type_marker(schema, &field.field_type),
        "isDeprecated": field.is_deprecated(),
        "deprecationReason": field.deprecation_reason,
    })
}

fn enum_value_marker(enum_value: &EnumValue) -> Value {
    json!({
        "name": enum_value.name,
        "description": enum_value.description,
        "isDeprecated": enum_value.deprecation_reason.is_some(),
        "deprecationReason": enum_value.deprecation_reason,
    })
}

fn directive_marker(schema: &Schema, directive: &Directive) -> Value {
    json!({
        "name": directive.name,
        "description": directive.description,
        "locations": directive
            .locations
            .iter()
            .map(DirectiveLocation::as_str)
            .collect::<Vec<_>>(),
        "args": directive
            .arguments
            .values()
            .map(|argument| input_value_marker(schema, argument))
            .collect::<Vec<_>>(),
    })
}

/// The named type a `__Type` marker stands for. Wrapper markers have none.
fn marked_type<'schema>(params: &ResolveParams<'schema>) -> Option<&'schema GraphQLType> {
    let name = params.source.get("name")?.as_str()?;
    params.info.schema.type_named(name)
}

fn include_deprecated(params: &ResolveParams<'_>) -> bool {
    params.arg("includeDeprecated").and_then(Value::as_bool).unwrap_or(false)
}

fn non_null_list_of(name: &str) -> TypeAnnotation {
    TypeAnnotation::non_null_list(TypeAnnotation::non_null_named(name))
}

fn include_deprecated_argument() -> InputValue {
    InputValue::new("includeDeprecated", TypeAnnotation::named(scalars::BOOLEAN))
        .default_value(Value::Bool(false))
}

fn schema_type() -> GraphQLType {
    ObjectType::builder(SCHEMA)
        .description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
             available types and directives on the server, as well as the entry points for \
             query, mutation, and subscription operations.",
        )
        .field(
            Field::new("types", non_null_list_of(TYPE))
                .description("A list of all types supported by this server.")
                .resolve_sync(|params| {
                    Ok(Value::Array(
                        params.info.schema.types().values().map(named_type_marker).collect(),
                    ))
                }),
        )
        .field(
            Field::new("queryType", TypeAnnotation::non_null_named(TYPE))
                .description("The type that query operations will be rooted at.")
                .resolve_sync(|params| {
                    let query_type = GraphQLType::Object(params.info.schema.query_type().clone());
                    Ok(named_type_marker(&query_type))
                }),
        )
        .field(
            Field::new("mutationType", TypeAnnotation::named(TYPE))
                .description(
                    "If this server supports mutation, the type that mutation operations will be \
                     rooted at.",
                )
                .resolve_sync(|params| {
                    Ok(params.info.schema.mutation_type().map_or(Value::Null, |root| {
                        named_type_marker(&GraphQLType::Object(root.clone()))
                    }))
                }),
        )
        .field(
            Field::new("subscriptionType", TypeAnnotation::named(TYPE))
                .description(
                    "If this server support subscription, the type that subscription operations \
                     will be rooted at.",
                )
                .resolve_sync(|params| {
                    Ok(params.info.schema.subscription_type().map_or(Value::Null, |root| {
                        named_type_marker(&GraphQLType::Object(root.clone()))
                    }))
                }),
        )
        .field(
            Field::new("directives", non_null_list_of(DIRECTIVE))
                .description("A list of all directives supported by this server.")
                .resolve_sync(|params| {
                    let schema = params.info.schema;
                    Ok(Value::Array(
                        schema
                            .directives()
                            .values()
                            .map(|directive| directive_marker(schema, directive))
                            .collect(),
                    ))
                }),
        )
        .build()
}

fn type_type() -> GraphQLType {
    ObjectType::builder(TYPE)
        .description(
            "The fundamental unit of any GraphQL Schema is the type. There are many kinds of \
             types in GraphQL as represented by the `__TypeKind` enum.\n\nDepending on the kind \
             of a type, certain fields describe information about that type. Scalar types \
             provide no information beyond a name and description, while Enum types provide \
             their values. Object and Interface types provide the fields they describe. \
             Abstract types, Union and Interface, provide the Object types possible at \
             runtime. List and NonNull types compose other types.",
        )
        .field(Field::new("kind", TypeAnnotation::non_null_named(TYPE_KIND)))
        .field(Field::new("name", TypeAnnotation::named(scalars::STRING)))
        .field(Field::new("description", TypeAnnotation::named(scalars::STRING)))
        .field(
            Field::new("fields", TypeAnnotation::list(TypeAnnotation::non_null_named(FIELD)))
                .argument(include_deprecated_argument())
                .resolve_sync(|params| {
                    let Some(fields) = marked_type(&params).and_then(GraphQLType::fields) else {
                        return Ok(Value::Null);
                    };
                    let include_deprecated = include_deprecated(&params);
                    Ok(Value::Array(
                        fields
                            .values()
                            .filter(|field| include_deprecated || !field.is_deprecated())
                            .map(|field| field_marker(params.info.schema, field))
                            .collect(),
                    ))
                }),
        )
        .field(
            Field::new("interfaces", TypeAnnotation::list(TypeAnnotation::non_null_named(TYPE)))
                .resolve_sync(|params| {
                    let Some(object) = marked_type(&params).and_then(GraphQLType::as_object)
                    else {
                        return Ok(Value::Null);
                    };
                    Ok(Value::Array(
                        object
                            .interface_names()
                            .iter()
                            .filter_map(|name| params.info.schema.type_named(name))
                            .map(named_type_marker)
                            .collect(),
                    ))
                }),
        )
        .field(
            Field::new(
                "possibleTypes",
                TypeAnnotation::list(TypeAnnotation::non_null_named(TYPE)),
            )
            .resolve_sync(|params| {
                let Some(abstract_type) = marked_type(&params).filter(|t| t.is_abstract_type())
                else {
                    return Ok(Value::Null);
                };
                Ok(Value::Array(
                    params
                        .info
                        .schema
                        .possible_types(abstract_type)
                        .iter()
                        .map(|object| named_type_marker(&GraphQLType::Object(object.clone())))
                        .collect(),
                ))
            }),
        )
        .field(
            Field::new(
                "enumValues",
                TypeAnnotation::list(TypeAnnotation::non_null_named(ENUM_VALUE)),
            )
            .argument(include_deprecated_argument())
            .resolve_sync(|params| {
                let Some(enum_type) = marked_type(&params).and_then(GraphQLType::as_enum) else {
                    return Ok(Value::Null);
                };
                let include_deprecated = include_deprecated(&params);
                Ok(Value::Array(
                    enum_type
                        .values()
                        .values()
                        .filter(|value| include_deprecated || value.deprecation_reason.is_none())
                        .map(enum_value_marker)
                        .collect(),
                ))
            }),
        )
        .field(
            Field::new(
                "inputFields",
                TypeAnnotation::list(TypeAnnotation::non_null_named(INPUT_VALUE)),
            )
            .resolve_sync(|params| {
                let Some(input_object) =
                    marked_type(&params).and_then(GraphQLType::as_input_object)
                else {
                    return Ok(Value::Null);
                };
                Ok(Value::Array(
                    input_object
                        .fields()
                        .values()
                        .map(|field| input_value_marker(params.info.schema, field))
                        .collect(),
                ))
            }),
        )
        .field(Field::new("ofType", TypeAnnotation::named(TYPE)))
        .build()
}

fn field_type() -> GraphQLType {
    ObjectType::builder(FIELD)
        .description(
            "Object and Interface types are described by a list of Fields, each of which has a \
             name, potentially a list of arguments, and a return type.",
        )
        .field(Field::new("name", TypeAnnotation::non_null_named(scalars::STRING)))
        .field(Field::new("description", TypeAnnotation::named(scalars::STRING)))
        .field(Field::new("args", non_null_list_of(INPUT_VALUE)))
        .field(Field::new("type", TypeAnnotation::non_null_named(TYPE)))
        .field(Field::new("isDeprecated", TypeAnnotation::non_null_named(scalars::BOOLEAN)))
        .field(Field::new("deprecationReason", TypeAnnotation::named(scalars::STRING)))
        .build()
}

fn input_value_type() -> GraphQLType {
    ObjectType::builder(INPUT_VALUE)
        .description(
            "Arguments provided to Fields or Directives and the input fields of an \
             InputObject are represented as Input Values which describe their type and \
             optionally a default value.",
        )
        .field(Field::new("name", TypeAnnotation::non_null_named(scalars::STRING)))
        .field(Field::new("description", TypeAnnotation::named(scalars::STRING)))
        .field(Field::new("type", TypeAnnotation::non_null_named(TYPE)))
        .field(
            Field::new("defaultValue", TypeAnnotation::named(scalars::STRING)).description(
                "A GraphQL-formatted string representing the default value for this input \
                 value.",
            ),
        )
        .build()
}

fn enum_value_type() -> GraphQLType {
    ObjectType::builder(ENUM_VALUE)
        .description(
            "One possible value for a given Enum. Enum values are unique values, not a \
             placeholder for a string or numeric value. However an Enum value is returned in \
             a JSON response as a string.",
        )
        .field(Field::new("name", TypeAnnotation::non_null_named(scalars::STRING)))
        .field(Field::new("description", TypeAnnotation::named(scalars::STRING)))
        .field(Field::new("isDeprecated", TypeAnnotation::non_null_named(scalars::BOOLEAN)))
        .field(Field::new("deprecationReason", TypeAnnotation::named(scalars::STRING)))
        .build()
}

fn directive_type() -> GraphQLType {
    ObjectType::builder(DIRECTIVE)
        .description(
            "A Directive provides a way to describe alternate runtime execution and type \
             validation behavior in a GraphQL document.",
        )
        .field(Field::new("name", TypeAnnotation::non_null_named(scalars::STRING)))
        .field(Field::new("description", TypeAnnotation::named(scalars::STRING)))
        .field(Field::new("locations", non_null_list_of(DIRECTIVE_LOCATION)))
        .field(Field::new("args", non_null_list_of(INPUT_VALUE)))
        .build()
}

fn type_kind_type() -> GraphQLType {
    EnumTypeBuilder::new(TYPE_KIND)
        .description("An enum describing what kind of type a given `__Type` is.")
        .value(EnumValue::new("SCALAR").description("Indicates this type is a scalar."))
        .value(EnumValue::new("OBJECT").description(
            "Indicates this type is an object. `fields` and `interfaces` are valid fields.",
        ))
        .value(EnumValue::new("INTERFACE").description(
            "Indicates this type is an interface. `fields` and `possibleTypes` are valid fields.",
        ))
        .value(EnumValue::new("UNION").description(
            "Indicates this type is a union. `possibleTypes` is a valid field.",
        ))
        .value(EnumValue::new("ENUM").description(
            "Indicates this type is an enum. `enumValues` is a valid field.",
        ))
        .value(EnumValue::new("INPUT_OBJECT").description(
            "Indicates this type is an input object. `inputFields` is a valid field.",
        ))
        .value(EnumValue::new("LIST").description(
            "Indicates this type is a list. `ofType` is a valid field.",
        ))
        .value(EnumValue::new("NON_NULL").description(
            "Indicates this type is a non-null. `ofType` is a valid field.",
        ))
        .build()
}

fn directive_location_type() -> GraphQLType {
    EnumTypeBuilder::new(DIRECTIVE_LOCATION)
        .description(
            "A Directive can be adjacent to many parts of the GraphQL language, a \
             __DirectiveLocation describes one such possible adjacencies.",
        )
        .values(DirectiveLocation::ALL.iter().map(DirectiveLocation::as_str))
        .build()
}

