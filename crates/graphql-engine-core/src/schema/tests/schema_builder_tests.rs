use crate::Schema;
use crate::SchemaBuildError;
use crate::tests::fixtures::validation_schema;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use graphql_engine_parser::ast::DirectiveLocation;

fn string_field(name: &str) -> Field {
    Field::new(name, TypeAnnotation::named("String"))
}

fn query_with(field: Field) -> GraphQLType {
    ObjectType::builder("Query").field(field).build()
}

fn build_err(result: Result<Schema, SchemaBuildError>) -> SchemaBuildError {
    match result {
        Ok(_) => panic!("expected the schema to be rejected"),
        Err(err) => err,
    }
}

// =============================================================================
// Successful builds
// =============================================================================

/// Verifies that built-in scalars, introspection types and directives are
/// always present, and that the query root comes first.
#[test]
fn includes_builtins() {
    let schema = validation_schema();
    assert_eq!(schema.types().keys().next().map(String::as_str), Some("QueryRoot"));
    for name in ["String", "Int", "Float", "Boolean", "ID", "__Schema", "__Type"] {
        assert!(schema.type_named(name).is_some(), "missing built-in {name}");
    }
    for name in ["skip", "include", "deprecated"] {
        assert!(schema.directive(name).is_some(), "missing directive @{name}");
    }
    assert_eq!(schema.query_type().name(), "QueryRoot");
    assert!(schema.mutation_type().is_none());
}

/// Verifies that union members keep declaration order and interface
/// implementations follow schema order.
#[test]
fn computes_possible_types() {
    let schema = validation_schema();
    let names = |abstract_name: &str| -> Vec<String> {
        let Some(abstract_type) = schema.type_named(abstract_name) else {
            panic!("unknown type {abstract_name}");
        };
        schema
            .possible_types(abstract_type)
            .iter()
            .map(|object| object.name().to_string())
            .collect()
    };
    assert_eq!(names("CatOrDog"), vec!["Cat", "Dog"]);
    assert_eq!(names("Pet"), vec!["Dog", "Cat"]);
    assert_eq!(names("Intelligent"), vec!["Human", "Alien"]);
    assert!(names("Dog").is_empty());
}

/// Verifies that field lists may be supplied lazily, allowing a type to
/// refer to itself.
#[test]
fn resolves_lazy_fields() {
    let node = ObjectType::builder("Node")
        .fields_thunk(|| {
            vec![
                Field::new("id", TypeAnnotation::non_null_named("ID")),
                Field::new("next", TypeAnnotation::named("Node")),
            ]
        })
        .build();
    let schema = Schema::builder(query_with(Field::new("node", TypeAnnotation::named("Node"))))
        .add_type(node)
        .build();
    let Ok(schema) = schema else {
        panic!("lazy schema was rejected");
    };
    let next = schema.type_named("Node").and_then(|node| node.field("next"));
    assert_eq!(next.map(|field| field.field_type.to_string()), Some("Node".to_string()));
}

/// Verifies that adding the same definition twice is not a conflict.
#[test]
fn accepts_repeated_identical_definitions() {
    let dog = ObjectType::builder("Dog").field(string_field("name")).build();
    let result = Schema::builder(query_with(Field::new("dog", TypeAnnotation::named("Dog"))))
        .add_type(dog.clone())
        .add_type(dog)
        .build();
    assert!(result.is_ok());
}

// =============================================================================
// Rejected builds
// =============================================================================

/// Verifies that references to undefined types are reported with where
/// they occur.
#[test]
fn rejects_dangling_references() {
    let err = build_err(
        Schema::builder(query_with(Field::new("x", TypeAnnotation::named("Missing")))).build(),
    );
    assert_eq!(
        err,
        SchemaBuildError::DanglingTypeReference {
            type_name: "Missing".to_string(),
            referenced_by: "Query.x".to_string(),
        },
    );
    assert_eq!(
        err.to_string(),
        "The `Missing` type is referenced by `Query.x` but is not defined",
    );
}

/// Verifies that two different definitions may not share a name.
#[test]
fn rejects_duplicate_type_names() {
    let err = build_err(
        Schema::builder(query_with(Field::new("dog", TypeAnnotation::named("Dog"))))
            .add_type(ObjectType::builder("Dog").field(string_field("name")).build())
            .add_type(ObjectType::builder("Dog").field(string_field("nickname")).build())
            .build(),
    );
    assert_eq!(
        err,
        SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Dog".to_string(),
        },
    );
}

/// Verifies that `__`-prefixed names are reserved.
#[test]
fn rejects_reserved_names() {
    let err = build_err(
        Schema::builder(query_with(string_field("x")))
            .add_type(ObjectType::builder("__Secret").field(string_field("x")).build())
            .build(),
    );
    assert_eq!(
        err,
        SchemaBuildError::InvalidDunderName {
            name: "__Secret".to_string(),
        },
    );
}

/// Verifies that roots must be object types with at least one field.
#[test]
fn rejects_invalid_roots() {
    let err = build_err(Schema::builder(EnumType::builder("Query").values(["A"]).build()).build());
    assert_eq!(
        err,
        SchemaBuildError::InvalidRootOperationType {
            operation: "query",
            type_name: "Query".to_string(),
        },
    );

    let err = build_err(Schema::builder(ObjectType::builder("Query").build()).build());
    assert_eq!(
        err,
        SchemaBuildError::EmptyFieldSet {
            type_name: "Query".to_string(),
            members: "fields",
        },
    );
}

/// Verifies that unions only contain object types.
#[test]
fn rejects_non_object_union_members() {
    let named = InterfaceType::builder("Named").field(string_field("name")).build();
    let union = UnionType::builder("Anything").member("Named").build();
    let err = build_err(
        Schema::builder(query_with(Field::new("any", TypeAnnotation::named("Anything"))))
            .add_type(named)
            .add_type(union)
            .build(),
    );
    assert_eq!(
        err,
        SchemaBuildError::InvalidUnionMember {
            union_name: "Anything".to_string(),
            member_name: "Named".to_string(),
        },
    );
}

/// Verifies that arguments must have input types.
#[test]
fn rejects_output_types_in_input_positions() {
    let field = string_field("f").argument(InputValue::new("arg", TypeAnnotation::named("Query")));
    let err = build_err(Schema::builder(query_with(field)).build());
    assert_eq!(
        err,
        SchemaBuildError::NonInputTypeInInputPosition {
            location: "Query.f(arg:)".to_string(),
            type_name: "Query".to_string(),
        },
    );
}

/// Verifies that objects provide every interface field with a compatible
/// type.
#[test]
fn rejects_incorrect_interface_implementations() {
    let named = || InterfaceType::builder("Named").field(string_field("name")).build();
    let query = || query_with(Field::new("dog", TypeAnnotation::named("Dog")));

    let dog = ObjectType::builder("Dog")
        .interface("Named")
        .field(string_field("nickname"))
        .build();
    let err = build_err(Schema::builder(query()).add_type(named()).add_type(dog).build());
    assert_eq!(
        err,
        SchemaBuildError::InvalidInterfaceImplementation {
            type_name: "Dog".to_string(),
            interface_name: "Named".to_string(),
            reason: "Interface field Named.name expected but Dog does not provide it.".to_string(),
        },
    );

    let dog = ObjectType::builder("Dog")
        .interface("Named")
        .field(Field::new("name", TypeAnnotation::named("Int")))
        .build();
    let err = build_err(Schema::builder(query()).add_type(named()).add_type(dog).build());
    assert_eq!(
        err,
        SchemaBuildError::InvalidInterfaceImplementation {
            type_name: "Dog".to_string(),
            interface_name: "Named".to_string(),
            reason: "Interface field Named.name expects type String but Dog.name provides type \
                     Int."
                .to_string(),
        },
    );

    let dog = ObjectType::builder("Dog")
        .interface("Named")
        .field(Field::new("name", TypeAnnotation::non_null_named("String")))
        .build();
    assert!(Schema::builder(query()).add_type(named()).add_type(dog).build().is_ok());
}

/// Verifies that custom directives may not reuse a built-in name.
#[test]
fn rejects_duplicate_directives() {
    let err = build_err(
        Schema::builder(query_with(string_field("x")))
            .directive(Directive::new("skip", &[DirectiveLocation::Field]))
            .build(),
    );
    assert_eq!(
        err,
        SchemaBuildError::DuplicateDirectiveDefinition {
            directive_name: "skip".to_string(),
        },
    );
}
