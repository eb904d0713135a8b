//! Tests for parsing type system definitions.

use crate::ast;
use crate::tests::utils::parse_ok;

fn single_definition(text: &str) -> ast::Definition {
    let mut document = parse_ok(text);
    assert_eq!(document.definitions.len(), 1, "expected one definition in {text:?}");
    document.definitions.remove(0)
}

/// Verifies a schema definition with all three root operation types.
#[test]
fn schema_definition() {
    let ast::Definition::Schema(schema) =
        single_definition("schema @a { query: Q mutation: M subscription: S }")
    else {
        panic!("expected schema definition");
    };
    assert_eq!(schema.directives.len(), 1);
    let roots: Vec<_> = schema
        .operation_types
        .iter()
        .map(|t| (t.operation, t.named_type.name.as_str()))
        .collect();
    assert_eq!(
        roots,
        vec![
            (ast::OperationKind::Query, "Q"),
            (ast::OperationKind::Mutation, "M"),
            (ast::OperationKind::Subscription, "S"),
        ],
    );
}

/// Verifies object types with descriptions, interfaces, arguments, default
/// values and field directives.
#[test]
fn object_type_definition() {
    let ast::Definition::ObjectType(object) = single_definition(
        r#"
        """
        A person.
        """
        type Person implements & Node & Named @key(fields: "id") {
          "The id."
          id: ID!
          friends(first: Int = 10, "cursor" after: String): [Person!]! @deprecated(reason: "no")
        }
        "#,
    ) else {
        panic!("expected object type definition");
    };
    assert_eq!(object.description.as_deref(), Some("A person."));
    assert_eq!(object.name.value, "Person");
    let interfaces: Vec<_> = object.interfaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(interfaces, vec!["Node", "Named"]);
    assert_eq!(object.directives[0].name.value, "key");

    assert_eq!(object.fields.len(), 2);
    assert_eq!(object.fields[0].description.as_deref(), Some("The id."));
    let friends = &object.fields[1];
    assert_eq!(friends.arguments.len(), 2);
    assert!(friends.arguments[0].default_value.is_some());
    assert_eq!(friends.arguments[1].description.as_deref(), Some("cursor"));
    assert_eq!(friends.field_type.innermost_name(), "Person");
    assert_eq!(friends.directives[0].name.value, "deprecated");
}

/// Verifies scalar, interface, union, enum and input definitions.
#[test]
fn other_type_definitions() {
    let document = parse_ok(
        "scalar Date @specifiedBy(url: \"x\") \
         interface Node { id: ID! } \
         union SearchResult = | Human | Droid \
         enum Episode { NEWHOPE EMPIRE @deprecated JEDI } \
         input ReviewInput { stars: Int! = 5 commentary: String }",
    );
    let defs = &document.definitions;
    assert!(matches!(&defs[0], ast::Definition::ScalarType(s) if s.name.value == "Date"));
    assert!(matches!(&defs[1], ast::Definition::InterfaceType(i) if i.fields.len() == 1));
    match &defs[2] {
        ast::Definition::UnionType(union) => {
            let members: Vec<_> = union.types.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(members, vec!["Human", "Droid"]);
        },
        other => panic!("expected union, got {other:?}"),
    }
    match &defs[3] {
        ast::Definition::EnumType(e) => {
            assert_eq!(e.values.len(), 3);
            assert_eq!(e.values[1].directives.len(), 1);
        },
        other => panic!("expected enum, got {other:?}"),
    }
    match &defs[4] {
        ast::Definition::InputObjectType(input) => {
            assert_eq!(input.fields.len(), 2);
            assert!(input.fields[0].default_value.is_some());
        },
        other => panic!("expected input object, got {other:?}"),
    }
    assert!(!defs[0].is_executable());
}

/// Verifies that type bodies may be omitted.
#[test]
fn bodiless_type_definitions() {
    let document = parse_ok("type Empty interface Marker union Nothing enum Unset input Blank");
    assert_eq!(document.definitions.len(), 5);
}

/// Verifies `extend type`.
#[test]
fn object_type_extension() {
    let ast::Definition::TypeExtension(extension) =
        single_definition("extend type Query { extra: Int }")
    else {
        panic!("expected type extension");
    };
    assert_eq!(extension.definition.name.value, "Query");
    assert_eq!(extension.definition.fields[0].name.value, "extra");
}

/// Verifies directive definitions and their locations.
#[test]
fn directive_definition() {
    let ast::Definition::Directive(directive) = single_definition(
        "\"Marks things.\" directive @mark(level: Int = 1) on | FIELD | FRAGMENT_SPREAD | OBJECT",
    ) else {
        panic!("expected directive definition");
    };
    assert_eq!(directive.description.as_deref(), Some("Marks things."));
    assert_eq!(directive.name.value, "mark");
    assert_eq!(directive.arguments.len(), 1);
    let locations: Vec<_> = directive
        .locations
        .iter()
        .map(|l| ast::DirectiveLocation::from_name(l.as_str()))
        .collect();
    assert_eq!(
        locations,
        vec![
            Some(ast::DirectiveLocation::Field),
            Some(ast::DirectiveLocation::FragmentSpread),
            Some(ast::DirectiveLocation::Object),
        ],
    );
}

/// Verifies that executable and type system definitions can be mixed.
#[test]
fn mixed_document() {
    let document = parse_ok("type Query { a: Int } { a }");
    assert!(!document.definitions[0].is_executable());
    assert!(document.definitions[1].is_executable());
}
