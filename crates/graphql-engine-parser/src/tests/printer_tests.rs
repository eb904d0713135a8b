//! Tests for [`crate::printer`].

use crate::ast::AstNodeRef;
use crate::parse_str;
use crate::parse_type;
use crate::parse_value;
use crate::printer::print;
use crate::printer::print_string;
use crate::tests::utils::parse_ok;
use proptest::prelude::*;

fn reprint(text: &str) -> String {
    parse_ok(text).to_string()
}

/// Verifies that an anonymous query with no variables prints in shorthand
/// form, while anything else keeps its keyword.
#[test]
fn prints_shorthand_only_when_allowed() {
    assert_eq!(reprint("query { a }"), "{\n  a\n}\n");
    assert_eq!(reprint("query Q { a }"), "query Q {\n  a\n}\n");
    assert_eq!(reprint("mutation { a }"), "mutation {\n  a\n}\n");
    assert_eq!(reprint("query @live { a }"), "query @live {\n  a\n}\n");
}

/// Verifies operations with variables, nested selections and fragments.
#[test]
fn prints_executable_definitions() {
    let text = r#"
        query Q($a: Int = 1, $b: [String!]!) @dir {
          f(x: $a, y: {k: [1, 2.5, "s", ENUM, null, false]}) {
            ...Frag
            ... on T { g }
            ... @skip(if: true) { h }
          }
        }
        fragment Frag on T @keep { alias: g }
    "#;
    let expected = "\
query Q($a: Int = 1, $b: [String!]!) @dir {
  f(x: $a, y: {k: [1, 2.5, \"s\", ENUM, null, false]}) {
    ...Frag
    ... on T {
      g
    }
    ... @skip(if: true) {
      h
    }
  }
}

fragment Frag on T @keep {
  alias: g
}
";
    assert_eq!(reprint(text), expected);
}

/// Verifies type system definitions, including descriptions.
#[test]
fn prints_type_system_definitions() {
    let text = r#"
        schema { query: Query mutation: Mutation }
        """
        The root.
        """
        type Query implements Node & Named @key {
          "Lookup."
          node("The id." id: ID!, first: Int = 10): Node @deprecated(reason: "old")
        }
        interface Node { id: ID! }
        union Result = A | B
        enum Color { RED "Greenish." GREEN }
        input Filter { term: String = "x" }
        scalar Date
        extend type Query { extra: Int }
        directive @tag(name: String!) on FIELD_DEFINITION | OBJECT
    "#;
    let expected = "\
schema {
  query: Query
  mutation: Mutation
}

\"The root.\"
type Query implements Node & Named @key {
  \"Lookup.\"
  node(\"The id.\" id: ID!, first: Int = 10): Node @deprecated(reason: \"old\")
}

interface Node {
  id: ID!
}

union Result = A | B

enum Color {
  RED
  \"Greenish.\"
  GREEN
}

input Filter {
  term: String = \"x\"
}

scalar Date

extend type Query {
  extra: Int
}

directive @tag(name: String!) on FIELD_DEFINITION | OBJECT
";
    assert_eq!(reprint(text), expected);
}

/// Verifies that bodiless type definitions print without braces.
#[test]
fn prints_bodiless_types() {
    assert_eq!(reprint("type Empty"), "type Empty\n");
    assert_eq!(reprint("enum Unset @flag"), "enum Unset @flag\n");
}

/// Verifies escaping of string contents, including block strings, which are
/// printed as ordinary quoted literals.
#[test]
fn escapes_strings() {
    assert_eq!(print_string("plain"), "\"plain\"");
    assert_eq!(print_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
    assert_eq!(print_string("line\nbreak\ttab"), "\"line\\nbreak\\ttab\"");
    assert_eq!(print_string("\u{0001}"), "\"\\u0001\"");
    assert_eq!(print_string("caf\u{e9}"), "\"caf\u{e9}\"");

    let value = parse_value("\"\"\"\n  two\n  lines\n\"\"\"").expect("block string");
    assert_eq!(value.to_string(), "\"two\\nlines\"");
}

/// Verifies printing standalone values and types.
#[test]
fn prints_values_and_types() {
    let value = parse_value("{a: [1, $v], b: {c: null}}").expect("value");
    assert_eq!(value.to_string(), "{a: [1, $v], b: {c: null}}");
    let annotation = parse_type("[[Int!]]!").expect("type");
    assert_eq!(annotation.to_string(), "[[Int!]]!");
}

/// Verifies printing a node that is not a document.
#[test]
fn prints_individual_nodes() {
    let document = parse_ok("{ a(x: 1) @d { b } }");
    let operation = &document.definitions[0];
    let AstNodeRef::OperationDefinition(operation) = AstNodeRef::from(operation) else {
        panic!("expected an operation");
    };
    let field = &operation.selection_set.selections[0];
    assert_eq!(print(field.into()), "a(x: 1) @d {\n  b\n}");
}

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,6}"
}

fn value() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        (any::<i16>(), 0u8..100).prop_map(|(whole, frac)| format!("{whole}.{frac}e3")),
        any::<String>().prop_map(|s| print_string(&s)),
        any::<bool>().prop_map(|b| b.to_string()),
        "E_[A-Z]{1,4}",
        Just("null".to_string()),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|values| format!("[{}]", values.join(", "))),
            prop::collection::vec((name(), inner), 0..3).prop_map(|fields| {
                let fields: Vec<String> =
                    fields.into_iter().map(|(k, v)| format!("{k}: {v}")).collect();
                format!("{{{}}}", fields.join(", "))
            }),
        ]
    })
}

fn arguments() -> impl Strategy<Value = String> {
    prop::collection::vec((name(), value()), 0..3).prop_map(|args| {
        if args.is_empty() {
            return String::new();
        }
        let args: Vec<String> = args.into_iter().map(|(k, v)| format!("{k}: {v}")).collect();
        format!("({})", args.join(", "))
    })
}

fn selection() -> impl Strategy<Value = String> {
    let leaf = (name(), arguments()).prop_map(|(name, args)| format!("{name}{args}"));
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (name(), arguments(), prop::collection::vec(inner.clone(), 1..4)).prop_map(
                |(name, args, children)| format!("{name}{args} {{ {} }}", children.join(" ")),
            ),
            ("[A-Z][a-z]{0,4}", prop::collection::vec(inner, 1..3)).prop_map(
                |(on, children)| format!("... on {on} {{ {} }}", children.join(" ")),
            ),
        ]
    })
}

proptest! {
    /// Printing then reparsing yields a tree that prints identically.
    #[test]
    fn print_parse_round_trip(selections in prop::collection::vec(selection(), 1..4)) {
        let text = format!("query Q($v: Int) {{ {} }}", selections.join(" "));
        let first = parse_str(&text).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let printed = first.to_string();
        let second = parse_str(&printed).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(second.to_string(), printed);
    }
}
