use crate::Schema;
use crate::Value;
use crate::Variables;
use crate::tests::fixtures::validation_schema;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::values::ast_from_value;
use crate::values::coerce_input_value;
use crate::values::is_valid_literal_value;
use crate::values::value_from_ast;
use crate::values::value_from_ast_untyped;
use graphql_engine_parser::ast;
use graphql_engine_parser::parse_value;
use graphql_engine_parser::printer::print_value;
use serde_json::json;

fn literal(text: &str) -> ast::Value {
    match parse_value(text) {
        Ok(value) => value,
        Err(err) => panic!("failed to parse `{text}`: {err}"),
    }
}

fn annotation(text: &str) -> TypeAnnotation {
    match TypeAnnotation::parse(text) {
        Ok(annotation) => annotation,
        Err(err) => panic!("failed to parse type `{text}`: {err}"),
    }
}

fn from_ast(text: &str, type_text: &str) -> Option<Value> {
    value_from_ast(&literal(text), &annotation(type_text), validation_schema(), None)
}

fn literal_errors(text: &str, type_text: &str) -> Vec<String> {
    is_valid_literal_value(&annotation(type_text), Some(&literal(text)), validation_schema())
}

fn coerce(value: Value, type_text: &str) -> Result<Value, Vec<String>> {
    coerce_input_value(&value, &annotation(type_text), validation_schema())
}

fn printed(value: Value, type_text: &str) -> Option<String> {
    ast_from_value(&value, &annotation(type_text), validation_schema())
        .map(|node| print_value(&node))
}

// =============================================================================
// value_from_ast
// =============================================================================

/// Verifies scalar literal coercion, including rejected literals.
#[test]
fn coerces_scalar_literals() {
    assert_eq!(from_ast("123", "Int"), Some(json!(123)));
    assert_eq!(from_ast("123.5", "Int"), None);
    assert_eq!(from_ast("1", "Float"), Some(json!(1.0)));
    assert_eq!(from_ast("\"abc\"", "String"), Some(json!("abc")));
    assert_eq!(from_ast("123", "ID"), Some(json!("123")));
    assert_eq!(from_ast("true", "Int"), None);
}

/// Verifies `null` literals against nullable and non-null types.
#[test]
fn coerces_null_literals() {
    assert_eq!(from_ast("null", "Int"), Some(Value::Null));
    assert_eq!(from_ast("null", "Int!"), None);
}

/// Verifies enum literals map to their internal values and strings are
/// not accepted in their place.
#[test]
fn coerces_enum_literals() {
    assert_eq!(from_ast("BROWN", "FurColor"), Some(json!("BROWN")));
    assert_eq!(from_ast("\"BROWN\"", "FurColor"), None);
    assert_eq!(from_ast("PURPLE", "FurColor"), None);
}

/// Verifies list literals, including a single item standing in for a
/// one-item list.
#[test]
fn coerces_list_literals() {
    assert_eq!(from_ast("[1, 2]", "[Int]"), Some(json!([1, 2])));
    assert_eq!(from_ast("7", "[Int]"), Some(json!([7])));
    assert_eq!(from_ast("[1, null]", "[Int!]"), None);
    assert_eq!(from_ast("[1, \"two\"]", "[Int]"), None);
}

/// Verifies input object literals: defaults are not invented, required
/// fields must be present and unknown fields are dropped.
#[test]
fn coerces_input_object_literals() {
    assert_eq!(
        from_ast("{ requiredField: true, intField: 4 }", "ComplexInput"),
        Some(json!({"requiredField": true, "intField": 4})),
    );
    assert_eq!(from_ast("{ intField: 4 }", "ComplexInput"), None);
    assert_eq!(from_ast("[]", "ComplexInput"), None);
}

/// Verifies variable references inside literals.
#[test]
fn substitutes_variables() {
    let mut variables = Variables::new();
    variables.insert("n".to_string(), json!(5));
    variables.insert("nothing".to_string(), Value::Null);
    let schema = validation_schema();

    let coerce_with = |text: &str, type_text: &str| {
        value_from_ast(&literal(text), &annotation(type_text), schema, Some(&variables))
    };
    assert_eq!(coerce_with("$n", "Int"), Some(json!(5)));
    assert_eq!(coerce_with("$nothing", "Int!"), None);
    assert_eq!(coerce_with("$missing", "Int"), None);
    assert_eq!(coerce_with("[1, $missing]", "[Int]"), Some(json!([1, null])));
    assert_eq!(coerce_with("[1, $missing]", "[Int!]"), None);
    assert_eq!(
        coerce_with("{ requiredField: true, intField: $missing }", "ComplexInput"),
        Some(json!({"requiredField": true})),
    );
}

/// Verifies untyped conversion of literals.
#[test]
fn converts_literals_without_types() {
    let mut variables = Variables::new();
    variables.insert("v".to_string(), json!("var"));
    assert_eq!(
        value_from_ast_untyped(
            &literal("{ a: [1, 2.5, \"s\", true, null, ENUM], b: $v, c: $missing }"),
            Some(&variables),
        ),
        Some(json!({"a": [1, 2.5, "s", true, null, "ENUM"], "b": "var"})),
    );
}

// =============================================================================
// coerce_input_value
// =============================================================================

/// Verifies that valid request values coerce, wrapping single items into
/// lists.
#[test]
fn coerces_request_values() {
    assert_eq!(
        coerce(json!({"requiredField": true, "stringListField": "a"}), "ComplexInput"),
        Ok(json!({"requiredField": true, "stringListField": ["a"]})),
    );
    assert_eq!(coerce(json!("BROWN"), "FurColor"), Ok(json!("BROWN")));
    assert_eq!(coerce(Value::Null, "Int"), Ok(Value::Null));
}

/// Verifies that every problem is reported with the path to the offending
/// position.
#[test]
fn reports_each_invalid_position() {
    assert_eq!(
        coerce(json!([1, "x", 3.5]), "[Int]"),
        Err(vec![
            "Expected type Int at value[1]; Int cannot represent non-integer value: \"x\""
                .to_string(),
            "Expected type Int at value[2]; Int cannot represent non-integer value: 3.5"
                .to_string(),
        ]),
    );
    assert_eq!(
        coerce(Value::Null, "Int!"),
        Err(vec!["Expected non-nullable type Int! not to be null.".to_string()]),
    );
}

/// Verifies input object problems: missing required fields, unknown
/// fields and non-object values.
#[test]
fn reports_input_object_problems() {
    assert_eq!(
        coerce(json!({"intField": 1}), "ComplexInput"),
        Err(vec!["Field value.requiredField of required type Boolean! was not provided.".to_string()]),
    );
    assert_eq!(
        coerce(json!({"requiredField": true, "zzz": 1}), "ComplexInput"),
        Err(vec!["Field \"zzz\" is not defined by type ComplexInput.".to_string()]),
    );
    assert_eq!(
        coerce(json!(5), "ComplexInput"),
        Err(vec!["Expected type ComplexInput to be an object.".to_string()]),
    );
}

/// Verifies that unknown enum names suggest close matches.
#[test]
fn suggests_enum_values() {
    assert_eq!(
        coerce(json!("BROWNN"), "FurColor"),
        Err(vec!["Expected type FurColor; did you mean \"BROWN\"?".to_string()]),
    );
}

// =============================================================================
// is_valid_literal_value
// =============================================================================

/// Verifies that valid literals, variables and omitted nullable values
/// produce no errors.
#[test]
fn accepts_valid_literals() {
    assert!(literal_errors("{ requiredField: false }", "ComplexInput").is_empty());
    assert!(literal_errors("$anything", "Int!").is_empty());
    assert!(literal_errors("\"one\"", "[String]").is_empty());
    assert!(is_valid_literal_value(&annotation("Int"), None, validation_schema()).is_empty());
}

/// Verifies the explanations given for invalid literals.
#[test]
fn explains_invalid_literals() {
    assert_eq!(
        is_valid_literal_value(&annotation("Int!"), None, validation_schema()),
        vec!["Expected \"Int!\", found null."],
    );
    assert_eq!(
        literal_errors("[1, \"two\"]", "[Int]"),
        vec!["In element #1: Expected type \"Int\", found \"two\"."],
    );
    assert_eq!(
        literal_errors("{ intField: \"x\", extra: 1 }", "ComplexInput"),
        vec![
            "In field \"extra\": Unknown field.",
            "In field \"requiredField\": Expected \"Boolean!\", found null.",
            "In field \"intField\": Expected type \"Int\", found \"x\".",
        ],
    );
    assert_eq!(
        literal_errors("SITT", "FurColor"),
        vec!["Expected type \"FurColor\", found SITT."],
    );
}

/// Verifies that custom scalars contribute their own rejection reason.
#[test]
fn custom_scalar_reasons_are_appended() {
    let odd = ScalarType::builder("Odd")
        .serialize(|value| Ok(value.clone()))
        .parse_literal(|node| {
            let num = match node {
                ast::Value::Int(int) => int.as_i64(),
                _ => None,
            };
            match num {
                Some(num) if num % 2 != 0 => Ok(json!(num)),
                Some(num) => Err(format!("{num} is even")),
                None => Err("not a number".to_string()),
            }
        })
        .build();
    let schema = match Schema::builder(
        ObjectType::builder("Query")
            .field(Field::new("odd", TypeAnnotation::named("Odd")))
            .build(),
    )
    .add_type(odd)
    .build()
    {
        Ok(schema) => schema,
        Err(err) => panic!("schema is invalid: {err}"),
    };
    assert_eq!(
        is_valid_literal_value(&annotation("Odd"), Some(&literal("2")), &schema),
        vec!["Expected type \"Odd\", found 2; 2 is even"],
    );
    assert!(is_valid_literal_value(&annotation("Odd"), Some(&literal("3")), &schema).is_empty());
}

// =============================================================================
// ast_from_value
// =============================================================================

/// Verifies conversion of runtime values back to literals.
#[test]
fn converts_values_to_literals() {
    assert_eq!(printed(json!(true), "Boolean"), Some("true".to_string()));
    assert_eq!(printed(json!(5), "[Int]"), Some("5".to_string()));
    assert_eq!(printed(json!([1, 2]), "[Int]"), Some("[1, 2]".to_string()));
    assert_eq!(printed(json!("BROWN"), "FurColor"), Some("BROWN".to_string()));
    assert_eq!(printed(json!("123"), "ID"), Some("123".to_string()));
    assert_eq!(printed(json!("abc"), "ID"), Some("\"abc\"".to_string()));
    assert_eq!(printed(Value::Null, "Int"), Some("null".to_string()));
    assert_eq!(printed(Value::Null, "Int!"), None);
    assert_eq!(
        printed(
            json!({"requiredField": true, "stringListField": ["a", "b"], "ignored": 1}),
            "ComplexInput",
        ),
        Some("{requiredField: true, stringListField: [\"a\", \"b\"]}".to_string()),
    );
}

/// Verifies that values a type cannot represent produce no literal.
#[test]
fn rejects_unrepresentable_values() {
    assert_eq!(printed(json!("PURPLE"), "FurColor"), None);
    assert_eq!(printed(json!([1]), "ComplexInput"), None);
}
