use crate::types::TypeAnnotation;
use crate::types::TypeAnnotationError;

fn parsed(text: &str) -> TypeAnnotation {
    match TypeAnnotation::parse(text) {
        Ok(annotation) => annotation,
        Err(err) => panic!("failed to parse `{text}`: {err}"),
    }
}

/// Verifies that parsing and printing agree for every wrapper combination.
#[test]
fn parses_and_prints_wrapped_types() {
    for text in ["Int", "Int!", "[Int]", "[Int!]", "[Int]!", "[[String!]!]"] {
        assert_eq!(parsed(text).to_string(), text);
    }
}

/// Verifies the constructors build the same annotations the parser does.
#[test]
fn constructors_match_parsed_annotations() {
    assert_eq!(TypeAnnotation::named("Int"), parsed("Int"));
    assert_eq!(TypeAnnotation::non_null_named("Int"), parsed("Int!"));
    assert_eq!(
        TypeAnnotation::non_null_list(TypeAnnotation::non_null_named("String")),
        parsed("[String!]!"),
    );
    assert_eq!(
        TypeAnnotation::list(TypeAnnotation::named("Dog")).non_null(),
        Ok(parsed("[Dog]!")),
    );
}

/// Verifies that a non-null layer cannot wrap another non-null layer.
#[test]
fn rejects_double_non_null() {
    assert_eq!(
        TypeAnnotation::non_null_named("Int").non_null(),
        Err(TypeAnnotationError::DoubleNonNull),
    );
    assert!(matches!(
        TypeAnnotation::parse("[Int"),
        Err(TypeAnnotationError::Syntax(_)),
    ));
}

/// Verifies the wrapper-inspection helpers.
#[test]
fn inspects_wrapper_layers() {
    let annotation = parsed("[Int!]!");
    assert!(annotation.is_non_null());
    assert!(annotation.is_list());
    assert_eq!(annotation.nullable_type(), parsed("[Int!]"));
    assert_eq!(annotation.list_item_type(), Some(&parsed("Int!")));
    assert_eq!(annotation.innermost_name(), "Int");
    assert_eq!(parsed("Int").list_item_type(), None);
}

/// Verifies conversion to and from the document representation.
#[test]
fn round_trips_through_ast() {
    let annotation = parsed("[[Boolean]!]");
    assert_eq!(TypeAnnotation::from_ast(&annotation.to_ast()), Ok(annotation));
}
