use crate::tests::fixtures::validation_schema;
use crate::types::TypeAnnotation;
use crate::types::do_types_overlap;
use crate::types::is_equal_type;
use crate::types::is_type_sub_type_of;

fn parsed(text: &str) -> TypeAnnotation {
    match TypeAnnotation::parse(text) {
        Ok(annotation) => annotation,
        Err(err) => panic!("failed to parse `{text}`: {err}"),
    }
}

fn is_subtype(sub: &str, sup: &str) -> bool {
    is_type_sub_type_of(validation_schema(), &parsed(sub), &parsed(sup))
}

/// Verifies structural equality of annotations.
#[test]
fn equal_types() {
    assert!(is_equal_type(&parsed("[Int!]"), &parsed("[Int!]")));
    assert!(!is_equal_type(&parsed("[Int!]"), &parsed("[Int]")));
}

/// Verifies that non-null narrows and nullable does not widen.
#[test]
fn non_null_is_a_subtype_of_nullable() {
    assert!(is_subtype("Int!", "Int"));
    assert!(!is_subtype("Int", "Int!"));
    assert!(is_subtype("[Int!]!", "[Int]"));
    assert!(!is_subtype("[Int]", "Int"));
}

/// Verifies that object types are subtypes of the abstract types that
/// contain them.
#[test]
fn objects_are_subtypes_of_their_abstract_types() {
    assert!(is_subtype("Dog", "Pet"));
    assert!(is_subtype("Dog!", "CatOrDog"));
    assert!(is_subtype("[Human]", "[Being]"));
    assert!(!is_subtype("Human", "Pet"));
    assert!(!is_subtype("Pet", "Dog"));
}

/// Verifies when two composite types can share a runtime object.
#[test]
fn overlapping_types() {
    let schema = validation_schema();
    let named = |name: &str| match schema.type_named(name) {
        Some(graphql_type) => graphql_type,
        None => panic!("unknown type {name}"),
    };
    assert!(do_types_overlap(schema, named("Dog"), named("Dog")));
    assert!(do_types_overlap(schema, named("Pet"), named("Dog")));
    assert!(do_types_overlap(schema, named("CatOrDog"), named("Pet")));
    assert!(do_types_overlap(schema, named("DogOrHuman"), named("Intelligent")));
    assert!(!do_types_overlap(schema, named("Cat"), named("Dog")));
    assert!(!do_types_overlap(schema, named("CatOrDog"), named("HumanOrAlien")));
}
