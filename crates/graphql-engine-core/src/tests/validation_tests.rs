//! Tests for [`validate()`] and the individual rules of
//! [`specified_rules()`](crate::validation::specified_rules), run against
//! the pets-and-people schema.

use crate::GraphQLError;
use crate::tests::fixtures::parse_ok;
use crate::tests::fixtures::validation_schema;
use crate::validation::ValidationRule;
use crate::validation::rules;
use crate::validation::validate;
use crate::validation::validate_with_rules;
use graphql_engine_parser::ParseOptions;
use graphql_engine_parser::Source;
use graphql_engine_parser::SourceLocation;

fn check_rule(rule: impl ValidationRule + 'static, query: &str) -> Vec<GraphQLError> {
    let document = parse_ok(query);
    validate_with_rules(validation_schema(), &document, vec![Box::new(rule)])
}

fn rule_messages(rule: impl ValidationRule + 'static, query: &str) -> Vec<String> {
    check_rule(rule, query)
        .into_iter()
        .map(|error| error.message)
        .collect()
}

fn loc(line: usize, column: usize) -> SourceLocation {
    SourceLocation { line, column }
}

// =============================================================================
// validate()
// =============================================================================

/// A document exercising fragments, variables, directives and abstract
/// types passes every rule.
#[test]
fn valid_document_has_no_errors() {
    let document = parse_ok(
        r#"
        query DogAndFriends($command: DogCommand = SIT, $withName: Boolean!) {
          dog {
            ...DogFields
            doesKnowCommand(dogCommand: $command)
            name @include(if: $withName)
          }
          catOrDog {
            __typename
            ... on Cat { meows furColor }
          }
          human(id: "1") {
            pets { name }
            relatives { name }
          }
        }

        fragment DogFields on Dog {
          nickname
          isHousetrained(atOtherHomes: false)
          ... on Pet { name }
        }
        "#,
    );
    assert_eq!(validate(validation_schema(), &document), vec![]);
}

/// Errors from different rules are all reported, in traversal order.
#[test]
fn reports_errors_from_every_rule() {
    let document = parse_ok("{ unknownField dog }");
    let errors = validate(validation_schema(), &document);
    assert_eq!(errors.len(), 2);
    assert!(
        errors[0]
            .message
            .starts_with("Cannot query field \"unknownField\" on type \"QueryRoot\"."),
    );
    assert_eq!(
        errors[1].message,
        "Field \"dog\" of type \"Dog\" must have a selection of subfields. Did you mean \
         \"dog { ... }\"?",
    );
}

/// Errors are tagged with the name of the source the document came from.
#[test]
fn errors_carry_the_source_name() {
    let source = Source::with_name("{ dog { unknown } }", "Dogs.graphql");
    let document = match graphql_engine_parser::parse(&source, ParseOptions::default()) {
        Ok(document) => document,
        Err(err) => panic!("parse failed: {err}"),
    };
    let errors = validate(validation_schema(), &document);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_name.as_deref(), Some("Dogs.graphql"));
}

/// Documents parsed without locations still validate; their errors just
/// have no locations.
#[test]
fn validates_documents_without_locations() {
    let source = Source::new("{ dog { unknown } }");
    let options = ParseOptions::new().no_location(true);
    let document = match graphql_engine_parser::parse(&source, options) {
        Ok(document) => document,
        Err(err) => panic!("parse failed: {err}"),
    };
    let errors = validate(validation_schema(), &document);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].locations.is_empty());
}

// =============================================================================
// Document and operation rules
// =============================================================================

/// Type system definitions are rejected in an executable document.
#[test]
fn executable_definitions() {
    assert_eq!(
        rule_messages(
            rules::ExecutableDefinitions,
            "query Foo { dog { name } } type Cow { name: String } schema { query: QueryRoot }",
        ),
        vec![
            "The Cow definition is not executable.",
            "The schema definition is not executable.",
        ],
    );
    assert!(
        rule_messages(
            rules::ExecutableDefinitions,
            "query Foo { dog { ...F } } fragment F on Dog { name }",
        )
        .is_empty(),
    );
}

/// Operation names must be unique; both definitions are located.
#[test]
fn unique_operation_names() {
    let errors = check_rule(
        rules::UniqueOperationNames::default(),
        "query Foo { dog { name } } query Foo { cat { name } }",
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "There can be only one operation named \"Foo\".");
    assert_eq!(errors[0].locations, vec![loc(1, 7), loc(1, 34)]);

    assert!(
        rule_messages(
            rules::UniqueOperationNames::default(),
            "query Foo { dog { name } } query Bar { dog { name } } { cat { name } }",
        )
        .is_empty(),
    );
}

/// An anonymous operation must stand alone.
#[test]
fn lone_anonymous_operation() {
    let errors = check_rule(
        rules::LoneAnonymousOperation::default(),
        "{ dog { name } } query Foo { cat { name } }",
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "This anonymous operation must be the only defined operation.",
    );
    assert_eq!(errors[0].locations, vec![loc(1, 1)]);

    assert!(
        rule_messages(
            rules::LoneAnonymousOperation::default(),
            "{ dog { name } } fragment F on Dog { name }",
        )
        .is_empty(),
    );
}

// =============================================================================
// Type rules
// =============================================================================

/// Unknown type names are reported wherever they appear, with suggestions.
#[test]
fn known_type_names() {
    let messages = rule_messages(
        rules::KnownTypeNames,
        "query Foo($var: JumbledUpLetters) { dog { ... on Badger { name } } } \
         fragment PetFields on Peettt { name }",
    );
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0], "Unknown type \"JumbledUpLetters\".");
    assert_eq!(messages[1], "Unknown type \"Badger\".");
    assert!(messages[2].starts_with("Unknown type \"Peettt\". Did you mean"));
    assert!(messages[2].contains("\"Pet\""));

    assert!(
        rule_messages(
            rules::KnownTypeNames,
            "query Foo($var: String, $required: [String!]!) { dog { ... on Pet { name } } }",
        )
        .is_empty(),
    );
}

/// Fragments may only condition on objects, interfaces and unions.
#[test]
fn fragments_on_composite_types() {
    assert_eq!(
        rule_messages(
            rules::FragmentsOnCompositeTypes,
            "fragment scalarFragment on Boolean { bad } \
             { dog { ... on String { meowVolume } } }",
        ),
        vec![
            "Fragment \"scalarFragment\" cannot condition on non composite type \"Boolean\".",
            "Fragment cannot condition on non composite type \"String\".",
        ],
    );
    assert!(
        rule_messages(
            rules::FragmentsOnCompositeTypes,
            "fragment F on CatOrDog { ... on Dog { name } ... { __typename } }",
        )
        .is_empty(),
    );
}

/// Variables must be declared with input types.
#[test]
fn variables_are_input_types() {
    assert_eq!(
        rule_messages(
            rules::VariablesAreInputTypes,
            "query Foo($a: Dog, $b: [[CatOrDog!]]!, $c: Pet) { dog { name } }",
        ),
        vec![
            "Variable \"$a\" cannot be non-input type \"Dog\".",
            "Variable \"$b\" cannot be non-input type \"[[CatOrDog!]]!\".",
            "Variable \"$c\" cannot be non-input type \"Pet\".",
        ],
    );
    assert!(
        rule_messages(
            rules::VariablesAreInputTypes,
            "query Foo($a: String, $b: [Boolean!]!, $c: ComplexInput) { dog { name } }",
        )
        .is_empty(),
    );
}

/// Leaves may not have selections, and composites must have them.
#[test]
fn scalar_leafs() {
    let errors = check_rule(rules::ScalarLeafs, "{ dog { barks { sinceWhen } } }");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Field \"barks\" must not have a selection since type \"Boolean\" has no subfields.",
    );
    assert_eq!(errors[0].locations, vec![loc(1, 15)]);

    assert_eq!(
        rule_messages(rules::ScalarLeafs, "{ human }"),
        vec![
            "Field \"human\" of type \"Human\" must have a selection of subfields. Did you mean \
             \"human { ... }\"?",
        ],
    );
    assert!(rule_messages(rules::ScalarLeafs, "{ dog { barks name } }").is_empty());
}

/// Selected fields must exist on their parent type. Abstract parents
/// suggest the types that do define the field.
#[test]
fn fields_on_correct_type() {
    let errors = check_rule(rules::FieldsOnCorrectType, "fragment F on Dog { meowVolume }");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Cannot query field \"meowVolume\" on type \"Dog\". Did you mean \"barkVolume\"?",
    );
    assert_eq!(errors[0].locations, vec![loc(1, 21)]);

    assert_eq!(
        rule_messages(rules::FieldsOnCorrectType, "fragment F on Pet { nickname }"),
        vec![
            "Cannot query field \"nickname\" on type \"Pet\". Did you mean to use an inline \
             fragment on \"Dog\" or \"Cat\"?",
        ],
    );
    assert_eq!(
        rule_messages(rules::FieldsOnCorrectType, "fragment F on CatOrDog { name }"),
        vec![
            "Cannot query field \"name\" on type \"CatOrDog\". Did you mean to use an inline \
             fragment on \"Being\", \"Pet\", \"Canine\", \"Cat\", or \"Dog\"?",
        ],
    );
    assert!(
        rule_messages(
            rules::FieldsOnCorrectType,
            "fragment F on CatOrDog { __typename ... on Dog { name } }",
        )
        .is_empty(),
    );
}

// =============================================================================
// Fragment rules
// =============================================================================

/// Fragment names must be unique.
#[test]
fn unique_fragment_names() {
    assert_eq!(
        rule_messages(
            rules::UniqueFragmentNames::default(),
            "{ dog { ...fragA } } fragment fragA on Dog { name } fragment fragA on Dog { barks }",
        ),
        vec!["There can be only one fragment named \"fragA\"."],
    );
}

/// Spreads must name a defined fragment.
#[test]
fn known_fragment_names() {
    assert_eq!(
        rule_messages(
            rules::KnownFragmentNames,
            "{ human(id: 4) { ...UnknownFragment1 ... on Human { ...UnknownFragment2 } } }",
        ),
        vec![
            "Unknown fragment \"UnknownFragment1\".",
            "Unknown fragment \"UnknownFragment2\".",
        ],
    );
}

/// Fragments no operation reaches are reported, including those only
/// reachable from other unused fragments.
#[test]
fn no_unused_fragments() {
    assert_eq!(
        rule_messages(
            rules::NoUnusedFragments,
            "{ human(id: 4) { ...HumanFields } } \
             fragment HumanFields on Human { name ...Relatives } \
             fragment Relatives on Human { relatives { name } } \
             fragment Unused1 on Human { ...Unused2 } \
             fragment Unused2 on Human { name }",
        ),
        vec!["Fragment \"Unused1\" is never used.", "Fragment \"Unused2\" is never used."],
    );
}

/// A spread is rejected when no object could satisfy both types.
#[test]
fn possible_fragment_spreads() {
    assert_eq!(
        rule_messages(
            rules::PossibleFragmentSpreads,
            "fragment invalidObjectWithinObject on Cat { ...dogFragment } \
             fragment invalidInline on Cat { ... on Dog { barkVolume } } \
             fragment dogFragment on Dog { barkVolume }",
        ),
        vec![
            "Fragment \"dogFragment\" cannot be spread here as objects of type \"Cat\" can never \
             be of type \"Dog\".",
            "Fragment cannot be spread here as objects of type \"Cat\" can never be of type \
             \"Dog\".",
        ],
    );
    assert!(
        rule_messages(
            rules::PossibleFragmentSpreads,
            "fragment objectWithinInterface on Pet { ...dogFragment } \
             fragment unionWithinInterface on Being { ... on CatOrDog { __typename } } \
             fragment dogFragment on Dog { barkVolume }",
        )
        .is_empty(),
    );
}

/// Fragment cycles are reported once, naming the fragments they pass
/// through.
#[test]
fn no_fragment_cycles() {
    assert_eq!(
        rule_messages(rules::NoFragmentCycles, "fragment fragA on Dog { ...fragA }"),
        vec!["Cannot spread fragment \"fragA\" within itself."],
    );

    let errors = check_rule(
        rules::NoFragmentCycles,
        "fragment fragA on Dog { ...fragB } fragment fragB on Dog { ...fragA }",
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Cannot spread fragment \"fragA\" within itself via fragB.");
    assert_eq!(errors[0].locations.len(), 2);

    assert!(
        rule_messages(
            rules::NoFragmentCycles,
            "fragment fragA on Dog { ...fragB ...fragB } fragment fragB on Dog { name }",
        )
        .is_empty(),
    );
}

// =============================================================================
// Variable rules
// =============================================================================

/// Variable names must be unique within an operation.
#[test]
fn unique_variable_names() {
    assert_eq!(
        rule_messages(
            rules::UniqueVariableNames::default(),
            "query A($x: Int, $x: String) { __typename } query B($x: Int) { __typename }",
        ),
        vec!["There can be only one variable named \"x\"."],
    );
}

/// Variables used anywhere an operation reaches must be defined by it.
#[test]
fn no_undefined_variables() {
    assert_eq!(
        rule_messages(
            rules::NoUndefinedVariables,
            "query Foo($a: Int) { complicatedArgs { multipleReqs(req1: $a, req2: $b) } } \
             { complicatedArgs { ...Args } } \
             fragment Args on ComplicatedArgs { intArgField(intArg: $c) }",
        ),
        vec![
            "Variable \"$b\" is not defined by operation \"Foo\".",
            "Variable \"$c\" is not defined.",
        ],
    );
}

/// Every defined variable must be used, directly or through fragments.
#[test]
fn no_unused_variables() {
    assert_eq!(
        rule_messages(
            rules::NoUnusedVariables,
            "query Foo($a: Int, $b: Int) { complicatedArgs { intArgField(intArg: $a) } }",
        ),
        vec!["Variable \"$b\" is never used in operation \"Foo\"."],
    );
    assert!(
        rule_messages(
            rules::NoUnusedVariables,
            "query Foo($a: Int) { complicatedArgs { ...Args } } \
             fragment Args on ComplicatedArgs { intArgField(intArg: $a) }",
        )
        .is_empty(),
    );
}

/// Defaults must fit the variable's type, and non-null variables may not
/// have one.
#[test]
fn default_values_of_correct_type() {
    assert_eq!(
        rule_messages(
            rules::DefaultValuesOfCorrectType,
            "query A($x: Int! = 3) { __typename } query B($a: Int = \"one\") { __typename }",
        ),
        vec![
            "Variable \"$x\" of type \"Int!\" is required and will not use the default value. \
             Perhaps you meant to use type \"Int\".",
            "Variable \"$a\" of type \"Int\" has invalid default value \"one\".\nExpected type \
             \"Int\", found \"one\".",
        ],
    );
    assert!(
        rule_messages(
            rules::DefaultValuesOfCorrectType,
            "query A($a: Int = 1, $b: String = \"ok\", $c: ComplexInput = { requiredField: true }) \
             { __typename }",
        )
        .is_empty(),
    );
}

/// A variable must be at least as strict as the position it fills; a
/// default makes a nullable variable count as non-null.
#[test]
fn variables_in_allowed_position() {
    assert_eq!(
        rule_messages(
            rules::VariablesInAllowedPosition,
            "query Q($intArg: Int, $stringVar: String) { complicatedArgs { \
               nonNullIntArgField(nonNullIntArg: $intArg) \
               stringListArgField(stringListArg: $stringVar) \
             } }",
        ),
        vec![
            "Variable \"$intArg\" of type \"Int\" used in position expecting type \"Int!\".",
            "Variable \"$stringVar\" of type \"String\" used in position expecting type \
             \"[String]\".",
        ],
    );
    assert!(
        rule_messages(
            rules::VariablesInAllowedPosition,
            "query Q($intArg: Int = 1, $strings: [String!]!) { complicatedArgs { \
               nonNullIntArgField(nonNullIntArg: $intArg) \
               stringListArgField(stringListArg: $strings) \
             } }",
        )
        .is_empty(),
    );
}

// =============================================================================
// Directive and argument rules
// =============================================================================

/// Directives must be defined and used where their definition allows.
#[test]
fn known_directives() {
    assert_eq!(
        rule_messages(
            rules::KnownDirectives::default(),
            "{ dog @unknown(directive: \"value\") { name } }",
        ),
        vec!["Unknown directive \"unknown\"."],
    );
    assert_eq!(
        rule_messages(
            rules::KnownDirectives::default(),
            "query Foo @include(if: true) { dog { name @skip(if: false) } }",
        ),
        vec!["Directive \"include\" may not be used on QUERY."],
    );
}

/// Arguments must be defined by their field or directive; close names are
/// suggested.
#[test]
fn known_argument_names() {
    assert_eq!(
        rule_messages(
            rules::KnownArgumentNames::default(),
            "{ dog { doesKnowCommand(dogcommand: SIT) } dog @skip(iff: true) { name } }",
        ),
        vec![
            "Unknown argument \"dogcommand\" on field \"doesKnowCommand\" of type \"Dog\". Did \
             you mean \"dogCommand\"?",
            "Unknown argument \"iff\" on directive \"@skip\". Did you mean \"if\"?",
        ],
    );
    assert!(
        rule_messages(
            rules::KnownArgumentNames::default(),
            "{ dog { isAtLocation(x: 1, y: 2) name @include(if: true) } }",
        )
        .is_empty(),
    );
}

/// An argument may be passed only once.
#[test]
fn unique_argument_names() {
    assert_eq!(
        rule_messages(
            rules::UniqueArgumentNames::default(),
            "{ dog { isAtLocation(x: 1, x: 2) } }",
        ),
        vec!["There can be only one argument named \"x\"."],
    );
    assert!(
        rule_messages(
            rules::UniqueArgumentNames::default(),
            "{ dog { a: isAtLocation(x: 1) b: isAtLocation(x: 2) } }",
        )
        .is_empty(),
    );
}

/// Literal arguments must be valid for their type.
#[test]
fn arguments_of_correct_type() {
    assert_eq!(
        rule_messages(
            rules::ArgumentsOfCorrectType,
            "{ complicatedArgs { \
               intArgField(intArg: \"3\") \
               complexArgField(complexArg: { intField: 4 }) \
             } dog { doesKnowCommand(dogCommand: sit) } }",
        ),
        vec![
            "Argument \"intArg\" has invalid value \"3\".\nExpected type \"Int\", found \"3\".",
            "Argument \"complexArg\" has invalid value {intField: 4}.\nIn field \
             \"requiredField\": Expected \"Boolean!\", found null.",
            "Argument \"dogCommand\" has invalid value sit.\nExpected type \"DogCommand\", \
             found sit.",
        ],
    );
    assert!(
        rule_messages(
            rules::ArgumentsOfCorrectType,
            "{ complicatedArgs { \
               floatArgField(floatArg: 1) \
               idArgField(idArg: 1) \
               stringListArgField(stringListArg: \"one\") \
               complexArgField(complexArg: { requiredField: true, stringListField: [\"a\"] }) \
             } }",
        )
        .is_empty(),
    );
}

/// Required arguments must be passed; those with defaults need not be.
#[test]
fn provided_non_null_arguments() {
    assert_eq!(
        rule_messages(
            rules::ProvidedNonNullArguments,
            "{ complicatedArgs { multipleReqs(req2: 2) } dog @include { name } }",
        ),
        vec![
            "Field \"multipleReqs\" argument \"req1\" of type \"Int!\" is required but not \
             provided.",
            "Directive \"@include\" argument \"if\" of type \"Boolean!\" is required but not \
             provided.",
        ],
    );
    assert!(
        rule_messages(
            rules::ProvidedNonNullArguments,
            "{ complicatedArgs { multipleOptAndReq(req1: 1, req2: 2) multipleOpts } }",
        )
        .is_empty(),
    );
}

/// An input object literal may set each field only once.
#[test]
fn unique_input_field_names() {
    assert_eq!(
        rule_messages(
            rules::UniqueInputFieldNames::default(),
            "{ complicatedArgs { complexArgField(complexArg: { \
               requiredField: true, requiredField: false \
             }) } }",
        ),
        vec!["There can be only one input field named \"requiredField\"."],
    );
}

// =============================================================================
// OverlappingFieldsCanBeMerged
// =============================================================================

/// One response key may not select two different fields.
#[test]
fn overlapping_fields_with_different_targets() {
    assert_eq!(
        rule_messages(
            rules::OverlappingFieldsCanBeMerged,
            "fragment F on Dog { fido: name fido: nickname }",
        ),
        vec![
            "Fields \"fido\" conflict because name and nickname are different fields. Use \
             different aliases on the fields to fetch both if this was intentional.",
        ],
    );
}

/// One response key may not select the same field with different
/// arguments, unless aliased apart.
#[test]
fn overlapping_fields_with_differing_arguments() {
    assert_eq!(
        rule_messages(
            rules::OverlappingFieldsCanBeMerged,
            "fragment F on Dog { doesKnowCommand(dogCommand: SIT) doesKnowCommand(dogCommand: HEEL) }",
        ),
        vec![
            "Fields \"doesKnowCommand\" conflict because they have differing arguments. Use \
             different aliases on the fields to fetch both if this was intentional.",
        ],
    );
    assert!(
        rule_messages(
            rules::OverlappingFieldsCanBeMerged,
            "fragment F on Dog { \
               knowsSit: doesKnowCommand(dogCommand: SIT) \
               knowsDown: doesKnowCommand(dogCommand: DOWN) \
               isHousetrained(atOtherHomes: true) isHousetrained(atOtherHomes: true) \
             }",
        )
        .is_empty(),
    );
}

/// Fields on different object types may differ, but their types must
/// still agree.
#[test]
fn overlapping_fields_on_exclusive_parents() {
    assert!(
        rule_messages(
            rules::OverlappingFieldsCanBeMerged,
            "{ catOrDog { ... on Dog { name: nickname } ... on Cat { name } } }",
        )
        .is_empty(),
    );
    assert_eq!(
        rule_messages(
            rules::OverlappingFieldsCanBeMerged,
            "{ catOrDog { ... on Dog { someValue: nickname } ... on Cat { someValue: meowVolume } } }",
        ),
        vec![
            "Fields \"someValue\" conflict because they return conflicting types String and Int. \
             Use different aliases on the fields to fetch both if this was intentional.",
        ],
    );
}

/// Conflicts between sub-selections are reported at the enclosing fields,
/// with every involved field located.
#[test]
fn overlapping_fields_in_sub_selections() {
    let errors = check_rule(
        rules::OverlappingFieldsCanBeMerged,
        "{ dog { x: name } dog { x: barkVolume } }",
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Fields \"dog\" conflict because subfields \"x\" conflict because name and barkVolume \
         are different fields. Use different aliases on the fields to fetch both if this was \
         intentional.",
    );
    assert_eq!(
        errors[0].locations,
        vec![loc(1, 3), loc(1, 9), loc(1, 19), loc(1, 25)],
    );
}

/// Fields reached through fragment spreads are compared with the fields
/// next to the spread.
#[test]
fn overlapping_fields_through_fragments() {
    assert_eq!(
        rule_messages(
            rules::OverlappingFieldsCanBeMerged,
            "{ dog { ...A name: nickname } } fragment A on Dog { name }",
        ),
        vec![
            "Fields \"name\" conflict because nickname and name are different fields. Use \
             different aliases on the fields to fetch both if this was intentional.",
        ],
    );
}
