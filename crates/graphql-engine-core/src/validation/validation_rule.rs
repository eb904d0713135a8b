use crate::validation::ValidationContext;
use crate::validation::rules;
use graphql_engine_parser::visitor::Visitor;

/// A validation rule: a visitor that reports problems through the
/// [`ValidationContext`] it is handed.
///
/// Any visitor over a `ValidationContext` of every lifetime is a rule.
pub trait ValidationRule: for<'a> Visitor<ValidationContext<'a>> {}

impl<T: for<'a> Visitor<ValidationContext<'a>>> ValidationRule for T {}

/// Every rule of the GraphQL specification, in the order their errors are
/// reported.
pub fn specified_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(rules::ExecutableDefinitions),
        Box::new(rules::UniqueOperationNames::default()),
        Box::new(rules::LoneAnonymousOperation::default()),
        Box::new(rules::KnownTypeNames),
        Box::new(rules::FragmentsOnCompositeTypes),
        Box::new(rules::VariablesAreInputTypes),
        Box::new(rules::ScalarLeafs),
        Box::new(rules::FieldsOnCorrectType),
        Box::new(rules::UniqueFragmentNames::default()),
        Box::new(rules::KnownFragmentNames),
        Box::new(rules::NoUnusedFragments),
        Box::new(rules::PossibleFragmentSpreads),
        Box::new(rules::NoFragmentCycles),
        Box::new(rules::UniqueVariableNames::default()),
        Box::new(rules::NoUndefinedVariables),
        Box::new(rules::NoUnusedVariables),
        Box::new(rules::KnownDirectives::default()),
        Box::new(rules::KnownArgumentNames::default()),
        Box::new(rules::UniqueArgumentNames::default()),
        Box::new(rules::ArgumentsOfCorrectType),
        Box::new(rules::ProvidedNonNullArguments),
        Box::new(rules::DefaultValuesOfCorrectType),
        Box::new(rules::VariablesInAllowedPosition),
        Box::new(rules::OverlappingFieldsCanBeMerged),
        Box::new(rules::UniqueInputFieldNames::default()),
    ]
}
