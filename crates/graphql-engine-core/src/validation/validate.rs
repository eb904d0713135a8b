use crate::GraphQLError;
use crate::schema::Schema;
use crate::type_info::TypeInfoVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::validation::specified_rules;
use graphql_engine_parser::ast;
use graphql_engine_parser::visitor::ParallelVisitor;
use graphql_engine_parser::visitor::visit;

/// Checks `document` against `schema` with every specified rule.
pub fn validate(schema: &Schema, document: &ast::Document) -> Vec<GraphQLError> {
    validate_with_rules(schema, document, specified_rules())
}

/// Checks `document` against `schema` with the given rules, in one
/// traversal. Every rule runs to completion; the errors of all rules are
/// returned in the order they were reported.
pub fn validate_with_rules(
    schema: &Schema,
    document: &ast::Document,
    rules: Vec<Box<dyn ValidationRule>>,
) -> Vec<GraphQLError> {
    let rule_count = rules.len();
    let mut cx = ValidationContext::new(schema, document);
    let mut visitor = TypeInfoVisitor::new(ParallelVisitor::new(rules));
    visit(document.into(), &mut visitor, &mut cx);

    let errors = cx.into_errors();
    log::debug!(
        "validation with {rule_count} rule(s) reported {} error(s)",
        errors.len(),
    );
    errors
}
