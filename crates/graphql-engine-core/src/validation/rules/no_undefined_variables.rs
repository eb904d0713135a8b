use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use std::collections::HashSet;

/// Every variable an operation uses, including through the fragments it
/// spreads, is defined by that operation.
pub struct NoUndefinedVariables;

impl<'a> Visitor<ValidationContext<'a>> for NoUndefinedVariables {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        let AstNodeRef::OperationDefinition(node) = node else {
            return match node {
                AstNodeRef::Document(_) => VisitAction::Continue,
                _ => VisitAction::Skip,
            };
        };
        let Some(operation) = cx.operation(node) else {
            return VisitAction::Skip;
        };
        let defined: HashSet<&str> = operation
            .variable_definitions
            .iter()
            .map(|definition| definition.variable.name.as_str())
            .collect();
        for usage in cx.recursive_variable_usages(operation) {
            if defined.contains(usage.name.as_str()) {
                continue;
            }
            let message = match operation.name_str() {
                Some(operation_name) => format!(
                    "Variable \"${}\" is not defined by operation \"{operation_name}\".",
                    usage.name,
                ),
                None => format!("Variable \"${}\" is not defined.", usage.name),
            };
            cx.report_error(GraphQLError::with_spans(message, [usage.span, operation.span]));
        }
        VisitAction::Skip
    }
}
