use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use std::collections::HashSet;

/// Every variable an operation defines is used by it or by a fragment it
/// spreads.
pub struct NoUnusedVariables;

impl<'a> Visitor<ValidationContext<'a>> for NoUnusedVariables {
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
        let used: HashSet<String> = cx
            .recursive_variable_usages(operation)
            .into_iter()
            .map(|usage| usage.name)
            .collect();
        for definition in &operation.variable_definitions {
            let name = definition.variable.name.as_str();
            if used.contains(name) {
                continue;
            }
            let message = match operation.name_str() {
                Some(operation_name) => {
                    format!("Variable \"${name}\" is never used in operation \"{operation_name}\".")
                },
                None => format!("Variable \"${name}\" is never used."),
            };
            cx.report_error(GraphQLError::with_spans(message, [definition.span]));
        }
        VisitAction::Skip
    }
}
