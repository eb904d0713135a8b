use crate::GraphQLError;
use crate::types::is_type_sub_type_of;
use crate::types::type_from_ast;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use std::collections::HashMap;

/// Every variable is used only where its type fits. A nullable variable
/// with a default counts as non-null.
pub struct VariablesInAllowedPosition;

impl<'a> Visitor<ValidationContext<'a>> for VariablesInAllowedPosition {
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
        let schema = cx.schema();
        let definitions: HashMap<&str, &ast::VariableDefinition> = operation
            .variable_definitions
            .iter()
            .map(|definition| (definition.variable.name.as_str(), definition))
            .collect();

        for usage in cx.recursive_variable_usages(operation) {
            let Some(usage_type) = &usage.input_type else {
                continue;
            };
            let Some(definition) = definitions.get(usage.name.as_str()) else {
                continue;
            };
            let Some(var_type) = type_from_ast(schema, &definition.var_type) else {
                continue;
            };
            let effective_type = if definition.default_value.is_some() && var_type.is_nullable() {
                var_type.clone().non_null().unwrap_or_else(|_| var_type.clone())
            } else {
                var_type.clone()
            };
            if !is_type_sub_type_of(schema, &effective_type, usage_type) {
                cx.report_error(GraphQLError::with_spans(
                    format!(
                        "Variable \"${}\" of type \"{var_type}\" used in position expecting type \
                         \"{usage_type}\".",
                        usage.name,
                    ),
                    [definition.span, usage.span],
                ));
            }
        }
        VisitAction::Skip
    }
}
