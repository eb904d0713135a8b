use crate::GraphQLError;
use crate::types::type_from_ast;
use crate::validation::ValidationContext;
use crate::values::is_valid_literal_value;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::printer::print_value;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// Variable defaults are valid for their variable's type, and only
/// nullable variables have them.
pub struct DefaultValuesOfCorrectType;

impl<'a> Visitor<ValidationContext<'a>> for DefaultValuesOfCorrectType {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        let definition = match node {
            AstNodeRef::VariableDefinition(definition) => definition,
            AstNodeRef::SelectionSet(_) | AstNodeRef::FragmentDefinition(_) => {
                return VisitAction::Skip;
            },
            _ => return VisitAction::Continue,
        };
        let schema = cx.schema();
        let (Some(default_value), Some(var_type)) = (
            &definition.default_value,
            type_from_ast(schema, &definition.var_type),
        ) else {
            return VisitAction::Skip;
        };

        let name = definition.variable.name.as_str();
        if var_type.is_non_null() {
            cx.report_error(GraphQLError::with_spans(
                format!(
                    "Variable \"${name}\" of type \"{var_type}\" is required and will not use the \
                     default value. Perhaps you meant to use type \"{}\".",
                    var_type.nullable_type(),
                ),
                [default_value.span()],
            ));
            return VisitAction::Skip;
        }
        let problems = is_valid_literal_value(&var_type, Some(default_value), schema);
        if !problems.is_empty() {
            cx.report_error(GraphQLError::with_spans(
                format!(
                    "Variable \"${name}\" of type \"{var_type}\" has invalid default value {}.\n{}",
                    print_value(default_value),
                    problems.join("\n"),
                ),
                [default_value.span()],
            ));
        }
        VisitAction::Skip
    }
}
