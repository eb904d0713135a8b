use crate::GraphQLError;
use crate::validation::ValidationContext;
use crate::values::is_valid_literal_value;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::printer::print_value;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// Every literal argument value is valid for the argument's type.
pub struct ArgumentsOfCorrectType;

impl<'a> Visitor<ValidationContext<'a>> for ArgumentsOfCorrectType {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        let AstNodeRef::Argument(argument) = node else {
            return VisitAction::Continue;
        };
        let Some(argument_def) = cx.type_info().argument() else {
            return VisitAction::Skip;
        };
        let problems =
            is_valid_literal_value(&argument_def.value_type, Some(&argument.value), cx.schema());
        if !problems.is_empty() {
            cx.report_error(GraphQLError::with_spans(
                format!(
                    "Argument \"{}\" has invalid value {}.\n{}",
                    argument.name.value,
                    print_value(&argument.value),
                    problems.join("\n"),
                ),
                [argument.value.span()],
            ));
        }
        VisitAction::Skip
    }
}
