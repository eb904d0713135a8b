use crate::GraphQLError;
use crate::types::type_from_ast;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::printer::print_type;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// Variables may only be declared with scalar, enum or input object types.
pub struct VariablesAreInputTypes;

impl<'a> Visitor<ValidationContext<'a>> for VariablesAreInputTypes {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        let AstNodeRef::VariableDefinition(definition) = node else {
            return VisitAction::Continue;
        };
        let schema = cx.schema();
        let is_non_input = type_from_ast(schema, &definition.var_type)
            .is_some_and(|var_type| !var_type.is_input_type(schema));
        if is_non_input {
            cx.report_error(GraphQLError::with_spans(
                format!(
                    "Variable \"${}\" cannot be non-input type \"{}\".",
                    definition.variable.name.value,
                    print_type(&definition.var_type),
                ),
                [definition.var_type.span()],
            ));
        }
        VisitAction::Skip
    }
}
