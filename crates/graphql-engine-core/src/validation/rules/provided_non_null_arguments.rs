use crate::GraphQLError;
use crate::types::InputValue;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use indexmap::IndexMap;

/// Every non-null argument without a default is passed.
pub struct ProvidedNonNullArguments;

impl<'a> Visitor<ValidationContext<'a>> for ProvidedNonNullArguments {
    fn leave(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::Field(field) => {
                let Some(field_def) = cx.type_info().field_def() else {
                    return VisitAction::Continue;
                };
                for argument_def in missing_arguments(&field_def.arguments, &field.arguments) {
                    cx.report_error(GraphQLError::with_spans(
                        format!(
                            "Field \"{}\" argument \"{}\" of type \"{}\" is required but not \
                             provided.",
                            field.name.value, argument_def.name, argument_def.value_type,
                        ),
                        [field.span],
                    ));
                }
            },
            AstNodeRef::Directive(directive) => {
                let Some(directive_def) = cx.schema().directive(directive.name.as_str()) else {
                    return VisitAction::Continue;
                };
                for argument_def in missing_arguments(&directive_def.arguments, &directive.arguments) {
                    cx.report_error(GraphQLError::with_spans(
                        format!(
                            "Directive \"@{}\" argument \"{}\" of type \"{}\" is required but not \
                             provided.",
                            directive.name.value, argument_def.name, argument_def.value_type,
                        ),
                        [directive.span],
                    ));
                }
            },
            _ => {},
        }
        VisitAction::Continue
    }
}

fn missing_arguments<'d>(
    definitions: &'d IndexMap<String, InputValue>,
    arguments: &[ast::Argument],
) -> Vec<&'d InputValue> {
    definitions
        .values()
        .filter(|definition| {
            definition.value_type.is_non_null()
                && definition.default_value.is_none()
                && !arguments.iter().any(|argument| argument.name.as_str() == definition.name)
        })
        .collect()
}
