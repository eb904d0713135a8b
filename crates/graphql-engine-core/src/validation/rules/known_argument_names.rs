use crate::GraphQLError;
use crate::suggestion_list::quoted_or_list;
use crate::suggestion_list::suggestion_list;
use crate::types::InputValue;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use indexmap::IndexMap;

/// Every argument is defined by the field or directive it is passed to.
#[derive(Default)]
pub struct KnownArgumentNames {
    in_directive: bool,
}

impl<'a> Visitor<ValidationContext<'a>> for KnownArgumentNames {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::Directive(_) => self.in_directive = true,
            AstNodeRef::Argument(argument) => {
                let type_info = cx.type_info();
                if type_info.argument().is_some() {
                    return VisitAction::Skip;
                }
                let argument_name = argument.name.as_str();
                let message = if self.in_directive {
                    type_info.directive().map(|directive| {
                        format!(
                            "Unknown argument \"{argument_name}\" on directive \"@{}\".{}",
                            directive.name,
                            did_you_mean(argument_name, &directive.arguments),
                        )
                    })
                } else {
                    type_info.field_def().zip(type_info.parent_type()).map(|(field_def, parent)| {
                        format!(
                            "Unknown argument \"{argument_name}\" on field \"{}\" of type \"{}\".{}",
                            field_def.name,
                            parent.name(),
                            did_you_mean(argument_name, &field_def.arguments),
                        )
                    })
                };
                if let Some(message) = message {
                    cx.report_error(GraphQLError::with_spans(message, [argument.span]));
                }
                return VisitAction::Skip;
            },
            _ => {},
        }
        VisitAction::Continue
    }

    fn leave(&mut self, _cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        if let AstNodeRef::Directive(_) = node {
            self.in_directive = false;
        }
        VisitAction::Continue
    }
}

fn did_you_mean(argument_name: &str, arguments: &IndexMap<String, InputValue>) -> String {
    let suggestions = suggestion_list(argument_name, arguments.keys().map(String::as_str));
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Did you mean {}?", quoted_or_list(&suggestions))
    }
}
