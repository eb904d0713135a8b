use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::GraphQLSourceSpan;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use std::collections::HashMap;

/// No argument is passed twice to the same field or directive.
#[derive(Default)]
pub struct UniqueArgumentNames {
    known_names: HashMap<String, Option<GraphQLSourceSpan>>,
}

impl<'a> Visitor<ValidationContext<'a>> for UniqueArgumentNames {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::Field(_) | AstNodeRef::Directive(_) => {
                self.known_names.clear();
                VisitAction::Continue
            },
            AstNodeRef::Argument(argument) => {
                let name = &argument.name;
                if let Some(first) = self.known_names.get(name.as_str()) {
                    cx.report_error(GraphQLError::with_spans(
                        format!("There can be only one argument named \"{}\".", name.value),
                        [*first, name.span],
                    ));
                } else {
                    self.known_names.insert(name.value.clone(), name.span);
                }
                VisitAction::Skip
            },
            _ => VisitAction::Continue,
        }
    }
}
