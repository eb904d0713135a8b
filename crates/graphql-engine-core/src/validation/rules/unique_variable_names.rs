use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::GraphQLSourceSpan;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use std::collections::HashMap;

/// No two variables of an operation share a name.
#[derive(Default)]
pub struct UniqueVariableNames {
    known_names: HashMap<String, Option<GraphQLSourceSpan>>,
}

impl<'a> Visitor<ValidationContext<'a>> for UniqueVariableNames {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::OperationDefinition(_) => {
                self.known_names.clear();
                VisitAction::Continue
            },
            AstNodeRef::VariableDefinition(definition) => {
                let name = &definition.variable.name;
                if let Some(first) = self.known_names.get(name.as_str()) {
                    cx.report_error(GraphQLError::with_spans(
                        format!("There can be only one variable named \"{}\".", name.value),
                        [*first, definition.variable.span],
                    ));
                } else {
                    self.known_names.insert(name.value.clone(), definition.variable.span);
                }
                VisitAction::Skip
            },
            AstNodeRef::SelectionSet(_) | AstNodeRef::FragmentDefinition(_) => VisitAction::Skip,
            _ => VisitAction::Continue,
        }
    }
}
