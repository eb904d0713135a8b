use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::GraphQLSourceSpan;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use std::collections::HashMap;

/// No field is given twice within one input object literal.
#[derive(Default)]
pub struct UniqueInputFieldNames {
    known_names_stack: Vec<HashMap<String, Option<GraphQLSourceSpan>>>,
}

impl<'a> Visitor<ValidationContext<'a>> for UniqueInputFieldNames {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::ObjectValue(_) => self.known_names_stack.push(HashMap::new()),
            AstNodeRef::ObjectField(object_field) => {
                let name = &object_field.name;
                let Some(known_names) = self.known_names_stack.last_mut() else {
                    return VisitAction::Continue;
                };
                if let Some(first) = known_names.get(name.as_str()) {
                    cx.report_error(GraphQLError::with_spans(
                        format!("There can be only one input field named \"{}\".", name.value),
                        [*first, name.span],
                    ));
                } else {
                    known_names.insert(name.value.clone(), name.span);
                }
            },
            _ => {},
        }
        VisitAction::Continue
    }

    fn leave(&mut self, _cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        if let AstNodeRef::ObjectValue(_) = node {
            self.known_names_stack.pop();
        }
        VisitAction::Continue
    }
}
