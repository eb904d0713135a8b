use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::GraphQLSourceSpan;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use std::collections::HashMap;

/// No two fragments of a document share a name.
#[derive(Default)]
pub struct UniqueFragmentNames {
    known_names: HashMap<String, Option<GraphQLSourceSpan>>,
}

impl<'a> Visitor<ValidationContext<'a>> for UniqueFragmentNames {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::Document(_) => {
                self.known_names.clear();
                VisitAction::Continue
            },
            AstNodeRef::FragmentDefinition(fragment) => {
                let name = &fragment.name;
                if let Some(first) = self.known_names.get(name.as_str()) {
                    cx.report_error(GraphQLError::with_spans(
                        format!("There can be only one fragment named \"{}\".", name.value),
                        [*first, name.span],
                    ));
                } else {
                    self.known_names.insert(name.value.clone(), name.span);
                }
                VisitAction::Skip
            },
            AstNodeRef::OperationDefinition(_) => VisitAction::Skip,
            _ => VisitAction::Continue,
        }
    }
}
