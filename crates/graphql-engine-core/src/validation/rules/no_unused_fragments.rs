use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use std::collections::HashSet;

/// Every fragment defined in a document is reached by some operation.
pub struct NoUnusedFragments;

impl<'a> Visitor<ValidationContext<'a>> for NoUnusedFragments {
    fn enter(&mut self, _cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::Document(_) => VisitAction::Continue,
            _ => VisitAction::Skip,
        }
    }

    fn leave(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        if !matches!(node, AstNodeRef::Document(_)) {
            return VisitAction::Continue;
        }
        let document = cx.document();
        let used: HashSet<&str> = document
            .operations()
            .flat_map(|operation| cx.recursively_referenced_fragments(operation))
            .map(|fragment| fragment.name.as_str())
            .collect();
        for fragment in document.fragments() {
            if !used.contains(fragment.name.as_str()) {
                cx.report_error(GraphQLError::with_spans(
                    format!("Fragment \"{}\" is never used.", fragment.name.value),
                    [fragment.span],
                ));
            }
        }
        VisitAction::Continue
    }
}
