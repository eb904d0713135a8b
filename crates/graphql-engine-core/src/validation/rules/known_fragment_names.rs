use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// Every fragment spread names a fragment defined in the document.
pub struct KnownFragmentNames;

impl<'a> Visitor<ValidationContext<'a>> for KnownFragmentNames {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        if let AstNodeRef::FragmentSpread(spread) = node {
            if cx.fragment(spread.name.as_str()).is_none() {
                cx.report_error(GraphQLError::with_spans(
                    format!("Unknown fragment \"{}\".", spread.name.value),
                    [spread.name.span],
                ));
            }
        }
        VisitAction::Continue
    }
}
