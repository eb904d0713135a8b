use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// An anonymous operation must be the only operation in its document.
#[derive(Default)]
pub struct LoneAnonymousOperation {
    operation_count: usize,
}

impl<'a> Visitor<ValidationContext<'a>> for LoneAnonymousOperation {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::Document(document) => {
                self.operation_count = document.operations().count();
                VisitAction::Continue
            },
            AstNodeRef::OperationDefinition(operation) => {
                if operation.name.is_none() && self.operation_count > 1 {
                    cx.report_error(GraphQLError::with_spans(
                        "This anonymous operation must be the only defined operation.",
                        [operation.span],
                    ));
                }
                VisitAction::Skip
            },
            AstNodeRef::FragmentDefinition(_) => VisitAction::Skip,
            _ => VisitAction::Continue,
        }
    }
}
