use crate::GraphQLError;
use crate::types::do_types_overlap;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// A fragment may only be spread where some object could satisfy both its
/// type condition and the surrounding type.
pub struct PossibleFragmentSpreads;

impl<'a> Visitor<ValidationContext<'a>> for PossibleFragmentSpreads {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        let schema = cx.schema();
        match node {
            AstNodeRef::InlineFragment(inline) => {
                let type_info = cx.type_info();
                let (Some(fragment_type), Some(parent_type)) =
                    (type_info.named_output_type(), type_info.parent_type())
                else {
                    return VisitAction::Continue;
                };
                if fragment_type.is_composite_type()
                    && !do_types_overlap(schema, fragment_type, parent_type)
                {
                    cx.report_error(GraphQLError::with_spans(
                        format!(
                            "Fragment cannot be spread here as objects of type \"{}\" can never \
                             be of type \"{}\".",
                            parent_type.name(),
                            fragment_type.name(),
                        ),
                        [inline.span],
                    ));
                }
            },
            AstNodeRef::FragmentSpread(spread) => {
                let fragment_type = cx
                    .fragment(spread.name.as_str())
                    .and_then(|fragment| schema.type_named(fragment.type_condition.name.as_str()));
                let (Some(fragment_type), Some(parent_type)) =
                    (fragment_type, cx.type_info().parent_type())
                else {
                    return VisitAction::Continue;
                };
                if fragment_type.is_composite_type()
                    && !do_types_overlap(schema, fragment_type, parent_type)
                {
                    cx.report_error(GraphQLError::with_spans(
                        format!(
                            "Fragment \"{}\" cannot be spread here as objects of type \"{}\" can \
                             never be of type \"{}\".",
                            spread.name.value,
                            parent_type.name(),
                            fragment_type.name(),
                        ),
                        [spread.span],
                    ));
                }
            },
            _ => {},
        }
        VisitAction::Continue
    }
}
