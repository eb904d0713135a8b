use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// Leaf fields have no sub-selection and every other field has one.
pub struct ScalarLeafs;

impl<'a> Visitor<ValidationContext<'a>> for ScalarLeafs {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        let AstNodeRef::Field(field) = node else {
            return VisitAction::Continue;
        };
        let type_info = cx.type_info();
        let (Some(output_type), Some(named_type)) =
            (type_info.output_type(), type_info.named_output_type())
        else {
            return VisitAction::Continue;
        };
        let field_name = field.name.as_str();
        let error = match &field.selection_set {
            Some(selection_set) if named_type.is_leaf_type() => Some(GraphQLError::with_spans(
                format!(
                    "Field \"{field_name}\" must not have a selection since type \"{output_type}\" \
                     has no subfields.",
                ),
                [selection_set.span],
            )),
            None if !named_type.is_leaf_type() => Some(GraphQLError::with_spans(
                format!(
                    "Field \"{field_name}\" of type \"{output_type}\" must have a selection of \
                     subfields. Did you mean \"{field_name} {{ ... }}\"?",
                ),
                [field.span],
            )),
            _ => None,
        };
        if let Some(error) = error {
            cx.report_error(error);
        }
        VisitAction::Continue
    }
}
