use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// Fragments may only be conditioned on object, interface or union types.
pub struct FragmentsOnCompositeTypes;

impl FragmentsOnCompositeTypes {
    /// The condition's name if it names a type that exists but is not
    /// composite. Unknown names are left to `KnownTypeNames`.
    fn non_composite_condition<'n>(
        cx: &ValidationContext<'_>,
        condition: &'n ast::NamedType,
    ) -> Option<&'n str> {
        let condition_type = cx.schema().type_named(condition.name.as_str())?;
        (!condition_type.is_composite_type()).then_some(condition.name.as_str())
    }
}

impl<'a> Visitor<ValidationContext<'a>> for FragmentsOnCompositeTypes {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::InlineFragment(inline) => {
                let Some(condition) = &inline.type_condition else {
                    return VisitAction::Continue;
                };
                if let Some(type_name) = Self::non_composite_condition(cx, condition) {
                    cx.report_error(GraphQLError::with_spans(
                        format!("Fragment cannot condition on non composite type \"{type_name}\"."),
                        [condition.span],
                    ));
                }
            },
            AstNodeRef::FragmentDefinition(fragment) => {
                let condition = &fragment.type_condition;
                if let Some(type_name) = Self::non_composite_condition(cx, condition) {
                    cx.report_error(GraphQLError::with_spans(
                        format!(
                            "Fragment \"{}\" cannot condition on non composite type \"{type_name}\".",
                            fragment.name.value,
                        ),
                        [condition.span],
                    ));
                }
            },
            _ => {},
        }
        VisitAction::Continue
    }
}
