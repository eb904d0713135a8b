use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::ast::DirectiveLocation;
use graphql_engine_parser::ast::OperationKind;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// Every directive is defined by the schema and applied at one of the
/// locations its definition allows.
#[derive(Default)]
pub struct KnownDirectives {
    /// The location of each enclosing node a directive could be applied to.
    locations: Vec<Option<DirectiveLocation>>,
}

impl KnownDirectives {
    /// The directive location `node` represents, for nodes that carry
    /// directives (or, for variable definitions, may not).
    fn location_of(&self, node: AstNodeRef<'_>) -> Option<Option<DirectiveLocation>> {
        let location = match node {
            AstNodeRef::OperationDefinition(operation) => match operation.operation {
                OperationKind::Query => DirectiveLocation::Query,
                OperationKind::Mutation => DirectiveLocation::Mutation,
                OperationKind::Subscription => DirectiveLocation::Subscription,
            },
            AstNodeRef::Field(_) => DirectiveLocation::Field,
            AstNodeRef::FragmentSpread(_) => DirectiveLocation::FragmentSpread,
            AstNodeRef::InlineFragment(_) => DirectiveLocation::InlineFragment,
            AstNodeRef::FragmentDefinition(_) => DirectiveLocation::FragmentDefinition,
            AstNodeRef::SchemaDefinition(_) => DirectiveLocation::Schema,
            AstNodeRef::ScalarTypeDefinition(_) => DirectiveLocation::Scalar,
            AstNodeRef::ObjectTypeDefinition(_) => DirectiveLocation::Object,
            AstNodeRef::FieldDefinition(_) => DirectiveLocation::FieldDefinition,
            AstNodeRef::InterfaceTypeDefinition(_) => DirectiveLocation::Interface,
            AstNodeRef::UnionTypeDefinition(_) => DirectiveLocation::Union,
            AstNodeRef::EnumTypeDefinition(_) => DirectiveLocation::Enum,
            AstNodeRef::EnumValueDefinition(_) => DirectiveLocation::EnumValue,
            AstNodeRef::InputObjectTypeDefinition(_) => DirectiveLocation::InputObject,
            AstNodeRef::InputValueDefinition(_) => {
                if self.locations.last() == Some(&Some(DirectiveLocation::InputObject)) {
                    DirectiveLocation::InputFieldDefinition
                } else {
                    DirectiveLocation::ArgumentDefinition
                }
            },
            AstNodeRef::VariableDefinition(_) => return Some(None),
            _ => return None,
        };
        Some(Some(location))
    }
}

impl<'a> Visitor<ValidationContext<'a>> for KnownDirectives {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        if let Some(location) = self.location_of(node) {
            self.locations.push(location);
            return VisitAction::Continue;
        }
        let AstNodeRef::Directive(directive) = node else {
            return VisitAction::Continue;
        };

        let name = directive.name.as_str();
        let Some(directive_def) = cx.schema().directive(name) else {
            cx.report_error(GraphQLError::with_spans(
                format!("Unknown directive \"{name}\"."),
                [directive.span],
            ));
            return VisitAction::Skip;
        };
        match self.locations.last().copied().flatten() {
            Some(location) if directive_def.is_allowed_at(location) => {},
            Some(location) => cx.report_error(GraphQLError::with_spans(
                format!("Directive \"{name}\" may not be used on {}.", location.as_str()),
                [directive.span],
            )),
            None => cx.report_error(GraphQLError::with_spans(
                format!("Directive \"{name}\" may not be used here."),
                [directive.span],
            )),
        }
        VisitAction::Skip
    }

    fn leave(&mut self, _cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        if self.location_of(node).is_some() {
            self.locations.pop();
        }
        VisitAction::Continue
    }
}
