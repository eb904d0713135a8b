use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// A document submitted for execution may only contain operations and
/// fragments.
pub struct ExecutableDefinitions;

impl<'a> Visitor<ValidationContext<'a>> for ExecutableDefinitions {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        let AstNodeRef::Document(document) = node else {
            return VisitAction::Continue;
        };
        for definition in &document.definitions {
            let name = match definition {
                ast::Definition::Operation(_) | ast::Definition::Fragment(_) => continue,
                ast::Definition::Schema(_) => "schema",
                ast::Definition::ScalarType(def) => def.name.as_str(),
                ast::Definition::ObjectType(def) => def.name.as_str(),
                ast::Definition::InterfaceType(def) => def.name.as_str(),
                ast::Definition::UnionType(def) => def.name.as_str(),
                ast::Definition::EnumType(def) => def.name.as_str(),
                ast::Definition::InputObjectType(def) => def.name.as_str(),
                ast::Definition::TypeExtension(def) => def.definition.name.as_str(),
                ast::Definition::Directive(def) => def.name.as_str(),
            };
            cx.report_error(GraphQLError::with_spans(
                format!("The {name} definition is not executable."),
                [definition.span()],
            ));
        }
        VisitAction::Break
    }
}
