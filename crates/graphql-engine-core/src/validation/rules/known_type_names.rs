use crate::GraphQLError;
use crate::suggestion_list::quoted_or_list;
use crate::suggestion_list::suggestion_list;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// Every type named by a variable definition or type condition exists in
/// the schema.
pub struct KnownTypeNames;

impl<'a> Visitor<ValidationContext<'a>> for KnownTypeNames {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::NamedType(named_type) => {
                let schema = cx.schema();
                let type_name = named_type.name.as_str();
                if schema.type_named(type_name).is_none() {
                    let suggestions =
                        suggestion_list(type_name, schema.types().keys().map(String::as_str));
                    let mut message = format!("Unknown type \"{type_name}\".");
                    if !suggestions.is_empty() {
                        message.push_str(&format!(" Did you mean {}?", quoted_or_list(&suggestions)));
                    }
                    cx.report_error(GraphQLError::with_spans(message, [named_type.span]));
                }
                VisitAction::Continue
            },
            // Type system definitions are reported as non-executable instead.
            AstNodeRef::SchemaDefinition(_)
            | AstNodeRef::ScalarTypeDefinition(_)
            | AstNodeRef::ObjectTypeDefinition(_)
            | AstNodeRef::InterfaceTypeDefinition(_)
            | AstNodeRef::UnionTypeDefinition(_)
            | AstNodeRef::EnumTypeDefinition(_)
            | AstNodeRef::InputObjectTypeDefinition(_)
            | AstNodeRef::TypeExtensionDefinition(_)
            | AstNodeRef::DirectiveDefinition(_) => VisitAction::Skip,
            _ => VisitAction::Continue,
        }
    }
}
