use crate::GraphQLError;
use crate::schema::Schema;
use crate::suggestion_list::quoted_or_list;
use crate::suggestion_list::suggestion_list;
use crate::types::GraphQLType;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use indexmap::IndexMap;

/// Every selected field is defined on the type it is selected from.
pub struct FieldsOnCorrectType;

impl<'a> Visitor<ValidationContext<'a>> for FieldsOnCorrectType {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        let AstNodeRef::Field(field) = node else {
            return VisitAction::Continue;
        };
        let type_info = cx.type_info();
        let Some(parent_type) = type_info.parent_type() else {
            return VisitAction::Continue;
        };
        if type_info.field_def().is_some() {
            return VisitAction::Continue;
        }

        let field_name = field.name.as_str();
        let suggested_types = suggested_type_names(cx.schema(), parent_type, field_name);
        let mut message =
            format!("Cannot query field \"{field_name}\" on type \"{}\".", parent_type.name());
        if !suggested_types.is_empty() {
            message.push_str(&format!(
                " Did you mean to use an inline fragment on {}?",
                quoted_or_list(&suggested_types),
            ));
        } else if let Some(fields) = parent_type.fields() {
            let suggested_fields = suggestion_list(field_name, fields.keys().map(String::as_str));
            if !suggested_fields.is_empty() {
                message.push_str(&format!(" Did you mean {}?", quoted_or_list(&suggested_fields)));
            }
        }
        cx.report_error(GraphQLError::with_spans(message, [field.span]));
        VisitAction::Continue
    }
}

/// For an abstract type, the interfaces and then the object types within
/// it that do define `field_name`. Interfaces shared by more of those
/// object types come first.
fn suggested_type_names<'s>(
    schema: &'s Schema,
    parent_type: &'s GraphQLType,
    field_name: &str,
) -> Vec<&'s str> {
    if !parent_type.is_abstract_type() {
        return vec![];
    }
    let mut object_types = vec![];
    let mut interface_usage: IndexMap<&'s str, usize> = IndexMap::new();
    for possible_type in schema.possible_types(parent_type) {
        if possible_type.field(field_name).is_none() {
            continue;
        }
        object_types.push(possible_type.name());
        for interface in possible_type.interfaces(schema) {
            if interface.field(field_name).is_some() {
                *interface_usage.entry(interface.name()).or_default() += 1;
            }
        }
    }
    let mut interfaces: Vec<(&str, usize)> = interface_usage.into_iter().collect();
    interfaces.sort_by(|(_, a), (_, b)| b.cmp(a));
    interfaces
        .into_iter()
        .map(|(name, _)| name)
        .chain(object_types)
        .collect()
}
