use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::types::scalars;
use graphql_engine_parser::ast;
use graphql_engine_parser::printer::print_value;
use std::collections::HashSet;

/// Checks a literal (or an omitted value, as `None`) against `value_type`
/// and explains each problem found. An empty list means the literal is
/// valid.
///
/// Variables are always accepted here; whether a variable fits its
/// position is a separate check.
pub fn is_valid_literal_value(
    value_type: &TypeAnnotation,
    node: Option<&ast::Value>,
    schema: &Schema,
) -> Vec<String> {
    if value_type.is_non_null() {
        return match node {
            None | Some(ast::Value::Null(_)) => {
                vec![format!("Expected \"{value_type}\", found null.")]
            },
            Some(_) => is_valid_literal_value(&value_type.nullable_type(), node, schema),
        };
    }

    let Some(node) = node else {
        return vec![];
    };
    if matches!(node, ast::Value::Null(_) | ast::Value::Variable(_)) {
        return vec![];
    }

    let named = match value_type {
        TypeAnnotation::List(list) => {
            let item_type = list.inner_type();
            let ast::Value::List(items) = node else {
                return is_valid_literal_value(item_type, Some(node), schema);
            };
            return items
                .values
                .iter()
                .enumerate()
                .flat_map(|(index, item)| {
                    is_valid_literal_value(item_type, Some(item), schema)
                        .into_iter()
                        .map(move |error| format!("In element #{index}: {error}"))
                })
                .collect();
        },
        TypeAnnotation::Named(named) => match schema.type_named(named.name()) {
            Some(named) => named,
            None => return vec![],
        },
    };

    match named {
        GraphQLType::InputObject(input_object) => {
            let ast::Value::Object(object) = node else {
                return vec![format!("Expected \"{}\", found not an object.", input_object.name())];
            };
            let mut errors = vec![];
            let mut seen = HashSet::new();
            for field_node in &object.fields {
                let name = field_node.name.as_str();
                if seen.insert(name) && input_object.field(name).is_none() {
                    errors.push(format!("In field \"{name}\": Unknown field."));
                }
            }
            for (field_name, field) in input_object.fields() {
                let field_value = object.field(field_name).map(|field_node| &field_node.value);
                errors.extend(
                    is_valid_literal_value(&field.value_type, field_value, schema)
                        .into_iter()
                        .map(|error| format!("In field \"{field_name}\": {error}")),
                );
            }
            errors
        },
        GraphQLType::Enum(enum_type) => match enum_type.parse_literal(node) {
            Ok(_) => vec![],
            Err(_) => vec![format!(
                "Expected type \"{}\", found {}.",
                enum_type.name(),
                print_value(node),
            )],
        },
        GraphQLType::Scalar(scalar) => match scalar.parse_literal(node) {
            Ok(_) => vec![],
            Err(_) if scalars::is_specified_scalar(scalar.name()) => vec![format!(
                "Expected type \"{}\", found {}.",
                scalar.name(),
                print_value(node),
            )],
            Err(reason) => vec![format!(
                "Expected type \"{}\", found {}; {reason}",
                scalar.name(),
                print_value(node),
            )],
        },
        _ => vec![],
    }
}
