use crate::Value;
use crate::Variables;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use graphql_engine_parser::ast;

/// Coerces a literal from a document to a runtime value of type
/// `value_type`.
///
/// Variables are looked up in `variables`, which must already hold coerced
/// values. Returns `None` when the literal is not valid for the type, which
/// includes referencing a variable that was not provided. An explicit
/// `null` literal becomes `Some(Value::Null)`.
pub fn value_from_ast(
    node: &ast::Value,
    value_type: &TypeAnnotation,
    schema: &Schema,
    variables: Option<&Variables>,
) -> Option<Value> {
    if let ast::Value::Variable(variable) = node {
        let value = variables?.get(variable.name.as_str())?;
        if value.is_null() && value_type.is_non_null() {
            return None;
        }
        return Some(value.clone());
    }

    if value_type.is_non_null() {
        if node.is_null() {
            return None;
        }
        return value_from_ast(node, &value_type.nullable_type(), schema, variables);
    }

    if node.is_null() {
        return Some(Value::Null);
    }

    let named = match value_type {
        TypeAnnotation::List(list) => {
            let item_type = list.inner_type();
            let ast::Value::List(items) = node else {
                return value_from_ast(node, item_type, schema, variables).map(|item| vec![item].into());
            };
            let mut coerced = Vec::with_capacity(items.values.len());
            for item in &items.values {
                if is_missing_variable(item, variables) {
                    if item_type.is_non_null() {
                        return None;
                    }
                    coerced.push(Value::Null);
                } else {
                    coerced.push(value_from_ast(item, item_type, schema, variables)?);
                }
            }
            return Some(Value::Array(coerced));
        },
        TypeAnnotation::Named(named) => schema.type_named(named.name())?,
    };

    match named {
        GraphQLType::InputObject(input_object) => {
            let ast::Value::Object(object) = node else {
                return None;
            };
            let mut coerced = Variables::new();
            for (field_name, field) in input_object.fields() {
                let field_node = object.field(field_name);
                match field_node {
                    Some(field_node) if !is_missing_variable(&field_node.value, variables) => {
                        let value = value_from_ast(&field_node.value, &field.value_type, schema, variables)?;
                        coerced.insert(field_name.clone(), value);
                    },
                    _ => {
                        if let Some(default_value) = &field.default_value {
                            coerced.insert(field_name.clone(), default_value.clone());
                        } else if field.value_type.is_non_null() {
                            return None;
                        }
                    },
                }
            }
            Some(Value::Object(coerced))
        },
        GraphQLType::Enum(enum_type) => enum_type.parse_literal(node).ok(),
        GraphQLType::Scalar(scalar) => scalar.parse_literal(node).ok(),
        _ => None,
    }
}

fn is_missing_variable(node: &ast::Value, variables: Option<&Variables>) -> bool {
    match node {
        ast::Value::Variable(variable) => {
            variables.is_none_or(|variables| !variables.contains_key(variable.name.as_str()))
        },
        _ => false,
    }
}

/// Converts a literal to a plain value without any type information. Enum
/// literals become strings. Returns `None` for a variable that
/// `variables` does not provide.
pub fn value_from_ast_untyped(node: &ast::Value, variables: Option<&Variables>) -> Option<Value> {
    match node {
        ast::Value::Null(_) => Some(Value::Null),
        ast::Value::Int(int) => match int.as_i64() {
            Some(num) => Some(Value::from(num)),
            None => int.value.parse::<f64>().ok().map(Value::from),
        },
        ast::Value::Float(float) => float.as_f64().map(Value::from),
        ast::Value::String(string) => Some(Value::String(string.value.clone())),
        ast::Value::Boolean(boolean) => Some(Value::Bool(boolean.value)),
        ast::Value::Enum(enum_value) => Some(Value::String(enum_value.value.clone())),
        ast::Value::List(list) => Some(Value::Array(
            list.values
                .iter()
                .map(|item| value_from_ast_untyped(item, variables).unwrap_or(Value::Null))
                .collect(),
        )),
        ast::Value::Object(object) => Some(Value::Object(
            object
                .fields
                .iter()
                .filter_map(|field| {
                    let value = value_from_ast_untyped(&field.value, variables)?;
                    Some((field.name.value.clone(), value))
                })
                .collect(),
        )),
        ast::Value::Variable(variable) => variables?.get(variable.name.as_str()).cloned(),
    }
}
