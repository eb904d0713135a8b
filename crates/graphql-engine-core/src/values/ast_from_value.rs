use crate::Value;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::types::scalars;
use graphql_engine_parser::ast;

/// Produces a literal that [`value_from_ast`](crate::values::value_from_ast)
/// would coerce back to `value`, or `None` if `value` cannot be represented
/// as `value_type`.
pub fn ast_from_value(
    value: &Value,
    value_type: &TypeAnnotation,
    schema: &Schema,
) -> Option<ast::Value> {
    if value_type.is_non_null() {
        if value.is_null() {
            return None;
        }
        return ast_from_value(value, &value_type.nullable_type(), schema);
    }

    if value.is_null() {
        return Some(ast::Value::Null(ast::NullValue { span: None }));
    }

    let named = match value_type {
        TypeAnnotation::List(list) => {
            let item_type = list.inner_type();
            let Value::Array(items) = value else {
                return ast_from_value(value, item_type, schema);
            };
            let values = items
                .iter()
                .filter_map(|item| ast_from_value(item, item_type, schema))
                .collect();
            return Some(ast::Value::List(ast::ListValue { values, span: None }));
        },
        TypeAnnotation::Named(named) => schema.type_named(named.name())?,
    };

    let serialized = match named {
        GraphQLType::InputObject(input_object) => {
            let Value::Object(fields) = value else {
                return None;
            };
            let fields = input_object
                .fields()
                .iter()
                .filter_map(|(field_name, field)| {
                    let field_value = ast_from_value(fields.get(field_name)?, &field.value_type, schema)?;
                    Some(ast::ObjectField {
                        name: ast::Name::new(field_name.as_str()),
                        value: field_value,
                        span: None,
                    })
                })
                .collect();
            return Some(ast::Value::Object(ast::ObjectValue { fields, span: None }));
        },
        GraphQLType::Enum(enum_type) => {
            let Value::String(name) = enum_type.serialize(value).ok()? else {
                return None;
            };
            return Some(ast::Value::Enum(ast::EnumValue { value: name, span: None }));
        },
        GraphQLType::Scalar(scalar) => scalar.serialize(value).ok()?,
        _ => return None,
    };

    match serialized {
        Value::Null => Some(ast::Value::Null(ast::NullValue { span: None })),
        Value::Bool(value) => Some(ast::Value::Boolean(ast::BooleanValue { value, span: None })),
        Value::Number(number) => {
            let printed = number.to_string();
            if is_integer_literal(&printed) {
                Some(ast::Value::Int(ast::IntValue { value: printed, span: None }))
            } else {
                Some(ast::Value::Float(ast::FloatValue { value: printed, span: None }))
            }
        },
        Value::String(string) => {
            if named.name() == scalars::ID && is_integer_literal(&string) {
                Some(ast::Value::Int(ast::IntValue { value: string, span: None }))
            } else {
                Some(ast::Value::String(ast::StringValue {
                    value: string,
                    block: false,
                    span: None,
                }))
            }
        },
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty()
        && digits.bytes().all(|byte| byte.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
}
