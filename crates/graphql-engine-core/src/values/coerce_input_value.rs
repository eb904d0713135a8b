use crate::PathSegment;
use crate::Value;
use crate::Variables;
use crate::schema::Schema;
use crate::suggestion_list::quoted_or_list;
use crate::suggestion_list::suggestion_list;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// Coerces a value supplied with a request (e.g. a variable) to
/// `value_type`.
///
/// Every problem found is reported, not just the first; each reason names
/// the offending position, e.g. `Expected type Int at value.a[1]; ...`.
pub fn coerce_input_value(
    value: &Value,
    value_type: &TypeAnnotation,
    schema: &Schema,
) -> Result<Value, Vec<String>> {
    let mut reasons = vec![];
    let mut path = vec![];
    let coerced = coerce(value, value_type, schema, &mut path, &mut reasons);
    if reasons.is_empty() {
        Ok(coerced)
    } else {
        Err(reasons)
    }
}

fn coerce(
    value: &Value,
    value_type: &TypeAnnotation,
    schema: &Schema,
    path: &mut Vec<PathSegment>,
    reasons: &mut Vec<String>,
) -> Value {
    if value_type.is_non_null() {
        if value.is_null() {
            reasons.push(reason(
                format!("Expected non-nullable type {value_type} not to be null"),
                path,
                None,
            ));
            return Value::Null;
        }
        return coerce(value, &value_type.nullable_type(), schema, path, reasons);
    }

    if value.is_null() {
        return Value::Null;
    }

    let named = match value_type {
        TypeAnnotation::List(list) => {
            let item_type = list.inner_type();
            let Value::Array(items) = value else {
                return Value::Array(vec![coerce(value, item_type, schema, path, reasons)]);
            };
            let mut coerced = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                path.push(PathSegment::Index(index));
                coerced.push(coerce(item, item_type, schema, path, reasons));
                path.pop();
            }
            return Value::Array(coerced);
        },
        TypeAnnotation::Named(named) => match schema.type_named(named.name()) {
            Some(named) => named,
            None => {
                reasons.push(reason(format!("Unknown type {}", named.name()), path, None));
                return Value::Null;
            },
        },
    };

    match named {
        GraphQLType::Scalar(scalar) => scalar.parse_value(value).unwrap_or_else(|error| {
            reasons.push(reason(format!("Expected type {}", scalar.name()), path, Some(error)));
            Value::Null
        }),
        GraphQLType::Enum(enum_type) => enum_type.parse_value(value).unwrap_or_else(|error| {
            let suggestion = value.as_str().and_then(|name| {
                let suggestions =
                    suggestion_list(name, enum_type.values().keys().map(String::as_str));
                (!suggestions.is_empty())
                    .then(|| format!("did you mean {}?", quoted_or_list(&suggestions)))
            });
            let detail = suggestion.unwrap_or(error);
            reasons.push(reason(format!("Expected type {}", enum_type.name()), path, Some(detail)));
            Value::Null
        }),
        GraphQLType::InputObject(input_object) => {
            let Value::Object(fields) = value else {
                reasons.push(reason(
                    format!("Expected type {} to be an object", input_object.name()),
                    path,
                    None,
                ));
                return Value::Null;
            };
            let mut coerced = Variables::new();
            for (field_name, field) in input_object.fields() {
                match fields.get(field_name) {
                    Some(field_value) => {
                        path.push(PathSegment::Key(field_name.clone()));
                        let value = coerce(field_value, &field.value_type, schema, path, reasons);
                        path.pop();
                        coerced.insert(field_name.clone(), value);
                    },
                    None => {
                        if let Some(default_value) = &field.default_value {
                            coerced.insert(field_name.clone(), default_value.clone());
                        } else if field.value_type.is_non_null() {
                            path.push(PathSegment::Key(field_name.clone()));
                            reasons.push(format!(
                                "Field {} of required type {} was not provided.",
                                print_path(path),
                                field.value_type,
                            ));
                            path.pop();
                        }
                    },
                }
            }
            for field_name in fields.keys() {
                if input_object.field(field_name).is_some() {
                    continue;
                }
                let suggestions =
                    suggestion_list(field_name, input_object.fields().keys().map(String::as_str));
                let detail = (!suggestions.is_empty())
                    .then(|| format!("did you mean {}?", quoted_or_list(&suggestions)));
                reasons.push(reason(
                    format!(
                        "Field \"{field_name}\" is not defined by type {}",
                        input_object.name(),
                    ),
                    path,
                    detail,
                ));
            }
            Value::Object(coerced)
        },
        _ => {
            reasons.push(reason(format!("Expected input type, found {}", named.name()), path, None));
            Value::Null
        },
    }
}

fn reason(message: String, path: &[PathSegment], detail: Option<String>) -> String {
    let at = if path.is_empty() {
        String::new()
    } else {
        format!(" at {}", print_path(path))
    };
    match detail {
        Some(detail) => format!("{message}{at}; {detail}"),
        None => format!("{message}{at}."),
    }
}

fn print_path(path: &[PathSegment]) -> String {
    let mut printed = "value".to_string();
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                printed.push('.');
                printed.push_str(key);
            },
            PathSegment::Index(index) => printed.push_str(&format!("[{index}]")),
        }
    }
    printed
}
