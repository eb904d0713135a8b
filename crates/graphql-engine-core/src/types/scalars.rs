//! The built-in scalar types every schema can use: `Int`, `Float`,
//! `String`, `Boolean` and `ID`.

use crate::Value;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use graphql_engine_parser::ast;
use std::sync::Arc;
use std::sync::LazyLock;

pub const INT: &str = "Int";
pub const FLOAT: &str = "Float";
pub const STRING: &str = "String";
pub const BOOLEAN: &str = "Boolean";
pub const ID: &str = "ID";

static INT_TYPE: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder(INT)
            .description(
                "The `Int` scalar type represents non-fractional signed whole numeric values. \
                 Int can represent values between -(2^31) and 2^31 - 1.",
            )
            .serialize(serialize_int)
            .parse_value(parse_int_value)
            .parse_literal(parse_int_literal)
            .build_scalar(),
    )
});

static FLOAT_TYPE: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder(FLOAT)
            .description(
                "The `Float` scalar type represents signed double-precision fractional values \
                 as specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754).",
            )
            .serialize(serialize_float)
            .parse_value(parse_float_value)
            .parse_literal(parse_float_literal)
            .build_scalar(),
    )
});

static STRING_TYPE: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder(STRING)
            .description(
                "The `String` scalar type represents textual data, represented as UTF-8 \
                 character sequences. The String type is most often used by GraphQL to \
                 represent free-form human-readable text.",
            )
            .serialize(serialize_string)
            .parse_value(parse_string_value)
            .parse_literal(parse_string_literal)
            .build_scalar(),
    )
});

static BOOLEAN_TYPE: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder(BOOLEAN)
            .description("The `Boolean` scalar type represents `true` or `false`.")
            .serialize(serialize_boolean)
            .parse_value(parse_boolean_value)
            .parse_literal(parse_boolean_literal)
            .build_scalar(),
    )
});

static ID_TYPE: LazyLock<Arc<ScalarType>> = LazyLock::new(|| {
    Arc::new(
        ScalarType::builder(ID)
            .description(
                "The `ID` scalar type represents a unique identifier, often used to refetch \
                 an object or as key for a cache. The ID type appears in a JSON response as a \
                 String; however, it is not intended to be human-readable. When expected as an \
                 input type, any string (such as `\"4\"`) or integer (such as `4`) input value \
                 will be accepted as an ID.",
            )
            .serialize(serialize_id)
            .parse_value(parse_id_value)
            .parse_literal(parse_id_literal)
            .build_scalar(),
    )
});

pub fn int() -> GraphQLType {
    GraphQLType::Scalar(INT_TYPE.clone())
}

pub fn float() -> GraphQLType {
    GraphQLType::Scalar(FLOAT_TYPE.clone())
}

pub fn string() -> GraphQLType {
    GraphQLType::Scalar(STRING_TYPE.clone())
}

pub fn boolean() -> GraphQLType {
    GraphQLType::Scalar(BOOLEAN_TYPE.clone())
}

pub fn id() -> GraphQLType {
    GraphQLType::Scalar(ID_TYPE.clone())
}

/// All built-in scalars, in the order introspection lists them.
pub fn specified_scalars() -> Vec<GraphQLType> {
    vec![string(), int(), float(), boolean(), id()]
}

pub fn is_specified_scalar(name: &str) -> bool {
    matches!(name, INT | FLOAT | STRING | BOOLEAN | ID)
}

fn inspect(value: &Value) -> String {
    value.to_string()
}

fn integral_f64(num: f64) -> Option<f64> {
    (num.is_finite() && num.fract() == 0.0).then_some(num)
}

fn checked_int(num: Option<f64>, original: &Value) -> Result<Value, String> {
    let Some(num) = num.and_then(integral_f64) else {
        return Err(format!("Int cannot represent non-integer value: {}", inspect(original)));
    };
    if num > f64::from(i32::MAX) || num < f64::from(i32::MIN) {
        return Err(format!(
            "Int cannot represent non 32-bit signed integer value: {}",
            inspect(original),
        ));
    }
    Ok(Value::from(num as i32))
}

fn serialize_int(value: &Value) -> Result<Value, String> {
    let num = match value {
        Value::Bool(b) => return Ok(Value::from(i32::from(*b))),
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    checked_int(num, value)
}

fn parse_int_value(value: &Value) -> Result<Value, String> {
    match value {
        Value::Number(n) => checked_int(n.as_f64(), value),
        _ => Err(format!("Int cannot represent non-integer value: {}", inspect(value))),
    }
}

fn parse_int_literal(node: &ast::Value) -> Result<Value, String> {
    match node {
        ast::Value::Int(int) => int
            .as_i64()
            .and_then(|num| i32::try_from(num).ok())
            .map(Value::from)
            .ok_or_else(|| {
                format!("Int cannot represent non 32-bit signed integer value: {}", int.value)
            }),
        _ => Err("Int cannot represent non-integer value".to_string()),
    }
}

fn checked_float(num: Option<f64>, original: &Value) -> Result<Value, String> {
    num.filter(|num| num.is_finite())
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| format!("Float cannot represent non numeric value: {}", inspect(original)))
}

fn serialize_float(value: &Value) -> Result<Value, String> {
    let num = match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    checked_float(num, value)
}

fn parse_float_value(value: &Value) -> Result<Value, String> {
    match value {
        Value::Number(n) => checked_float(n.as_f64(), value),
        _ => Err(format!("Float cannot represent non numeric value: {}", inspect(value))),
    }
}

fn parse_float_literal(node: &ast::Value) -> Result<Value, String> {
    let num = match node {
        ast::Value::Int(int) => int.value.parse::<f64>().ok(),
        ast::Value::Float(float) => float.as_f64(),
        _ => None,
    };
    num.filter(|num| num.is_finite())
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| "Float cannot represent non numeric value".to_string())
}

fn serialize_string(value: &Value) -> Result<Value, String> {
    match value {
        Value::String(_) => Ok(value.clone()),
        Value::Bool(b) => Ok(Value::String(b.to_string())),
        Value::Number(n) => Ok(Value::String(n.to_string())),
        _ => Err(format!("String cannot represent value: {}", inspect(value))),
    }
}

fn parse_string_value(value: &Value) -> Result<Value, String> {
    match value {
        Value::String(_) => Ok(value.clone()),
        _ => Err(format!("String cannot represent a non string value: {}", inspect(value))),
    }
}

fn parse_string_literal(node: &ast::Value) -> Result<Value, String> {
    match node {
        ast::Value::String(string) => Ok(Value::String(string.value.clone())),
        _ => Err("String cannot represent a non string value".to_string()),
    }
}

fn serialize_boolean(value: &Value) -> Result<Value, String> {
    match value {
        Value::Bool(_) => Ok(value.clone()),
        Value::Number(n) if n.as_f64().is_some_and(f64::is_finite) => {
            Ok(Value::Bool(n.as_f64() != Some(0.0)))
        },
        _ => Err(format!("Boolean cannot represent a non boolean value: {}", inspect(value))),
    }
}

fn parse_boolean_value(value: &Value) -> Result<Value, String> {
    match value {
        Value::Bool(_) => Ok(value.clone()),
        _ => Err(format!("Boolean cannot represent a non boolean value: {}", inspect(value))),
    }
}

fn parse_boolean_literal(node: &ast::Value) -> Result<Value, String> {
    match node {
        ast::Value::Boolean(boolean) => Ok(Value::Bool(boolean.value)),
        _ => Err("Boolean cannot represent a non boolean value".to_string()),
    }
}

fn integer_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        Value::Number(n) => n
            .as_f64()
            .and_then(integral_f64)
            .map(|num| format!("{num:.0}")),
        _ => None,
    }
}

fn serialize_id(value: &Value) -> Result<Value, String> {
    integer_string(value)
        .map(Value::String)
        .ok_or_else(|| format!("ID cannot represent value: {}", inspect(value)))
}

fn parse_id_value(value: &Value) -> Result<Value, String> {
    integer_string(value)
        .map(Value::String)
        .ok_or_else(|| format!("ID cannot represent value: {}", inspect(value)))
}

fn parse_id_literal(node: &ast::Value) -> Result<Value, String> {
    match node {
        ast::Value::String(string) => Ok(Value::String(string.value.clone())),
        ast::Value::Int(int) => Ok(Value::String(int.value.clone())),
        _ => Err("ID cannot represent a non-string and non-integer value".to_string()),
    }
}
