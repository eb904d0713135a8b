use crate::ast::Name;
use crate::ast::Variable;
use crate::GraphQLSourceSpan;

/// A literal or variable value as written in a document.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    pub fn span(&self) -> Option<GraphQLSourceSpan> {
        match self {
            Value::Variable(v) => v.span,
            Value::Int(v) => v.span,
            Value::Float(v) => v.span,
            Value::String(v) => v.span,
            Value::Boolean(v) => v.span,
            Value::Null(v) => v.span,
            Value::Enum(v) => v.span,
            Value::List(v) => v.span,
            Value::Object(v) => v.span,
        }
    }

    /// Whether this value contains no variables at any depth.
    pub fn is_const(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(list) => list.values.iter().all(Value::is_const),
            Value::Object(obj) => obj.fields.iter().all(|f| f.value.is_const()),
            _ => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null(_))
    }
}

/// An integer literal, kept as its source text so range checks can happen
/// wherever the target type is known.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: String,
    pub span: Option<GraphQLSourceSpan>,
}

impl IntValue {
    pub fn as_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }
}

/// A float literal, kept as its source text.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub span: Option<GraphQLSourceSpan>,
}

impl FloatValue {
    pub fn as_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }
}

/// A string literal. `value` holds the cooked contents; `block` records
/// whether the source used `"""` delimiters.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub block: bool,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub span: Option<GraphQLSourceSpan>,
}

impl ObjectValue {
    pub fn field(&self, name: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|f| f.name.value == name)
    }
}

/// One `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub span: Option<GraphQLSourceSpan>,
}
