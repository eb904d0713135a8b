use crate::Value;
use crate::types::DeprecationState;
use crate::types::GraphQLType;
use graphql_engine_parser::ast;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}

impl EnumType {
    pub fn builder(name: impl Into<String>) -> EnumTypeBuilder {
        EnumTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, in definition order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// Maps an internal value to the name of the enum value carrying it.
    pub fn serialize(&self, value: &Value) -> Result<Value, String> {
        self.values
            .values()
            .find(|enum_value| enum_value.value == *value)
            .map(|enum_value| Value::String(enum_value.name.clone()))
            .ok_or_else(|| format!("Enum \"{}\" cannot represent value: {value}", self.name))
    }

    /// Maps an enum value name supplied as a variable to its internal value.
    pub fn parse_value(&self, value: &Value) -> Result<Value, String> {
        let Value::String(name) = value else {
            return Err(format!("Enum \"{}\" cannot represent non-string value: {value}", self.name));
        };
        self.values
            .get(name)
            .map(|enum_value| enum_value.value.clone())
            .ok_or_else(|| format!("Value \"{name}\" does not exist in \"{}\" enum.", self.name))
    }

    /// Maps an enum literal to its internal value.
    pub fn parse_literal(&self, node: &ast::Value) -> Result<Value, String> {
        let ast::Value::Enum(literal) = node else {
            return Err(format!("Enum \"{}\" cannot represent non-enum value", self.name));
        };
        self.values
            .get(&literal.value)
            .map(|enum_value| enum_value.value.clone())
            .ok_or_else(|| {
                format!("Value \"{}\" does not exist in \"{}\" enum.", literal.value, self.name)
            })
    }
}

/// One value of an [`EnumType`].
///
/// `value` is the internal representation resolvers produce and arguments
/// receive; it defaults to the value's name as a string.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub value: Value,
    pub deprecation_reason: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: Value::String(name.clone()),
            name,
            description: None,
            deprecation_reason: None,
        }
    }

    #[must_use]
    pub fn value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.deprecation_reason).into()
    }
}

/// Assembles an [`EnumType`].
#[derive(Debug)]
pub struct EnumTypeBuilder {
    enum_type: EnumType,
}

impl EnumTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            enum_type: EnumType {
                description: None,
                name: name.into(),
                values: IndexMap::new(),
            },
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.enum_type.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: EnumValue) -> Self {
        self.enum_type.values.insert(value.name.clone(), value);
        self
    }

    /// Adds a value per name, each represented internally by its name.
    #[must_use]
    pub fn values<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        for name in names {
            let value = EnumValue::new(name);
            self.enum_type.values.insert(value.name.clone(), value);
        }
        self
    }

    pub fn build(self) -> GraphQLType {
        self.enum_type.into()
    }
}
