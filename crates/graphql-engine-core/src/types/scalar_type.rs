use crate::Value;
use crate::types::GraphQLType;
use crate::values::value_from_ast_untyped;
use graphql_engine_parser::ast;
use std::fmt;
use std::sync::Arc;

/// Converts a runtime value to its wire form (`serialize`) or a wire input
/// to its runtime form (`parse_value`). Errors carry a reason.
pub type ScalarCoercionFn = Arc<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;

/// Converts a constant literal from a document to a runtime value.
pub type ParseLiteralFn = Arc<dyn Fn(&ast::Value) -> Result<Value, String> + Send + Sync>;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars): a leaf
/// type whose coercion rules are supplied by the host.
#[derive(Clone)]
pub struct ScalarType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parse_literal: Option<ParseLiteralFn>,
    pub(super) parse_value: Option<ScalarCoercionFn>,
    pub(super) serialize: Option<ScalarCoercionFn>,
}

impl ScalarType {
    pub fn builder(name: impl Into<String>) -> ScalarTypeBuilder {
        ScalarTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Prepares a resolved value for the response. Without a custom
    /// serializer, the value passes through unchanged.
    pub fn serialize(&self, value: &Value) -> Result<Value, String> {
        match &self.serialize {
            Some(serialize) => serialize(value),
            None => Ok(value.clone()),
        }
    }

    /// Coerces a variable value supplied with the request.
    pub fn parse_value(&self, value: &Value) -> Result<Value, String> {
        match &self.parse_value {
            Some(parse_value) => parse_value(value),
            None => Ok(value.clone()),
        }
    }

    /// Coerces a literal written in the document. Without a custom literal
    /// parser, the literal is converted to a plain value and handed to
    /// [`parse_value`](Self::parse_value).
    pub fn parse_literal(&self, node: &ast::Value) -> Result<Value, String> {
        if let Some(parse_literal) = &self.parse_literal {
            return parse_literal(node);
        }
        let value = value_from_ast_untyped(node, None)
            .ok_or_else(|| format!("{} cannot represent a non-constant value", self.name))?;
        self.parse_value(&value)
    }
}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`ScalarType`].
pub struct ScalarTypeBuilder {
    scalar: ScalarType,
}

impl ScalarTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scalar: ScalarType {
                description: None,
                name: name.into(),
                parse_literal: None,
                parse_value: None,
                serialize: None,
            },
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.scalar.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn serialize(
        mut self,
        serialize: impl Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        self.scalar.serialize = Some(Arc::new(serialize));
        self
    }

    #[must_use]
    pub fn parse_value(
        mut self,
        parse_value: impl Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        self.scalar.parse_value = Some(Arc::new(parse_value));
        self
    }

    #[must_use]
    pub fn parse_literal(
        mut self,
        parse_literal: impl Fn(&ast::Value) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        self.scalar.parse_literal = Some(Arc::new(parse_literal));
        self
    }

    pub fn build_scalar(self) -> ScalarType {
        self.scalar
    }

    pub fn build(self) -> GraphQLType {
        self.scalar.into()
    }
}
