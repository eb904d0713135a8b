use crate::Value;
use crate::Variables;
use crate::schema::Schema;
use graphql_engine_parser::ast;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Per-request state handed to every resolver, such as a database handle
/// or the authenticated user. Resolvers recover the concrete type with
/// [`ResolveParams::context()`](crate::execution::ResolveParams::context).
pub type ContextValue = Arc<dyn Any + Send + Sync>;

/// The inputs of one [`execute()`](crate::execution::execute) call.
pub struct ExecutionArgs<'a> {
    pub schema: &'a Schema,
    pub document: &'a ast::Document,
    pub root_value: Value,
    pub context_value: Option<ContextValue>,
    pub variable_values: Variables,
    pub operation_name: Option<String>,
}

impl<'a> ExecutionArgs<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        Self {
            schema,
            document,
            root_value: Value::Null,
            context_value: None,
            variable_values: Variables::new(),
            operation_name: None,
        }
    }

    /// The value the root operation type's resolvers receive as their
    /// source.
    #[must_use]
    pub fn root_value(mut self, root_value: Value) -> Self {
        self.root_value = root_value;
        self
    }

    #[must_use]
    pub fn context_value<T: Any + Send + Sync>(mut self, context_value: T) -> Self {
        self.context_value = Some(Arc::new(context_value));
        self
    }

    #[must_use]
    pub fn context_arc(mut self, context_value: ContextValue) -> Self {
        self.context_value = Some(context_value);
        self
    }

    /// Raw variable values, as supplied with the request.
    #[must_use]
    pub fn variable_values(mut self, variable_values: Variables) -> Self {
        self.variable_values = variable_values;
        self
    }

    /// Required when the document defines more than one operation.
    #[must_use]
    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }
}

impl fmt::Debug for ExecutionArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionArgs")
            .field("root_value", &self.root_value)
            .field("has_context_value", &self.context_value.is_some())
            .field("variable_values", &self.variable_values)
            .field("operation_name", &self.operation_name)
            .finish_non_exhaustive()
    }
}
