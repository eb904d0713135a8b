use crate::PathSegment;
use crate::Value;
use crate::Variables;
use crate::execution::ContextValue;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use graphql_engine_parser::ast;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// What a resolver knows about the field it is resolving.
#[derive(Clone, Copy, Debug)]
pub struct ResolveInfo<'a> {
    pub field_name: &'a str,
    /// Every selection of this field merged under one response key.
    pub field_nodes: &'a [&'a ast::Field],
    pub return_type: &'a TypeAnnotation,
    pub parent_type: &'a ObjectType,
    /// Response path of the field, ending with its response key.
    pub path: &'a [PathSegment],
    pub schema: &'a Schema,
    pub fragments: &'a HashMap<String, &'a ast::FragmentDefinition>,
    pub root_value: &'a Value,
    pub operation: &'a ast::OperationDefinition,
    pub variable_values: &'a Variables,
}

/// The inputs of a [`Resolver`](crate::types::Resolver) call.
#[derive(Clone, Copy)]
pub struct ResolveParams<'a> {
    /// The parent object's value.
    pub source: &'a Value,
    /// Coerced argument values, with defaults applied.
    pub args: &'a Variables,
    pub info: &'a ResolveInfo<'a>,
    pub context: Option<&'a ContextValue>,
}

impl<'a> ResolveParams<'a> {
    pub fn arg(&self, name: &str) -> Option<&'a Value> {
        self.args.get(name)
    }

    /// The context value, if one was supplied and it is a `T`.
    pub fn context<T: Any + Send + Sync>(&self) -> Option<&'a T> {
        self.context?.downcast_ref::<T>()
    }

    /// Like [`context()`](Self::context), but shares ownership so the value
    /// can move into the resolver's future.
    pub fn context_arc<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.context.cloned()?.downcast::<T>().ok()
    }
}
