use crate::FieldError;
use crate::Value;
use crate::execution::ResolveParams;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use futures::FutureExt;
use futures::future;
use futures::future::BoxFuture;
use indexmap::IndexMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Produces a field's value from its parent value, arguments and context.
///
/// The returned future may not borrow from the [`ResolveParams`]; clone
/// whatever it needs before the `async` block.
pub type Resolver =
    Arc<dyn Fn(ResolveParams<'_>) -> BoxFuture<'static, Result<Value, FieldError>> + Send + Sync>;

/// A field of an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
///
/// A field without a resolver reads the property of the same name from its
/// parent value.
#[derive(Clone)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub field_type: TypeAnnotation,
    pub arguments: IndexMap<String, InputValue>,
    pub deprecation_reason: Option<String>,
    pub resolver: Option<Resolver>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            description: None,
            field_type,
            arguments: IndexMap::new(),
            deprecation_reason: None,
            resolver: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn argument(mut self, argument: InputValue) -> Self {
        self.arguments.insert(argument.name.clone(), argument);
        self
    }

    #[must_use]
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Sets an asynchronous resolver.
    #[must_use]
    pub fn resolve<F, Fut>(mut self, resolver: F) -> Self
    where
        F: Fn(ResolveParams<'_>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, FieldError>> + Send + 'static,
    {
        let resolver: Resolver = Arc::new(move |params: ResolveParams<'_>| resolver(params).boxed());
        self.resolver = Some(resolver);
        self
    }

    /// Sets a resolver that computes its value immediately.
    #[must_use]
    pub fn resolve_sync<F>(mut self, resolver: F) -> Self
    where
        F: Fn(ResolveParams<'_>) -> Result<Value, FieldError> + Send + Sync + 'static,
    {
        let resolver: Resolver =
            Arc::new(move |params: ResolveParams<'_>| future::ready(resolver(params)).boxed());
        self.resolver = Some(resolver);
        self
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.deprecation_reason).into()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("field_type", &self.field_type)
            .field("arguments", &self.arguments)
            .field("deprecation_reason", &self.deprecation_reason)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

/// A field argument, directive argument or input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub value_type: TypeAnnotation,
    pub default_value: Option<Value>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, value_type: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            description: None,
            value_type,
            default_value: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Non-null with no default: a value must be supplied.
    pub fn is_required(&self) -> bool {
        self.value_type.is_non_null() && self.default_value.is_none()
    }
}
