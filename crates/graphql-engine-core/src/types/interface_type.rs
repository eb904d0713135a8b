use crate::Value;
use crate::execution::ResolveInfo;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TypeResolverFn;
use crate::types::object_or_interface_type_data::FieldsBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::fmt;
use std::sync::Arc;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::Schema).
pub struct InterfaceType {
    pub(super) data: ObjectOrInterfaceTypeData,
    pub(super) resolve_type: Option<TypeResolverFn>,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    /// A map from field name to [`Field`] for all fields defined on this
    /// [`InterfaceType`], in definition order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }
}

impl InterfaceType {
    pub fn builder(name: impl Into<String>) -> InterfaceTypeBuilder {
        InterfaceTypeBuilder::new(name)
    }

    /// Runs this type's `resolve_type` hook, or returns `None` if it has
    /// none. The hook itself may also decline with `None`.
    pub fn resolve_type(&self, value: &Value, info: &ResolveInfo<'_>) -> Option<String> {
        self.resolve_type.as_ref().and_then(|resolve| resolve(value, info))
    }

    pub fn has_resolve_type(&self) -> bool {
        self.resolve_type.is_some()
    }
}

impl fmt::Debug for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceType")
            .field("data", &self.data)
            .field("has_resolve_type", &self.resolve_type.is_some())
            .finish()
    }
}

/// Assembles an [`InterfaceType`].
pub struct InterfaceTypeBuilder {
    description: Option<String>,
    fields: FieldsBuilder,
    name: String,
    resolve_type: Option<TypeResolverFn>,
}

impl InterfaceTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: FieldsBuilder::default(),
            name: name.into(),
            resolve_type: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn fields_thunk(mut self, fields: impl FnOnce() -> Vec<Field> + Send + 'static) -> Self {
        self.fields.set_lazy(fields);
        self
    }

    /// Sets the hook naming the concrete object type of a resolved value.
    #[must_use]
    pub fn resolve_type(
        mut self,
        resolve_type: impl Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }

    pub fn build(self) -> GraphQLType {
        InterfaceType {
            data: ObjectOrInterfaceTypeData {
                description: self.description,
                fields: self.fields.into_thunk(),
                name: self.name,
            },
            resolve_type: self.resolve_type,
        }
        .into()
    }
}
