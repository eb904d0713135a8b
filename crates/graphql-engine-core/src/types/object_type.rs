use crate::Value;
use crate::execution::ResolveInfo;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::object_or_interface_type_data::FieldsBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::fmt;
use std::sync::Arc;

/// Decides whether a resolved value belongs to an object type.
pub type IsTypeOfFn = Arc<dyn Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync>;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`].
pub struct ObjectType {
    pub(super) data: ObjectOrInterfaceTypeData,
    pub(super) interfaces: Vec<String>,
    pub(super) is_type_of: Option<IsTypeOfFn>,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The description of this [`ObjectType`], if one was given.
    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    /// A map from field name to [`Field`] for all fields defined on this
    /// [`ObjectType`], in definition order.
    ///
    /// The first call resolves the type's field thunk, if it has one.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }
}

impl ObjectType {
    pub fn builder(name: impl Into<String>) -> ObjectTypeBuilder {
        ObjectTypeBuilder::new(name)
    }

    /// Names of the interfaces this type declares, in declaration order.
    pub fn interface_names(&self) -> &[String] {
        &self.interfaces
    }

    /// The declared interfaces that `schema` defines as interface types.
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|name| schema.type_named(name)?.as_interface())
            .collect()
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces.iter().any(|name| name == interface_name)
    }

    pub fn has_is_type_of(&self) -> bool {
        self.is_type_of.is_some()
    }

    /// Runs this type's `is_type_of` check, or returns `None` if it has none.
    pub fn is_type_of(&self, value: &Value, info: &ResolveInfo<'_>) -> Option<bool> {
        self.is_type_of.as_ref().map(|is_type_of| is_type_of(value, info))
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("data", &self.data)
            .field("interfaces", &self.interfaces)
            .field("has_is_type_of", &self.is_type_of.is_some())
            .finish()
    }
}

/// Assembles an [`ObjectType`].
pub struct ObjectTypeBuilder {
    description: Option<String>,
    fields: FieldsBuilder,
    interfaces: Vec<String>,
    is_type_of: Option<IsTypeOfFn>,
    name: String,
}

impl ObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: FieldsBuilder::default(),
            interfaces: vec![],
            is_type_of: None,
            name: name.into(),
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

    /// Defers building (some of) the fields until they are first read.
    #[must_use]
    pub fn fields_thunk(mut self, fields: impl FnOnce() -> Vec<Field> + Send + 'static) -> Self {
        self.fields.set_lazy(fields);
        self
    }

    #[must_use]
    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    #[must_use]
    pub fn is_type_of(
        mut self,
        is_type_of: impl Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_type_of = Some(Arc::new(is_type_of));
        self
    }

    pub fn build_object(self) -> ObjectType {
        ObjectType {
            data: ObjectOrInterfaceTypeData {
                description: self.description,
                fields: self.fields.into_thunk(),
                name: self.name,
            },
            interfaces: self.interfaces,
            is_type_of: self.is_type_of,
        }
    }

    pub fn build(self) -> GraphQLType {
        self.build_object().into()
    }
}
