use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::Thunk;
use indexmap::IndexMap;

type LazyInputFields = Box<dyn FnOnce() -> Vec<InputValue> + Send>;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::Schema).
#[derive(Debug)]
pub struct InputObjectType {
    pub(super) description: Option<String>,
    pub(super) fields: Thunk<IndexMap<String, InputValue>>,
    pub(super) name: String,
}

impl InputObjectType {
    pub fn builder(name: impl Into<String>) -> InputObjectTypeBuilder {
        InputObjectTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A map from field name to [`InputValue`], in definition order.
    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        self.fields.get()
    }

    pub fn field(&self, name: &str) -> Option<&InputValue> {
        self.fields().get(name)
    }
}

/// Assembles an [`InputObjectType`].
pub struct InputObjectTypeBuilder {
    description: Option<String>,
    fields: Vec<InputValue>,
    lazy_fields: Option<LazyInputFields>,
    name: String,
}

impl InputObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: vec![],
            lazy_fields: None,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: InputValue) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn fields_thunk(
        mut self,
        fields: impl FnOnce() -> Vec<InputValue> + Send + 'static,
    ) -> Self {
        self.lazy_fields = Some(Box::new(fields));
        self
    }

    pub fn build(self) -> GraphQLType {
        let eager = self.fields;
        let fields = match self.lazy_fields {
            None => Thunk::ready(into_map(eager)),
            Some(lazy) => Thunk::lazy(move || {
                let mut fields = eager;
                fields.extend(lazy());
                into_map(fields)
            }),
        };
        InputObjectType {
            description: self.description,
            fields,
            name: self.name,
        }
        .into()
    }
}

fn into_map(fields: Vec<InputValue>) -> IndexMap<String, InputValue> {
    fields.into_iter().map(|field| (field.name.clone(), field)).collect()
}
