use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::Thunk;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Debug)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) fields: Thunk<IndexMap<String, Field>>,
    pub(super) name: String,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get().get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

type LazyFields = Box<dyn FnOnce() -> Vec<Field> + Send>;

/// The field-collecting half of the object and interface builders.
#[derive(Default)]
pub(super) struct FieldsBuilder {
    eager: Vec<Field>,
    lazy: Option<LazyFields>,
}

impl FieldsBuilder {
    pub(super) fn push(&mut self, field: Field) {
        self.eager.push(field);
    }

    pub(super) fn set_lazy(&mut self, fields: impl FnOnce() -> Vec<Field> + Send + 'static) {
        self.lazy = Some(Box::new(fields));
    }

    /// Eager fields come first, followed by those the thunk produces.
    pub(super) fn into_thunk(self) -> Thunk<IndexMap<String, Field>> {
        let Self { eager, lazy } = self;
        let collect = |fields: Vec<Field>| -> IndexMap<String, Field> {
            fields.into_iter().map(|field| (field.name.clone(), field)).collect()
        };
        match lazy {
            None => Thunk::ready(collect(eager)),
            Some(lazy) => Thunk::lazy(move || {
                let mut fields = eager;
                fields.extend(lazy());
                collect(fields)
            }),
        }
    }
}
