use crate::Value;
use crate::execution::ResolveInfo;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::Thunk;
use std::fmt;
use std::sync::Arc;

/// Names the concrete object type of a value resolved for an abstract type.
pub type TypeResolverFn = Arc<dyn Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync>;

type LazyMembers = Box<dyn FnOnce() -> Vec<String> + Send>;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`].
pub struct UnionType {
    pub(super) description: Option<String>,
    pub(super) members: Thunk<Vec<String>>,
    pub(super) name: String,
    pub(super) resolve_type: Option<TypeResolverFn>,
}

impl UnionType {
    pub fn builder(name: impl Into<String>) -> UnionTypeBuilder {
        UnionTypeBuilder::new(name)
    }

    /// The description of this [`UnionType`], if one was given.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// An ordered list of the names of each member type of this union.
    ///
    /// The order matches the order in which members were declared. The first
    /// call resolves the member thunk, if there is one.
    pub fn member_type_names(&self) -> &[String] {
        self.members.get()
    }

    /// The member types `schema` defines as object types, in declaration
    /// order.
    pub fn member_types<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema Arc<ObjectType>> {
        self.member_type_names()
            .iter()
            .filter_map(|name| schema.type_named(name)?.as_object_arc())
            .collect()
    }

    /// Runs this type's `resolve_type` hook, or returns `None` if it has
    /// none.
    pub fn resolve_type(&self, value: &Value, info: &ResolveInfo<'_>) -> Option<String> {
        self.resolve_type.as_ref().and_then(|resolve| resolve(value, info))
    }

    pub fn has_resolve_type(&self) -> bool {
        self.resolve_type.is_some()
    }
}

impl fmt::Debug for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("members", &self.members)
            .field("has_resolve_type", &self.resolve_type.is_some())
            .finish()
    }
}

/// Assembles a [`UnionType`].
pub struct UnionTypeBuilder {
    description: Option<String>,
    lazy_members: Option<LazyMembers>,
    members: Vec<String>,
    name: String,
    resolve_type: Option<TypeResolverFn>,
}

impl UnionTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            lazy_members: None,
            members: vec![],
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
    pub fn member(mut self, type_name: impl Into<String>) -> Self {
        self.members.push(type_name.into());
        self
    }

    /// Defers listing (some of) the members until they are first read.
    #[must_use]
    pub fn members_thunk(mut self, members: impl FnOnce() -> Vec<String> + Send + 'static) -> Self {
        self.lazy_members = Some(Box::new(members));
        self
    }

    #[must_use]
    pub fn resolve_type(
        mut self,
        resolve_type: impl Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }

    pub fn build(self) -> GraphQLType {
        let members = match self.lazy_members {
            None => Thunk::ready(self.members),
            Some(lazy) => {
                let mut members = self.members;
                Thunk::lazy(move || {
                    members.extend(lazy());
                    members
                })
            },
        };
        UnionType {
            description: self.description,
            members,
            name: self.name,
            resolve_type: self.resolve_type,
        }
        .into()
    }
}
