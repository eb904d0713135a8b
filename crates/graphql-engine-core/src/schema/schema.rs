use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use graphql_engine_parser::ast::OperationKind;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Represents a fully validated and immutable GraphQL schema.
///
/// A `Schema` is built once with [`Schema::builder()`] and then shared
/// read-only (typically behind an [`Arc`]) by any number of concurrent
/// validations and executions.
#[derive(Debug)]
pub struct Schema {
    pub(super) directives: IndexMap<String, Directive>,
    pub(super) mutation_type: Option<Arc<ObjectType>>,
    pub(super) possible_types: HashMap<String, Vec<Arc<ObjectType>>>,
    pub(super) query_type: Arc<ObjectType>,
    pub(super) subscription_type: Option<Arc<ObjectType>>,
    pub(super) types: IndexMap<String, GraphQLType>,
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
};

impl Schema {
    /// Starts a schema whose Query root operation type is `query`.
    pub fn builder(query: impl Into<GraphQLType>) -> SchemaBuilder {
        SchemaBuilder::new(query.into())
    }

    /// All directives this schema accepts, including the built-in `@skip`,
    /// `@include` and `@deprecated`.
    pub fn directives(&self) -> &IndexMap<String, Directive> {
        &self.directives
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&Arc<ObjectType>> {
        self.mutation_type.as_ref()
    }

    /// Returns this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> &Arc<ObjectType> {
        &self.query_type
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one
    /// was defined).
    pub fn subscription_type(&self) -> Option<&Arc<ObjectType>> {
        self.subscription_type.as_ref()
    }

    /// The root operation type an operation of `kind` starts from.
    pub fn root_type(&self, kind: OperationKind) -> Option<&Arc<ObjectType>> {
        match kind {
            OperationKind::Query => Some(&self.query_type),
            OperationKind::Mutation => self.mutation_type.as_ref(),
            OperationKind::Subscription => self.subscription_type.as_ref(),
        }
    }

    /// Every named type reachable from this schema's roots, its explicitly
    /// added types and its directives, including built-in scalars and
    /// introspection types that are in use.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn type_named(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// The object types that may occupy a position of `abstract_type`: a
    /// union's members in declaration order, or an interface's implementing
    /// object types in schema order. Empty for any other type.
    pub fn possible_types(&self, abstract_type: &GraphQLType) -> &[Arc<ObjectType>] {
        if !abstract_type.is_abstract_type() {
            return &[];
        }
        self.possible_types
            .get(abstract_type.name())
            .map_or(&[], Vec::as_slice)
    }

    /// Whether the object type named `object_name` may occupy a position of
    /// `abstract_type`.
    pub fn is_possible_type(&self, abstract_type: &GraphQLType, object_name: &str) -> bool {
        self.possible_types(abstract_type)
            .iter()
            .any(|object| object.name() == object_name)
    }
}
