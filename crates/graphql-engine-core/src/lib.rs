//! Type system, schema, validation and execution for GraphQL.
//!
//! A [`Schema`] is assembled once from [`types`] and shared read-only by any
//! number of concurrent [`validation::validate()`] and
//! [`execution::execute()`] calls. [`type_info::TypeInfo`] tracks the
//! statically known types while a document is walked, and [`values`] holds
//! the coercion rules shared by validation and execution.

mod error;
pub mod execution;
pub mod introspection;
pub mod schema;
mod suggestion_list;
pub mod type_info;
pub mod types;
pub mod validation;
pub mod values;

pub use error::ErrorLocation;
pub use error::FieldError;
pub use error::GraphQLError;
pub use error::PathSegment;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use serde_json::Value;

/// Variable values and coerced argument values, keyed by name.
pub type Variables = serde_json::Map<String, Value>;

#[cfg(test)]
mod tests;
