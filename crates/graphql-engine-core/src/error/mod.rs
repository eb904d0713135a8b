mod field_error;
mod graphql_error;

pub use field_error::FieldError;
pub use graphql_error::ErrorLocation;
pub use graphql_error::GraphQLError;
pub use graphql_error::PathSegment;
