//! A GraphQL engine: parse, validate and execute GraphQL documents against
//! a [`Schema`].
//!
//! [`graphql()`] runs a whole [`GraphQLRequest`] end to end. The stages are
//! also available on their own: [`parse()`], [`validation::validate()`] and
//! [`execution::execute()`].

mod graphql;
mod graphql_request;

pub use graphql::graphql;
pub use graphql::graphql_with;
pub use graphql_engine_core::*;
pub use graphql_engine_parser::GraphQLSyntaxError;
pub use graphql_engine_parser::ParseOptions;
pub use graphql_engine_parser::Source;
pub use graphql_engine_parser::SourceLocation;
pub use graphql_engine_parser::ast;
pub use graphql_engine_parser::parse;
pub use graphql_engine_parser::parse_str;
pub use graphql_engine_parser::printer;
pub use graphql_engine_parser::visitor;
pub use graphql_request::GraphQLRequest;
