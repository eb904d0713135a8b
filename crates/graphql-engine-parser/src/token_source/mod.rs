//! Token sources: producers of [`GraphQLToken`](crate::token::GraphQLToken)s
//! that the parser consumes through a
//! [`GraphQLTokenStream`](crate::GraphQLTokenStream).

mod graphql_token_source;
mod str_graphql_token_source;

pub use graphql_token_source::GraphQLTokenSource;
pub use str_graphql_token_source::StrGraphQLTokenSource;
