//! Tokens produced by a [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource).

mod graphql_token;
mod graphql_token_kind;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
pub(crate) use graphql_token_kind::cook_block_string;
pub(crate) use graphql_token_kind::cook_single_line_string;
