use crate::token::GraphQLToken;

/// Any iterator of tokens the parser can read from.
///
/// Implementations must end the stream with exactly one
/// [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof) token and
/// report lexing failures as
/// [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error) tokens
/// rather than panicking.
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T
where
    T: Iterator<Item = GraphQLToken<'src>>,
{}
