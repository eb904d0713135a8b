use crate::token::GraphQLTokenKind;
use crate::GraphQLSourceSpan;

/// A single lexical token along with the span of source text it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub span: GraphQLSourceSpan,
}
