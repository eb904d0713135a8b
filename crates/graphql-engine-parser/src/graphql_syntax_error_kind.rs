/// Categorizes a [`GraphQLSyntaxError`](crate::GraphQLSyntaxError).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphQLSyntaxErrorKind {
    /// A token other than the one the grammar requires was found.
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// Input ended where the grammar requires more tokens.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer rejected the input (bad character, string, or number).
    #[error("lexer error")]
    LexerError,

    /// A structurally valid token sequence that the grammar still rejects,
    /// e.g. a fragment named `on` or nesting that is too deep.
    #[error("invalid syntax")]
    InvalidSyntax,
}
