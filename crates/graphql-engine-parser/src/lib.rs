//! Lexing, parsing, traversal and printing for GraphQL documents.
//!
//! Text is tokenized by a restartable
//! [`StrGraphQLTokenSource`](token_source::StrGraphQLTokenSource), parsed by
//! the recursive-descent [`GraphQLParser`] into an owned [`ast::Document`],
//! walked with [`visitor::visit()`], and rendered back to text with
//! [`printer::print()`].
//!
//! ```
//! use graphql_engine_parser::parse_str;
//!
//! let document = parse_str("query Hello { greeting(name: \"world\") }").unwrap();
//! assert_eq!(document.operations().count(), 1);
//! ```

pub mod ast;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_syntax_error;
mod graphql_syntax_error_kind;
mod graphql_token_stream;
mod parse_options;
pub mod printer;
mod source;
mod source_position;
pub mod token;
pub mod token_source;
pub mod visitor;

pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use graphql_syntax_error_kind::GraphQLSyntaxErrorKind;
pub use graphql_token_stream::GraphQLTokenStream;
pub use parse_options::ParseOptions;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source::Source;
pub use source::SourceLocation;
pub use source_position::SourcePosition;

use std::sync::Arc;

/// Parses `source` into a document.
///
/// The first syntax error aborts the parse; it is returned tagged with the
/// source's name.
pub fn parse(
    source: &Source,
    options: ParseOptions,
) -> Result<ast::Document, GraphQLSyntaxError> {
    let mut document = GraphQLParser::with_options(source.body(), options)
        .parse_document()
        .map_err(|err| err.with_source_name(source.name()))?;
    if !options.no_source {
        document.source = Some(Arc::new(source.clone()));
    }
    Ok(document)
}

/// Parses document text with default options.
pub fn parse_str(text: &str) -> Result<ast::Document, GraphQLSyntaxError> {
    parse(&Source::new(text), ParseOptions::default())
}

/// Parses a standalone value literal, e.g. `{ a: [1, 2], b: $var }`.
pub fn parse_value(text: &str) -> Result<ast::Value, GraphQLSyntaxError> {
    GraphQLParser::new(text).parse_value()
}

/// Parses a standalone value literal that may not reference variables, as
/// used for default values.
pub fn parse_const_value(text: &str) -> Result<ast::Value, GraphQLSyntaxError> {
    GraphQLParser::new(text).parse_const_value()
}

/// Parses a standalone type reference, e.g. `[String!]!`.
pub fn parse_type(text: &str) -> Result<ast::TypeAnnotation, GraphQLSyntaxError> {
    GraphQLParser::new(text).parse_type()
}

#[cfg(test)]
mod tests;
