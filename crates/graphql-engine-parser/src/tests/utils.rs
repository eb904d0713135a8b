//! Shared helpers for parser tests.

use crate::ast;
use crate::parse_str;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLSyntaxError;

/// Parses `text`, panicking with the syntax error on failure.
pub fn parse_ok(text: &str) -> ast::Document {
    match parse_str(text) {
        Ok(document) => document,
        Err(err) => panic!("failed to parse {text:?}: {err}"),
    }
}

/// Parses `text`, panicking if it unexpectedly succeeds.
pub fn parse_err(text: &str) -> GraphQLSyntaxError {
    match parse_str(text) {
        Ok(document) => panic!("expected {text:?} to fail, parsed {document:?}"),
        Err(err) => err,
    }
}

/// The first operation of a document.
pub fn first_operation(document: &ast::Document) -> &ast::OperationDefinition {
    document.operations().next().expect("document has no operation")
}

/// The `index`th selection of a selection set, which must be a field.
pub fn field_at(selection_set: &ast::SelectionSet, index: usize) -> &ast::Field {
    match &selection_set.selections[index] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field, got {other:?}"),
    }
}

/// The value of the first argument of the first field of the first operation.
pub fn first_arg_value(text: &str) -> ast::Value {
    let document = parse_ok(text);
    let field = field_at(&first_operation(&document).selection_set, 0);
    field.arguments[0].value.clone()
}

/// Lexes `text` and returns just the token kinds, including the final `Eof`.
pub fn lex_kinds(text: &str) -> Vec<GraphQLTokenKind<'_>> {
    StrGraphQLTokenSource::new(text).map(|token| token.kind).collect()
}
