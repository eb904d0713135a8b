//! Tests for [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource).

use crate::tests::utils::lex_kinds;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use std::borrow::Cow;

fn single_error_message(text: &str) -> String {
    match &lex_kinds(text)[0] {
        GraphQLTokenKind::Error { message, .. } => message.clone(),
        other => panic!("expected an error token for {text:?}, got {other:?}"),
    }
}

// =============================================================================
// Punctuators, names and ignored tokens
// =============================================================================

/// Verifies every punctuator lexes to its own kind.
#[test]
fn lexes_punctuators() {
    assert_eq!(
        lex_kinds("! $ & ( ) ... : = @ [ ] { | }"),
        vec![
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Ampersand,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Verifies that commas, comments, whitespace and a BOM produce no tokens.
#[test]
fn skips_ignored_tokens() {
    let kinds = lex_kinds("\u{FEFF} a,,b # trailing comment\n\t c");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::name_borrowed("a"),
            GraphQLTokenKind::name_borrowed("b"),
            GraphQLTokenKind::name_borrowed("c"),
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Verifies that `true`, `false` and `null` get their own token kinds.
#[test]
fn lexes_literal_keywords() {
    assert_eq!(
        lex_kinds("true false null nullable"),
        vec![
            GraphQLTokenKind::True,
            GraphQLTokenKind::False,
            GraphQLTokenKind::Null,
            GraphQLTokenKind::name_borrowed("nullable"),
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Verifies that token spans carry 0-based positions and 1-based locations.
#[test]
fn tracks_positions_across_lines() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("{\r\n  hero\n}").collect();
    let hero = &tokens[1];
    assert_eq!(hero.span.start_inclusive.line(), 1);
    assert_eq!(hero.span.start_inclusive.col_utf8(), 2);
    assert_eq!(hero.span.start_inclusive.byte_offset(), 5);
    assert_eq!(hero.span.location().line, 2);
    assert_eq!(hero.span.location().column, 3);
    assert_eq!(tokens[2].span.location().line, 3);
}

/// Verifies that the stream can be restarted from an explicit byte offset.
#[test]
fn reset_restarts_at_offset() {
    let mut lexer = StrGraphQLTokenSource::new("query Q { a }");
    assert_eq!(lexer.next().map(|t| t.kind), Some(GraphQLTokenKind::name_borrowed("query")));
    lexer.reset(8);
    let token = lexer.next().expect("token after reset");
    assert_eq!(token.kind, GraphQLTokenKind::CurlyBraceOpen);
    assert_eq!(token.span.start_inclusive.col_utf8(), 8);

    lexer.reset(0);
    assert_eq!(lexer.next().map(|t| t.kind), Some(GraphQLTokenKind::name_borrowed("query")));
}

/// Verifies that an exhausted stream yields `Eof` once and then ends.
#[test]
fn eof_is_emitted_once() {
    let mut lexer = StrGraphQLTokenSource::new("  ");
    assert_eq!(lexer.next().map(|t| t.kind), Some(GraphQLTokenKind::Eof));
    assert!(lexer.next().is_none());
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies the integer and float grammar, including signs and exponents.
#[test]
fn lexes_numbers() {
    assert_eq!(
        lex_kinds("0 -12 3.25 -0.5 1e10 6.02E+23 4e-2"),
        vec![
            GraphQLTokenKind::int_value_borrowed("0"),
            GraphQLTokenKind::int_value_borrowed("-12"),
            GraphQLTokenKind::float_value_borrowed("3.25"),
            GraphQLTokenKind::float_value_borrowed("-0.5"),
            GraphQLTokenKind::float_value_borrowed("1e10"),
            GraphQLTokenKind::float_value_borrowed("6.02E+23"),
            GraphQLTokenKind::float_value_borrowed("4e-2"),
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Verifies that malformed numbers are rejected with a description.
#[test]
fn rejects_malformed_numbers() {
    assert!(single_error_message("007").contains("leading zeros"));
    assert!(single_error_message("1.").contains("expected digit after `.`"));
    assert!(single_error_message("1.e5").contains("expected digit after `.`"));
    assert!(single_error_message("2e").contains("exponent must have at least one digit"));
    assert!(single_error_message("12abc").contains("unexpected character after number"));
    assert!(single_error_message("1.5.2").contains("unexpected character after number"));
    assert_eq!(single_error_message("-x"), "Unexpected `-`");
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies that escape-free strings borrow and escaped ones are cooked.
#[test]
fn cooks_string_escapes() {
    assert_eq!(
        lex_kinds(r#""plain""#)[0],
        GraphQLTokenKind::StringValue(Cow::Borrowed("plain")),
    );
    assert_eq!(
        lex_kinds(r#""a\nb\t\"q\" \\ \/ é""#)[0],
        GraphQLTokenKind::StringValue(Cow::Owned("a\nb\t\"q\" \\ / é".to_string())),
    );
}

/// Verifies that bad escapes, raw control characters and unterminated
/// strings are rejected.
#[test]
fn rejects_bad_strings() {
    assert!(single_error_message(r#""\q""#).contains("Invalid escape sequence"));
    assert!(single_error_message(r#""\u12G4""#).contains("Invalid unicode escape"));
    assert!(single_error_message("\"a\u{0001}b\"").contains("Invalid character"));
    assert_eq!(single_error_message("\"open"), "Unterminated string literal");
    assert_eq!(single_error_message("\"line\nbreak\""), "Unterminated string literal");
}

/// Verifies block string dedent, blank line trimming and `\"""` unescaping.
#[test]
fn cooks_block_strings() {
    let text = "\"\"\"\n    Hello,\n      World!\n\n    Escaped \\\"\"\" quote\n  \"\"\"";
    assert_eq!(
        lex_kinds(text)[0],
        GraphQLTokenKind::BlockStringValue(Cow::Owned(
            "Hello,\n  World!\n\nEscaped \"\"\" quote".to_string(),
        )),
    );
}

/// Verifies that an unclosed block string is an error.
#[test]
fn rejects_unterminated_block_string() {
    assert_eq!(single_error_message("\"\"\"never closed"), "Unterminated block string");
}

// =============================================================================
// Other errors
// =============================================================================

/// Verifies the diagnostics for stray dots and unknown characters.
#[test]
fn rejects_invalid_characters() {
    assert_eq!(single_error_message("..a"), "Unexpected `..`");
    assert_eq!(single_error_message(".a"), "Unexpected `.`");
    assert_eq!(single_error_message("?"), "Unexpected character `?`");
    assert_eq!(
        single_error_message("\u{0007}"),
        "Unexpected character `\\u{7}` (U+0007)",
    );
}
