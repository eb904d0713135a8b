//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that lexes
//! from a `&str` input.
//!
//! Names and numbers borrow directly from the source string; string literals
//! borrow whenever cooking them did not require rewriting.
//!
//! Whitespace, line terminators, commas, comments and a byte-order mark are
//! insignificant and never surface as tokens.
//!
//! # Usage
//!
//! ```rust
//! use graphql_engine_parser::token_source::StrGraphQLTokenSource;
//!
//! let lexer = StrGraphQLTokenSource::new("{ name }");
//! let kinds: Vec<_> = lexer.map(|token| token.kind).collect();
//! assert_eq!(kinds.len(), 4); // `{`, `name`, `}`, end of input
//! ```

use crate::token::cook_block_string;
use crate::token::cook_single_line_string;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::borrow::Cow;

/// Lexes GraphQL tokens from a string slice.
///
/// The stream is restartable: [`StrGraphQLTokenSource::reset()`] moves the
/// cursor to any byte offset and lexing resumes from there.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`, so that a following `\n` does
    /// not count as a second line break.
    last_char_was_cr: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    /// Restarts lexing at `byte_offset`.
    ///
    /// Line and column tracking is recomputed from the start of the source.
    /// An offset inside a multi-byte character resumes at the next character
    /// boundary; an offset past the end resumes at the end.
    pub fn reset(&mut self, byte_offset: usize) {
        self.curr_byte_offset = 0;
        self.curr_line = 0;
        self.curr_col_utf8 = 0;
        self.curr_col_utf16 = 0;
        self.last_char_was_cr = false;
        self.finished = false;
        while self.curr_byte_offset < byte_offset && self.consume().is_some() {}
    }

    /// The position the next token will be lexed from (before skipping any
    /// ignored characters).
    pub fn position(&self) -> SourcePosition {
        self.curr_position()
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `text`, which must contain no line terminators.
    fn consume_within_line(&mut self, text: &str) {
        self.curr_col_utf8 += text.chars().count();
        self.curr_col_utf16 += text.encode_utf16().count();
        self.curr_byte_offset += text.len();
        if !text.is_empty() {
            self.last_char_was_cr = false;
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken {
            kind,
            span: self.make_span(start),
        }
    }

    fn punctuator(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.skip_ignored();

            let start = self.curr_position();

            return match self.peek_char() {
                None => self.make_token(GraphQLTokenKind::Eof, start),

                Some('#') => {
                    self.skip_comment();
                    continue;
                },

                Some('!') => self.punctuator(GraphQLTokenKind::Bang, start),
                Some('$') => self.punctuator(GraphQLTokenKind::Dollar, start),
                Some('&') => self.punctuator(GraphQLTokenKind::Ampersand, start),
                Some('(') => self.punctuator(GraphQLTokenKind::ParenOpen, start),
                Some(')') => self.punctuator(GraphQLTokenKind::ParenClose, start),
                Some(':') => self.punctuator(GraphQLTokenKind::Colon, start),
                Some('=') => self.punctuator(GraphQLTokenKind::Equals, start),
                Some('@') => self.punctuator(GraphQLTokenKind::At, start),
                Some('[') => {
                    self.punctuator(GraphQLTokenKind::SquareBracketOpen, start)
                },
                Some(']') => {
                    self.punctuator(GraphQLTokenKind::SquareBracketClose, start)
                },
                Some('{') => {
                    self.punctuator(GraphQLTokenKind::CurlyBraceOpen, start)
                },
                Some('}') => {
                    self.punctuator(GraphQLTokenKind::CurlyBraceClose, start)
                },
                Some('|') => self.punctuator(GraphQLTokenKind::Pipe, start),

                Some('.') => self.lex_ellipsis(start),
                Some('"') => self.lex_string(start),
                Some(c) if is_name_start(c) => self.lex_name(start),
                Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),
                Some(_) => self.lex_invalid_character(start),
            };
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, line terminators, commas and the byte-order mark.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (not including) the next line terminator.
    fn skip_comment(&mut self) {
        let remaining = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', remaining.as_bytes())
            .unwrap_or(remaining.len());
        self.consume_within_line(&remaining[..len]);
    }

    // =========================================================================
    // Ellipsis
    // =========================================================================

    fn lex_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.consume_within_line("...");
            return self.make_token(GraphQLTokenKind::Ellipsis, start);
        }

        if self.remaining().starts_with("..") {
            self.consume_within_line("..");
            return self.make_token(
                GraphQLTokenKind::error_with_help(
                    "Unexpected `..`",
                    "Add one more `.` to form the spread operator `...`",
                ),
                start,
            );
        }

        self.consume();
        self.make_token(GraphQLTokenKind::error("Unexpected `.`"), start)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes a name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    ///
    /// `true`, `false` and `null` are emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let remaining = self.remaining();
        let len = remaining
            .bytes()
            .position(|b| !is_name_continue(b as char))
            .unwrap_or(remaining.len());
        let name = &remaining[..len];
        self.consume_within_line(name);

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// A number must not be directly followed by `.` or a name character.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
            _ => {
                return self.make_token(
                    GraphQLTokenKind::error("Unexpected `-`"),
                    start,
                );
            },
        }

        if self.peek_char() == Some('.') {
            if !self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                self.consume();
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: expected digit after `.`",
                );
            }
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if let Some('e' | 'E') = self.peek_char() {
            is_float = true;
            self.consume();
            if let Some('+' | '-') = self.peek_char() {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                );
            }
            self.consume_digits();
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch))
        {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: unexpected character after number",
            );
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(num_text)
        } else {
            GraphQLTokenKind::int_value_borrowed(num_text)
        };
        self.make_token(kind, start)
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.consume();
        }
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
    ) -> GraphQLToken<'src> {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric()
                || matches!(ch, '.' | '+' | '-' | '_')
            {
                self.consume();
            } else {
                break;
            }
        }
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        self.make_token(
            GraphQLTokenKind::error(format!("{message}: `{invalid_text}`")),
            start,
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume();
        let content_start = self.curr_byte_offset;

        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return self.make_token(
                        GraphQLTokenKind::error_with_help(
                            "Unterminated string literal",
                            "Single-line strings must close with `\"` before \
                            the end of the line",
                        ),
                        start,
                    );
                },
                Some('"') => break,
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some_and(|ch| ch != '\n' && ch != '\r') {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let content = &self.source[content_start..self.curr_byte_offset];
        self.consume();

        let kind = match cook_single_line_string(content) {
            Ok(value) => GraphQLTokenKind::StringValue(value),
            Err(err) => GraphQLTokenKind::error(err.to_string()),
        };
        self.make_token(kind, start)
    }

    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        self.consume_within_line("\"\"\"");
        let content_start = self.curr_byte_offset;

        loop {
            let remaining = self.remaining();
            if remaining.is_empty() {
                return self.make_token(
                    GraphQLTokenKind::error_with_help(
                        "Unterminated block string",
                        "Add closing `\"\"\"`",
                    ),
                    start,
                );
            }
            if remaining.starts_with("\\\"\"\"") {
                self.consume_within_line("\\\"\"\"");
            } else if remaining.starts_with("\"\"\"") {
                break;
            } else {
                self.consume();
            }
        }

        let content = &self.source[content_start..self.curr_byte_offset];
        self.consume_within_line("\"\"\"");

        let kind = match cook_block_string(content) {
            Ok(value) => GraphQLTokenKind::BlockStringValue(Cow::Owned(value)),
            Err(err) => GraphQLTokenKind::error(err.to_string()),
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let description = match self.consume() {
            Some(ch) => describe_char(ch),
            None => "end of input".to_string(),
        };
        self.make_token(
            GraphQLTokenKind::error(format!("Unexpected character {description}")),
            start,
        )
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters are shown in backticks; invisible ones also get their
/// code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
