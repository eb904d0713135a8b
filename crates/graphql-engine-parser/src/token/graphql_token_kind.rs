use crate::GraphQLStringParsingError;
use crate::SmallVec;
use std::borrow::Cow;

/// The kind of a lexical token.
///
/// `Name`, `IntValue` and `FloatValue` carry the raw source text of the token.
/// `StringValue` carries the *cooked* value: escape sequences are already
/// resolved and block strings are already dedented. Text borrows from the
/// source when no rewriting was needed.
///
/// `true`, `false` and `null` are lexed as their own kinds so value parsing
/// does not have to re-inspect names; they are still accepted wherever the
/// grammar expects a name.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    Ampersand,
    At,
    Bang,
    Colon,
    CurlyBraceClose,
    CurlyBraceOpen,
    Dollar,
    Ellipsis,
    Equals,
    ParenClose,
    ParenOpen,
    Pipe,
    SquareBracketClose,
    SquareBracketOpen,

    Name(Cow<'src, str>),
    IntValue(Cow<'src, str>),
    FloatValue(Cow<'src, str>),
    StringValue(Cow<'src, str>),
    /// A `"""`-delimited string, already dedented.
    BlockStringValue(Cow<'src, str>),

    True,
    False,
    Null,

    Eof,

    /// A lexing failure. The parser turns the first one it meets into a
    /// fatal [`GraphQLSyntaxError`](crate::GraphQLSyntaxError).
    Error {
        message: String,
        notes: SmallVec<[String; 2]>,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::IntValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn float_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::FloatValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            notes: SmallVec::new(),
        }
    }

    #[inline]
    pub fn error_with_help(
        message: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        let mut notes = SmallVec::new();
        notes.push(help.into());
        GraphQLTokenKind::Error {
            message: message.into(),
            notes,
        }
    }

    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::BlockStringValue(_)
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// Human-readable rendering used in "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        if let Some(punct) = self.as_punctuator_str() {
            return punct.to_string();
        }
        match self {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::FloatValue(s) => s.to_string(),
            GraphQLTokenKind::StringValue(s) => format!("\"{s}\""),
            GraphQLTokenKind::BlockStringValue(s) => format!("\"\"\"{s}\"\"\""),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => {
                format!("tokenization error: {message}")
            },
            _ => unreachable!("punctuators are handled above"),
        }
    }
}

// =============================================================================
// String cooking
// =============================================================================

/// Resolves escape sequences in the content of a single-line string (the
/// text between the quotes).
///
/// Returns a borrowed slice when the content has no escapes.
pub(crate) fn cook_single_line_string(
    content: &str,
) -> Result<Cow<'_, str>, GraphQLStringParsingError> {
    if !content.contains('\\') {
        check_string_characters(content, false)?;
        return Ok(Cow::Borrowed(content));
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('/') => result.push('/'),
                Some('b') => result.push('\u{0008}'),
                Some('f') => result.push('\u{000C}'),
                Some('u') => result.push(parse_unicode_escape(&mut chars)?),
                Some(other) => {
                    return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                        format!("\\{other}"),
                    ));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                        "\\".to_string(),
                    ));
                },
            }
        } else {
            check_string_char(c, false)?;
            result.push(c);
        }
    }

    Ok(Cow::Owned(result))
}

fn parse_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}{c}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}"),
                ));
            },
        }
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(GraphQLStringParsingError::InvalidUnicodeEscape(
            format!("\\u{hex}"),
        ))
}

/// Cooks the content of a block string (the text between the triple quotes):
/// unescapes `\"""`, removes common indentation, and trims leading and
/// trailing blank lines.
pub(crate) fn cook_block_string(
    content: &str,
) -> Result<String, GraphQLStringParsingError> {
    check_string_characters(content, true)?;
    let content = content.replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = content
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\n', '\r']))
        .collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace_len(line);
            (indent < line.len()).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let mut result_lines: Vec<&str> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 || line.len() < common_indent {
            result_lines.push(line);
        } else {
            result_lines.push(&line[common_indent..]);
        }
    }

    while result_lines
        .first()
        .is_some_and(|l| leading_whitespace_len(l) == l.len())
    {
        result_lines.remove(0);
    }
    while result_lines
        .last()
        .is_some_and(|l| leading_whitespace_len(l) == l.len())
    {
        result_lines.pop();
    }

    Ok(result_lines.join("\n"))
}

fn leading_whitespace_len(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn check_string_characters(
    content: &str,
    allow_line_terminators: bool,
) -> Result<(), GraphQLStringParsingError> {
    content
        .chars()
        .try_for_each(|c| check_string_char(c, allow_line_terminators))
}

fn check_string_char(
    c: char,
    allow_line_terminators: bool,
) -> Result<(), GraphQLStringParsingError> {
    let is_allowed = c == '\t'
        || (allow_line_terminators && (c == '\n' || c == '\r'))
        || c >= '\u{0020}';
    if is_allowed {
        Ok(())
    } else {
        Err(GraphQLStringParsingError::InvalidCharacter(format!(
            "U+{:04X}",
            c as u32,
        )))
    }
}
