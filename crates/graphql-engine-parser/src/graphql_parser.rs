//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] works over any token source implementing
//! [`GraphQLTokenSource`]. Each grammar rule has a `parse_*` method returning
//! `Result<T, GraphQLSyntaxError>`. Parsing is fatal: the first lexing or
//! grammar error is returned and no partial document is produced.

use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::GraphQLTokenStream;
use crate::ParseOptions;
use crate::SourcePosition;
use std::borrow::Cow;

type ParseResult<T> = Result<T, GraphQLSyntaxError>;

/// What the token at the start of a top-level definition announces.
enum DefinitionStart {
    Operation,
    Fragment,
    TypeSystem,
    Unknown,
}

/// A recursive descent parser over a stream of GraphQL tokens.
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,
    options: ParseOptions,

    /// Current nesting depth of selection sets, values and type annotations.
    recursion_depth: usize,

    /// End of the most recently consumed token. Node spans end here.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over `source` with default [`ParseOptions`].
    ///
    /// # Example
    ///
    /// ```
    /// use graphql_engine_parser::GraphQLParser;
    ///
    /// let document = GraphQLParser::new("{ hello }").parse_document();
    /// assert!(document.is_ok());
    /// ```
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &'src str, options: ParseOptions) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source), options)
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth for selection sets, values and type annotations.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(
        token_source: TTokenSource,
        options: ParseOptions,
    ) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            options,
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parses a complete document. At least one definition is required.
    pub fn parse_document(mut self) -> ParseResult<Document> {
        let start = self.peek()?.span;
        let mut definitions = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::Eof)? {
                if definitions.is_empty() {
                    return Err(self.unexpected("definition"));
                }
                break;
            }
            definitions.push(self.parse_definition()?);
        }
        log::trace!("parsed document with {} definitions", definitions.len());
        Ok(Document {
            definitions,
            span: self.node_span(start),
            source: None,
        })
    }

    /// Parses a lone value literal, which may reference variables.
    pub fn parse_value(mut self) -> ParseResult<Value> {
        let value = self.parse_value_literal(false)?;
        self.expect(&GraphQLTokenKind::Eof)?;
        Ok(value)
    }

    /// Parses a lone value literal that must not reference variables.
    pub fn parse_const_value(mut self) -> ParseResult<Value> {
        let value = self.parse_value_literal(true)?;
        self.expect(&GraphQLTokenKind::Eof)?;
        Ok(value)
    }

    /// Parses a lone type reference such as `[String!]!`.
    pub fn parse_type(mut self) -> ParseResult<TypeAnnotation> {
        let annotation = self.parse_type_annotation()?;
        self.expect(&GraphQLTokenKind::Eof)?;
        Ok(annotation)
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Peeks the next token, turning a lexer error token into a syntax error.
    fn peek(&mut self) -> ParseResult<&GraphQLToken<'src>> {
        let eof_span = self.eof_span();
        match self.token_stream.peek() {
            Some(token) => match &token.kind {
                GraphQLTokenKind::Error { message, notes } => {
                    Err(GraphQLSyntaxError::from_lexer_error(
                        message.clone(),
                        token.span,
                        notes.clone(),
                    ))
                },
                _ => Ok(token),
            },
            None => Err(GraphQLSyntaxError::new(
                "unexpected end of input",
                eof_span,
                GraphQLSyntaxErrorKind::UnexpectedEof {
                    expected: Vec::new(),
                },
            )),
        }
    }

    /// Checks whether the next token has the same variant as `kind`, ignoring
    /// any payload.
    fn peek_is(&mut self, kind: &GraphQLTokenKind<'src>) -> ParseResult<bool> {
        let next = &self.peek()?.kind;
        Ok(std::mem::discriminant(next) == std::mem::discriminant(kind))
    }

    /// Checks whether the next token is the `Name` token `keyword`.
    ///
    /// `true`, `false` and `null` are lexed as their own kinds and never match.
    fn peek_is_keyword(&mut self, keyword: &str) -> ParseResult<bool> {
        Ok(matches!(
            &self.peek()?.kind,
            GraphQLTokenKind::Name(name) if name.as_ref() == keyword
        ))
    }

    /// Checks whether the next token can be read as a name.
    fn peek_is_name(&mut self) -> ParseResult<bool> {
        Ok(matches!(
            self.peek()?.kind,
            GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        ))
    }

    /// The text of the next token when it is a `Name`.
    fn peek_name(&mut self) -> ParseResult<Option<Cow<'src, str>>> {
        Ok(match &self.peek()?.kind {
            GraphQLTokenKind::Name(name) => Some(name.clone()),
            _ => None,
        })
    }

    /// Consumes the next token.
    fn advance(&mut self) -> ParseResult<GraphQLToken<'src>> {
        self.peek()?;
        match self.token_stream.consume() {
            Some(token) => {
                self.last_end_position = Some(token.span.end_exclusive);
                Ok(token)
            },
            None => Err(self.unexpected("token")),
        }
    }

    /// Consumes the next token if it has the same variant as `kind`.
    fn skip_if(&mut self, kind: &GraphQLTokenKind<'src>) -> ParseResult<bool> {
        if self.peek_is(kind)? {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a punctuator (or `Eof`) of the given kind.
    fn expect(
        &mut self,
        kind: &GraphQLTokenKind<'src>,
    ) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_is(kind)? {
            return self.advance();
        }
        let expected = match kind {
            GraphQLTokenKind::Eof => "end of input".to_string(),
            other => format!("`{}`", other.describe()),
        };
        Err(self.unexpected(&expected))
    }

    /// Consumes a name. `true`, `false` and `null` are valid names here.
    fn expect_name(&mut self) -> ParseResult<Name> {
        if !self.peek_is_name()? {
            return Err(self.unexpected("name"));
        }
        let token = self.advance()?;
        let value = match token.kind {
            GraphQLTokenKind::Name(name) => name.into_owned(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            _ => "null".to_string(),
        };
        Ok(Name {
            value,
            span: self.token_span(token.span),
        })
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<GraphQLSourceSpan> {
        if self.peek_is_keyword(keyword)? {
            Ok(self.advance()?.span)
        } else {
            Err(self.unexpected(&format!("`{keyword}`")))
        }
    }

    /// Builds an "expected X, found Y" error describing the next token.
    fn unexpected(&mut self, expected: &str) -> GraphQLSyntaxError {
        let (span, found, at_eof) = match self.peek() {
            Err(err) => return err,
            Ok(token) => (
                token.span,
                token.kind.describe(),
                matches!(token.kind, GraphQLTokenKind::Eof),
            ),
        };
        if at_eof {
            GraphQLSyntaxError::new(
                format!("expected {expected}, found end of input"),
                span,
                GraphQLSyntaxErrorKind::UnexpectedEof {
                    expected: vec![expected.to_string()],
                },
            )
        } else {
            GraphQLSyntaxError::new(
                format!("expected {expected}, found `{found}`"),
                span,
                GraphQLSyntaxErrorKind::UnexpectedToken {
                    expected: vec![expected.to_string()],
                    found,
                },
            )
        }
    }

    fn invalid_syntax(message: impl Into<String>, span: GraphQLSourceSpan) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(message, span, GraphQLSyntaxErrorKind::InvalidSyntax)
    }

    /// A zero-width span at the end of the last consumed token, for errors
    /// at the end of input.
    fn eof_span(&self) -> GraphQLSourceSpan {
        GraphQLSourceSpan::empty_at(
            self.last_end_position.unwrap_or_else(SourcePosition::start),
        )
    }

    /// The span from `start` to the end of the last consumed token, unless
    /// locations are disabled.
    fn node_span(&self, start: GraphQLSourceSpan) -> Option<GraphQLSourceSpan> {
        if self.options.no_location {
            return None;
        }
        let end = self.last_end_position.unwrap_or(start.end_exclusive);
        Some(GraphQLSourceSpan::new(start.start_inclusive, end))
    }

    fn token_span(&self, span: GraphQLSourceSpan) -> Option<GraphQLSourceSpan> {
        (!self.options.no_location).then_some(span)
    }

    fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let span = self.peek()?.span;
            return Err(Self::invalid_syntax("maximum nesting depth exceeded", span));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> ParseResult<Definition> {
        let start = match &self.peek()?.kind {
            GraphQLTokenKind::CurlyBraceOpen => DefinitionStart::Operation,
            GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::BlockStringValue(_) => DefinitionStart::TypeSystem,
            GraphQLTokenKind::Name(name) => match name.as_ref() {
                "query" | "mutation" | "subscription" => DefinitionStart::Operation,
                "fragment" => DefinitionStart::Fragment,
                "schema" | "scalar" | "type" | "interface" | "union" | "enum"
                | "input" | "extend" | "directive" => DefinitionStart::TypeSystem,
                _ => DefinitionStart::Unknown,
            },
            _ => DefinitionStart::Unknown,
        };
        match start {
            DefinitionStart::Operation => {
                Ok(Definition::Operation(self.parse_operation_definition()?))
            },
            DefinitionStart::Fragment => {
                Ok(Definition::Fragment(self.parse_fragment_definition()?))
            },
            DefinitionStart::TypeSystem => self.parse_type_system_definition(),
            DefinitionStart::Unknown => Err(self.unexpected("definition")),
        }
    }

    fn parse_operation_definition(&mut self) -> ParseResult<OperationDefinition> {
        let start = self.peek()?.span;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                span: self.node_span(start),
            });
        }

        let operation = self.parse_operation_kind()?;
        let name = if self.peek_is_name()? {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variable_definitions = if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: self.node_span(start),
        })
    }

    fn parse_operation_kind(&mut self) -> ParseResult<OperationKind> {
        let kind = self
            .peek_name()?
            .and_then(|name| OperationKind::from_keyword(&name));
        match kind {
            Some(kind) => {
                self.advance()?;
                Ok(kind)
            },
            None => Err(self.unexpected("`query`, `mutation` or `subscription`")),
        }
    }

    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<VariableDefinition>> {
        self.expect(&GraphQLTokenKind::ParenOpen)?;
        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_variable_definition()?);
            if self.skip_if(&GraphQLTokenKind::ParenClose)? {
                return Ok(definitions);
            }
        }
    }

    fn parse_variable_definition(&mut self) -> ParseResult<VariableDefinition> {
        let start = self.peek()?.span;
        let variable = self.parse_variable()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_annotation()?;
        let default_value = if self.skip_if(&GraphQLTokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        Ok(VariableDefinition {
            variable,
            var_type,
            default_value,
            span: self.node_span(start),
        })
    }

    fn parse_variable(&mut self) -> ParseResult<Variable> {
        let start = self.expect(&GraphQLTokenKind::Dollar)?.span;
        let name = self.expect_name()?;
        Ok(Variable {
            name,
            span: self.node_span(start),
        })
    }

    fn parse_fragment_definition(&mut self) -> ParseResult<FragmentDefinition> {
        let start = self.expect_keyword("fragment")?;
        if self.peek_is_keyword("on")? {
            let span = self.peek()?.span;
            return Err(Self::invalid_syntax("fragment name cannot be `on`", span));
        }
        let name = self.expect_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.node_span(start),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> ParseResult<SelectionSet> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> ParseResult<SelectionSet> {
        let start = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?.span;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            let span = self.peek()?.span;
            return Err(Self::invalid_syntax("selection set cannot be empty", span));
        }
        let mut selections = Vec::new();
        while !self.skip_if(&GraphQLTokenKind::CurlyBraceClose)? {
            selections.push(self.parse_selection()?);
        }
        Ok(SelectionSet {
            selections,
            span: self.node_span(start),
        })
    }

    fn parse_selection(&mut self) -> ParseResult<Selection> {
        if !self.peek_is(&GraphQLTokenKind::Ellipsis)? {
            return Ok(Selection::Field(self.parse_field()?));
        }

        let start = self.advance()?.span;
        let type_condition = if self.peek_is_keyword("on")? {
            self.advance()?;
            Some(self.parse_named_type()?)
        } else if self.peek_is_name()? {
            let name = self.expect_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                span: self.node_span(start),
            }));
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.node_span(start),
        }))
    }

    fn parse_field(&mut self) -> ParseResult<Field> {
        let start = self.peek()?.span;
        let first = self.expect_name()?;
        let (alias, name) = if self.skip_if(&GraphQLTokenKind::Colon)? {
            (Some(first), self.expect_name()?)
        } else {
            (None, first)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.node_span(start),
        })
    }

    /// Parses `(name: value, ...)` if present.
    fn parse_arguments(&mut self, is_const: bool) -> ParseResult<Vec<Argument>> {
        if !self.skip_if(&GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let mut arguments = Vec::new();
        loop {
            let start = self.peek()?.span;
            let name = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value_literal(is_const)?;
            arguments.push(Argument {
                name,
                value,
                span: self.node_span(start),
            });
            if self.skip_if(&GraphQLTokenKind::ParenClose)? {
                return Ok(arguments);
            }
        }
    }

    fn parse_directives(&mut self, is_const: bool) -> ParseResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At)? {
            let start = self.advance()?.span;
            let name = self.expect_name()?;
            let arguments = self.parse_arguments(is_const)?;
            directives.push(Directive {
                name,
                arguments,
                span: self.node_span(start),
            });
        }
        Ok(directives)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value_literal(&mut self, is_const: bool) -> ParseResult<Value> {
        self.enter_recursion()?;
        let result = self.parse_value_literal_impl(is_const);
        self.exit_recursion();
        result
    }

    fn parse_value_literal_impl(&mut self, is_const: bool) -> ParseResult<Value> {
        let next = self.peek()?.clone();
        match next.kind {
            GraphQLTokenKind::Dollar if is_const => Err(Self::invalid_syntax(
                "unexpected variable in constant value",
                next.span,
            )),
            GraphQLTokenKind::Dollar => Ok(Value::Variable(self.parse_variable()?)),
            GraphQLTokenKind::SquareBracketOpen => self.parse_list_value(is_const),
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object_value(is_const),
            GraphQLTokenKind::IntValue(raw) => {
                self.advance()?;
                Ok(Value::Int(IntValue {
                    value: raw.into_owned(),
                    span: self.token_span(next.span),
                }))
            },
            GraphQLTokenKind::FloatValue(raw) => {
                self.advance()?;
                Ok(Value::Float(FloatValue {
                    value: raw.into_owned(),
                    span: self.token_span(next.span),
                }))
            },
            GraphQLTokenKind::StringValue(value) => {
                self.advance()?;
                Ok(Value::String(StringValue {
                    value: value.into_owned(),
                    block: false,
                    span: self.token_span(next.span),
                }))
            },
            GraphQLTokenKind::BlockStringValue(value) => {
                self.advance()?;
                Ok(Value::String(StringValue {
                    value: value.into_owned(),
                    block: true,
                    span: self.token_span(next.span),
                }))
            },
            GraphQLTokenKind::True => {
                self.advance()?;
                Ok(Value::Boolean(BooleanValue {
                    value: true,
                    span: self.token_span(next.span),
                }))
            },
            GraphQLTokenKind::False => {
                self.advance()?;
                Ok(Value::Boolean(BooleanValue {
                    value: false,
                    span: self.token_span(next.span),
                }))
            },
            GraphQLTokenKind::Null => {
                self.advance()?;
                Ok(Value::Null(NullValue {
                    span: self.token_span(next.span),
                }))
            },
            GraphQLTokenKind::Name(name) => {
                self.advance()?;
                Ok(Value::Enum(EnumValue {
                    value: name.into_owned(),
                    span: self.token_span(next.span),
                }))
            },
            _ => Err(self.unexpected("value")),
        }
    }

    fn parse_list_value(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.expect(&GraphQLTokenKind::SquareBracketOpen)?.span;
        let mut values = Vec::new();
        while !self.skip_if(&GraphQLTokenKind::SquareBracketClose)? {
            values.push(self.parse_value_literal(is_const)?);
        }
        Ok(Value::List(ListValue {
            values,
            span: self.node_span(start),
        }))
    }

    fn parse_object_value(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?.span;
        let mut fields = Vec::new();
        while !self.skip_if(&GraphQLTokenKind::CurlyBraceClose)? {
            let field_start = self.peek()?.span;
            let name = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value_literal(is_const)?;
            fields.push(ObjectField {
                name,
                value,
                span: self.node_span(field_start),
            });
        }
        Ok(Value::Object(ObjectValue {
            fields,
            span: self.node_span(start),
        }))
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    fn parse_type_annotation(&mut self) -> ParseResult<TypeAnnotation> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> ParseResult<TypeAnnotation> {
        let start = self.peek()?.span;
        let nullable = if self.skip_if(&GraphQLTokenKind::SquareBracketOpen)? {
            let of_type = self.parse_type_annotation()?;
            self.expect(&GraphQLTokenKind::SquareBracketClose)?;
            TypeAnnotation::List(Box::new(ListType {
                of_type,
                span: self.node_span(start),
            }))
        } else {
            TypeAnnotation::Named(self.parse_named_type()?)
        };
        if self.skip_if(&GraphQLTokenKind::Bang)? {
            Ok(TypeAnnotation::NonNull(Box::new(NonNullType {
                of_type: nullable,
                span: self.node_span(start),
            })))
        } else {
            Ok(nullable)
        }
    }

    fn parse_named_type(&mut self) -> ParseResult<NamedType> {
        let start = self.peek()?.span;
        let name = self.expect_name()?;
        Ok(NamedType {
            name,
            span: self.node_span(start),
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_type_system_definition(&mut self) -> ParseResult<Definition> {
        let start = self.peek()?.span;
        let description = self.parse_description()?;
        let keyword = self.peek_name()?;
        match keyword.as_deref() {
            Some("schema") if description.is_none() => {
                Ok(Definition::Schema(self.parse_schema_definition(start)?))
            },
            Some("scalar") => Ok(Definition::ScalarType(
                self.parse_scalar_type_definition(start, description)?,
            )),
            Some("type") => Ok(Definition::ObjectType(
                self.parse_object_type_definition(start, description)?,
            )),
            Some("interface") => Ok(Definition::InterfaceType(
                self.parse_interface_type_definition(start, description)?,
            )),
            Some("union") => Ok(Definition::UnionType(
                self.parse_union_type_definition(start, description)?,
            )),
            Some("enum") => Ok(Definition::EnumType(
                self.parse_enum_type_definition(start, description)?,
            )),
            Some("input") => Ok(Definition::InputObjectType(
                self.parse_input_object_type_definition(start, description)?,
            )),
            Some("extend") if description.is_none() => {
                Ok(Definition::TypeExtension(self.parse_type_extension(start)?))
            },
            Some("directive") => Ok(Definition::Directive(
                self.parse_directive_definition(start, description)?,
            )),
            _ if description.is_some() => Err(self.unexpected("type definition")),
            _ => Err(self.unexpected("definition")),
        }
    }

    fn parse_description(&mut self) -> ParseResult<Option<String>> {
        let is_string = matches!(
            self.peek()?.kind,
            GraphQLTokenKind::StringValue(_) | GraphQLTokenKind::BlockStringValue(_)
        );
        if !is_string {
            return Ok(None);
        }
        match self.advance()?.kind {
            GraphQLTokenKind::StringValue(value)
            | GraphQLTokenKind::BlockStringValue(value) => Ok(Some(value.into_owned())),
            _ => Ok(None),
        }
    }

    fn parse_schema_definition(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<SchemaDefinition> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let mut operation_types = Vec::new();
        loop {
            let op_start = self.peek()?.span;
            let operation = self.parse_operation_kind()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let named_type = self.parse_named_type()?;
            operation_types.push(OperationTypeDefinition {
                operation,
                named_type,
                span: self.node_span(op_start),
            });
            if self.skip_if(&GraphQLTokenKind::CurlyBraceClose)? {
                break;
            }
        }
        Ok(SchemaDefinition {
            directives,
            operation_types,
            span: self.node_span(start),
        })
    }

    fn parse_scalar_type_definition(
        &mut self,
        start: GraphQLSourceSpan,
        description: Option<String>,
    ) -> ParseResult<ScalarTypeDefinition> {
        self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
            span: self.node_span(start),
        })
    }

    fn parse_object_type_definition(
        &mut self,
        start: GraphQLSourceSpan,
        description: Option<String>,
    ) -> ParseResult<ObjectTypeDefinition> {
        self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: self.node_span(start),
        })
    }

    /// `implements A & B`, with an optional leading `&`.
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<NamedType>> {
        if !self.peek_is_keyword("implements")? {
            return Ok(Vec::new());
        }
        self.advance()?;
        self.skip_if(&GraphQLTokenKind::Ampersand)?;
        let mut interfaces = vec![self.parse_named_type()?];
        while self.skip_if(&GraphQLTokenKind::Ampersand)? {
            interfaces.push(self.parse_named_type()?);
        }
        Ok(interfaces)
    }

    /// `{ field: Type ... }` if present. A present block must not be empty.
    fn parse_fields_definition(&mut self) -> ParseResult<Vec<FieldDefinition>> {
        if !self.skip_if(&GraphQLTokenKind::CurlyBraceOpen)? {
            return Ok(Vec::new());
        }
        let mut fields = Vec::new();
        loop {
            fields.push(self.parse_field_definition()?);
            if self.skip_if(&GraphQLTokenKind::CurlyBraceClose)? {
                return Ok(fields);
            }
        }
    }

    fn parse_field_definition(&mut self) -> ParseResult<FieldDefinition> {
        let start = self.peek()?.span;
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_annotation()?;
        let directives = self.parse_directives(true)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            span: self.node_span(start),
        })
    }

    fn parse_arguments_definition(&mut self) -> ParseResult<Vec<InputValueDefinition>> {
        if !self.skip_if(&GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }
        let mut arguments = Vec::new();
        loop {
            arguments.push(self.parse_input_value_definition()?);
            if self.skip_if(&GraphQLTokenKind::ParenClose)? {
                return Ok(arguments);
            }
        }
    }

    fn parse_input_value_definition(&mut self) -> ParseResult<InputValueDefinition> {
        let start = self.peek()?.span;
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_annotation()?;
        let default_value = if self.skip_if(&GraphQLTokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            span: self.node_span(start),
        })
    }

    fn parse_interface_type_definition(
        &mut self,
        start: GraphQLSourceSpan,
        description: Option<String>,
    ) -> ParseResult<InterfaceTypeDefinition> {
        self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            directives,
            fields,
            span: self.node_span(start),
        })
    }

    fn parse_union_type_definition(
        &mut self,
        start: GraphQLSourceSpan,
        description: Option<String>,
    ) -> ParseResult<UnionTypeDefinition> {
        self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let mut types = Vec::new();
        if self.skip_if(&GraphQLTokenKind::Equals)? {
            self.skip_if(&GraphQLTokenKind::Pipe)?;
            types.push(self.parse_named_type()?);
            while self.skip_if(&GraphQLTokenKind::Pipe)? {
                types.push(self.parse_named_type()?);
            }
        }
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            span: self.node_span(start),
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        start: GraphQLSourceSpan,
        description: Option<String>,
    ) -> ParseResult<EnumTypeDefinition> {
        self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let mut values = Vec::new();
        if self.skip_if(&GraphQLTokenKind::CurlyBraceOpen)? {
            loop {
                values.push(self.parse_enum_value_definition()?);
                if self.skip_if(&GraphQLTokenKind::CurlyBraceClose)? {
                    break;
                }
            }
        }
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            span: self.node_span(start),
        })
    }

    fn parse_enum_value_definition(&mut self) -> ParseResult<EnumValueDefinition> {
        let start = self.peek()?.span;
        let description = self.parse_description()?;
        let name_span = self.peek()?.span;
        let name = self.expect_name()?;
        if matches!(name.as_str(), "true" | "false" | "null") {
            return Err(Self::invalid_syntax(
                format!("`{}` is reserved and cannot be used as an enum value", name.value),
                name_span,
            ));
        }
        let directives = self.parse_directives(true)?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            span: self.node_span(start),
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
        start: GraphQLSourceSpan,
        description: Option<String>,
    ) -> ParseResult<InputObjectTypeDefinition> {
        self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let mut fields = Vec::new();
        if self.skip_if(&GraphQLTokenKind::CurlyBraceOpen)? {
            loop {
                fields.push(self.parse_input_value_definition()?);
                if self.skip_if(&GraphQLTokenKind::CurlyBraceClose)? {
                    break;
                }
            }
        }
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            span: self.node_span(start),
        })
    }

    fn parse_type_extension(
        &mut self,
        start: GraphQLSourceSpan,
    ) -> ParseResult<TypeExtensionDefinition> {
        self.expect_keyword("extend")?;
        let definition_start = self.peek()?.span;
        let definition = self.parse_object_type_definition(definition_start, None)?;
        Ok(TypeExtensionDefinition {
            definition,
            span: self.node_span(start),
        })
    }

    fn parse_directive_definition(
        &mut self,
        start: GraphQLSourceSpan,
        description: Option<String>,
    ) -> ParseResult<DirectiveDefinition> {
        self.expect_keyword("directive")?;
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect_keyword("on")?;
        self.skip_if(&GraphQLTokenKind::Pipe)?;
        let mut locations = vec![self.parse_directive_location()?];
        while self.skip_if(&GraphQLTokenKind::Pipe)? {
            locations.push(self.parse_directive_location()?);
        }
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            locations,
            span: self.node_span(start),
        })
    }

    fn parse_directive_location(&mut self) -> ParseResult<Name> {
        let span = self.peek()?.span;
        let name = self.expect_name()?;
        if DirectiveLocation::from_name(name.as_str()).is_none() {
            return Err(Self::invalid_syntax(
                format!("unknown directive location `{}`", name.value),
                span,
            ));
        }
        Ok(name)
    }
}
