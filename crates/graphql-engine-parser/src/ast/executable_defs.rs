use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;

/// The kind of an operation: `query`, `mutation` or `subscription`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }
}

/// An operation definition. `{ ... }` shorthand parses to an anonymous
/// `query` with no variables or directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: Option<GraphQLSourceSpan>,
}

impl OperationDefinition {
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().map(Name::as_str)
    }
}

/// `$name: Type = default` in an operation's variable list.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub span: Option<GraphQLSourceSpan>,
}

/// A `$name` reference, either in a definition or as a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn directives(&self) -> &[Directive] {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(inline) => &inline.directives,
        }
    }
}

/// A field selection, optionally aliased, with arguments, directives, and a
/// nested selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub span: Option<GraphQLSourceSpan>,
}

impl Field {
    /// The key this field's value appears under in a response: the alias if
    /// present, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub span: Option<GraphQLSourceSpan>,
}

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub span: Option<GraphQLSourceSpan>,
}

/// `... on Type @directives { ... }`, where the type condition is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: Option<GraphQLSourceSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: Option<GraphQLSourceSpan>,
}

/// A directive annotation such as `@include(if: $flag)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub span: Option<GraphQLSourceSpan>,
}

impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }
}
