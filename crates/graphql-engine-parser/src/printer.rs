//! Renders AST nodes back to GraphQL source text.
//!
//! Output is canonical rather than faithful: comments, commas and original
//! whitespace are dropped, selection sets and type bodies are indented by two
//! spaces, and every string (including block strings and descriptions) is
//! printed as an escaped single-line literal. Reparsing printed output yields
//! a structurally identical tree.

use crate::ast::*;
use std::fmt;

/// Prints any node.
pub fn print(node: AstNodeRef<'_>) -> String {
    match node {
        AstNodeRef::Name(n) => n.value.clone(),
        AstNodeRef::Document(n) => print_document(n),
        AstNodeRef::OperationDefinition(n) => print_operation(n),
        AstNodeRef::VariableDefinition(n) => print_variable_definition(n),
        AstNodeRef::Variable(n) => format!("${}", n.name.value),
        AstNodeRef::SelectionSet(n) => print_selection_set(n),
        AstNodeRef::Field(n) => print_field(n),
        AstNodeRef::Argument(n) => print_argument(n),
        AstNodeRef::FragmentSpread(n) => {
            join(&[format!("...{}", n.name.value), print_directives(&n.directives)], " ")
        },
        AstNodeRef::InlineFragment(n) => print_inline_fragment(n),
        AstNodeRef::FragmentDefinition(n) => print_fragment_definition(n),
        AstNodeRef::IntValue(n) => n.value.clone(),
        AstNodeRef::FloatValue(n) => n.value.clone(),
        AstNodeRef::StringValue(n) => print_string(&n.value),
        AstNodeRef::BooleanValue(n) => n.value.to_string(),
        AstNodeRef::NullValue(_) => "null".to_string(),
        AstNodeRef::EnumValue(n) => n.value.clone(),
        AstNodeRef::ListValue(n) => {
            let values: Vec<String> = n.values.iter().map(print_value).collect();
            format!("[{}]", values.join(", "))
        },
        AstNodeRef::ObjectValue(n) => {
            let fields: Vec<String> = n.fields.iter().map(|f| print(f.into())).collect();
            format!("{{{}}}", fields.join(", "))
        },
        AstNodeRef::ObjectField(n) => format!("{}: {}", n.name.value, print_value(&n.value)),
        AstNodeRef::Directive(n) => {
            format!("@{}{}", n.name.value, print_arguments(&n.arguments))
        },
        AstNodeRef::NamedType(n) => n.name.value.clone(),
        AstNodeRef::ListType(n) => format!("[{}]", print_type(&n.of_type)),
        AstNodeRef::NonNullType(n) => format!("{}!", print_type(&n.of_type)),
        AstNodeRef::SchemaDefinition(n) => {
            let operation_types: Vec<String> =
                n.operation_types.iter().map(|t| print(t.into())).collect();
            join(
                &["schema".to_string(), print_directives(&n.directives), block(&operation_types)],
                " ",
            )
        },
        AstNodeRef::OperationTypeDefinition(n) => {
            format!("{}: {}", n.operation.as_str(), n.named_type.name.value)
        },
        AstNodeRef::ScalarTypeDefinition(n) => with_description(
            n.description.as_deref(),
            join(
                &[format!("scalar {}", n.name.value), print_directives(&n.directives)],
                " ",
            ),
        ),
        AstNodeRef::ObjectTypeDefinition(n) => print_object_type(n),
        AstNodeRef::FieldDefinition(n) => with_description(
            n.description.as_deref(),
            join(
                &[
                    format!(
                        "{}{}: {}",
                        n.name.value,
                        print_argument_definitions(&n.arguments),
                        print_type(&n.field_type),
                    ),
                    print_directives(&n.directives),
                ],
                " ",
            ),
        ),
        AstNodeRef::InputValueDefinition(n) => print_input_value_definition(n),
        AstNodeRef::InterfaceTypeDefinition(n) => {
            let fields: Vec<String> = n.fields.iter().map(|f| print(f.into())).collect();
            with_description(
                n.description.as_deref(),
                join(
                    &[
                        format!("interface {}", n.name.value),
                        print_directives(&n.directives),
                        block(&fields),
                    ],
                    " ",
                ),
            )
        },
        AstNodeRef::UnionTypeDefinition(n) => {
            let members: Vec<&str> = n.types.iter().map(|t| t.name.as_str()).collect();
            let members = if members.is_empty() {
                String::new()
            } else {
                format!("= {}", members.join(" | "))
            };
            with_description(
                n.description.as_deref(),
                join(
                    &[
                        format!("union {}", n.name.value),
                        print_directives(&n.directives),
                        members,
                    ],
                    " ",
                ),
            )
        },
        AstNodeRef::EnumTypeDefinition(n) => {
            let values: Vec<String> = n.values.iter().map(|v| print(v.into())).collect();
            with_description(
                n.description.as_deref(),
                join(
                    &[
                        format!("enum {}", n.name.value),
                        print_directives(&n.directives),
                        block(&values),
                    ],
                    " ",
                ),
            )
        },
        AstNodeRef::EnumValueDefinition(n) => with_description(
            n.description.as_deref(),
            join(&[n.name.value.clone(), print_directives(&n.directives)], " "),
        ),
        AstNodeRef::InputObjectTypeDefinition(n) => {
            let fields: Vec<String> = n.fields.iter().map(print_input_value_definition).collect();
            with_description(
                n.description.as_deref(),
                join(
                    &[
                        format!("input {}", n.name.value),
                        print_directives(&n.directives),
                        block(&fields),
                    ],
                    " ",
                ),
            )
        },
        AstNodeRef::TypeExtensionDefinition(n) => {
            format!("extend {}", print_object_type(&n.definition))
        },
        AstNodeRef::DirectiveDefinition(n) => {
            let locations: Vec<&str> = n.locations.iter().map(Name::as_str).collect();
            with_description(
                n.description.as_deref(),
                format!(
                    "directive @{}{} on {}",
                    n.name.value,
                    print_argument_definitions(&n.arguments),
                    locations.join(" | "),
                ),
            )
        },
    }
}

pub fn print_value(value: &Value) -> String {
    print(value.into())
}

pub fn print_type(annotation: &TypeAnnotation) -> String {
    print(annotation.into())
}

fn print_document(document: &Document) -> String {
    let definitions: Vec<String> =
        document.definitions.iter().map(|def| print(def.into())).collect();
    let mut out = definitions.join("\n\n");
    out.push('\n');
    out
}

fn print_operation(op: &OperationDefinition) -> String {
    let selection_set = print_selection_set(&op.selection_set);
    let is_shorthand = op.operation == OperationKind::Query
        && op.name.is_none()
        && op.variable_definitions.is_empty()
        && op.directives.is_empty();
    if is_shorthand {
        return selection_set;
    }
    let variables = if op.variable_definitions.is_empty() {
        String::new()
    } else {
        let defs: Vec<String> =
            op.variable_definitions.iter().map(print_variable_definition).collect();
        format!("({})", defs.join(", "))
    };
    let name = op.name.as_ref().map_or("", Name::as_str);
    join(
        &[
            op.operation.as_str().to_string(),
            format!("{name}{variables}"),
            print_directives(&op.directives),
            selection_set,
        ],
        " ",
    )
}

fn print_variable_definition(def: &VariableDefinition) -> String {
    let mut out = format!("${}: {}", def.variable.name.value, print_type(&def.var_type));
    if let Some(default_value) = &def.default_value {
        out.push_str(" = ");
        out.push_str(&print_value(default_value));
    }
    out
}

fn print_selection_set(selection_set: &SelectionSet) -> String {
    let selections: Vec<String> =
        selection_set.selections.iter().map(|s| print(s.into())).collect();
    block(&selections)
}

fn print_field(field: &Field) -> String {
    let mut head = String::new();
    if let Some(alias) = &field.alias {
        head.push_str(&alias.value);
        head.push_str(": ");
    }
    head.push_str(&field.name.value);
    head.push_str(&print_arguments(&field.arguments));
    join(
        &[
            head,
            print_directives(&field.directives),
            field.selection_set.as_ref().map(print_selection_set).unwrap_or_default(),
        ],
        " ",
    )
}

fn print_argument(argument: &Argument) -> String {
    format!("{}: {}", argument.name.value, print_value(&argument.value))
}

fn print_arguments(arguments: &[Argument]) -> String {
    if arguments.is_empty() {
        return String::new();
    }
    let args: Vec<String> = arguments.iter().map(print_argument).collect();
    format!("({})", args.join(", "))
}

fn print_directives(directives: &[Directive]) -> String {
    let directives: Vec<String> = directives.iter().map(|d| print(d.into())).collect();
    directives.join(" ")
}

fn print_inline_fragment(inline: &InlineFragment) -> String {
    let condition = inline
        .type_condition
        .as_ref()
        .map(|t| format!("on {}", t.name.value))
        .unwrap_or_default();
    join(
        &[
            "...".to_string(),
            condition,
            print_directives(&inline.directives),
            print_selection_set(&inline.selection_set),
        ],
        " ",
    )
}

fn print_fragment_definition(frag: &FragmentDefinition) -> String {
    join(
        &[
            format!("fragment {} on {}", frag.name.value, frag.type_condition.name.value),
            print_directives(&frag.directives),
            print_selection_set(&frag.selection_set),
        ],
        " ",
    )
}

fn print_object_type(def: &ObjectTypeDefinition) -> String {
    let interfaces = if def.interfaces.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = def.interfaces.iter().map(|t| t.name.as_str()).collect();
        format!("implements {}", names.join(" & "))
    };
    let fields: Vec<String> = def.fields.iter().map(|f| print(f.into())).collect();
    with_description(
        def.description.as_deref(),
        join(
            &[
                format!("type {}", def.name.value),
                interfaces,
                print_directives(&def.directives),
                block(&fields),
            ],
            " ",
        ),
    )
}

fn print_argument_definitions(arguments: &[InputValueDefinition]) -> String {
    if arguments.is_empty() {
        return String::new();
    }
    let args: Vec<String> = arguments.iter().map(print_input_value_definition).collect();
    format!("({})", args.join(", "))
}

fn print_input_value_definition(def: &InputValueDefinition) -> String {
    let mut head = format!("{}: {}", def.name.value, print_type(&def.value_type));
    if let Some(default_value) = &def.default_value {
        head.push_str(" = ");
        head.push_str(&print_value(default_value));
    }
    let line = join(&[head, print_directives(&def.directives)], " ");
    match &def.description {
        Some(description) => format!("{} {line}", print_string(description)),
        None => line,
    }
}

/// Quotes and escapes `value` as a single-line string literal.
pub fn print_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 || c == '\u{007F}' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            },
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn with_description(description: Option<&str>, body: String) -> String {
    match description {
        Some(description) => format!("{}\n{body}", print_string(description)),
        None => body,
    }
}

/// `{ ... }` with each item on its own indented line; empty when there are
/// no items.
fn block(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let body = items.join("\n").replace('\n', "\n  ");
    format!("{{\n  {body}\n}}")
}

/// Joins the non-empty parts with `separator`.
fn join(parts: &[String], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Display for AstNodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print(*self))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_document(self))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_value(self))
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_type(self))
    }
}
