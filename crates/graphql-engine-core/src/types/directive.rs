use crate::Value;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use crate::types::scalars;
use graphql_engine_parser::ast::DirectiveLocation;
use indexmap::IndexMap;

/// The reason `@deprecated` reports when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// A directive a schema accepts, such as `@skip`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: String,
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    pub arguments: IndexMap<String, InputValue>,
}

impl Directive {
    pub fn new(name: impl Into<String>, locations: &[DirectiveLocation]) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations: locations.to_vec(),
            arguments: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn argument(mut self, argument: InputValue) -> Self {
        self.arguments.insert(argument.name.clone(), argument);
        self
    }

    pub fn is_allowed_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }
}

const SELECTION_LOCATIONS: &[DirectiveLocation] = &[
    DirectiveLocation::Field,
    DirectiveLocation::FragmentSpread,
    DirectiveLocation::InlineFragment,
];

/// `@skip(if: Boolean!)`
pub fn skip_directive() -> Directive {
    Directive::new("skip", SELECTION_LOCATIONS)
        .description(
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
        )
        .argument(
            InputValue::new("if", TypeAnnotation::non_null_named(scalars::BOOLEAN))
                .description("Skipped when true."),
        )
}

/// `@include(if: Boolean!)`
pub fn include_directive() -> Directive {
    Directive::new("include", SELECTION_LOCATIONS)
        .description(
            "Directs the executor to include this field or fragment only when the `if` \
             argument is true.",
        )
        .argument(
            InputValue::new("if", TypeAnnotation::non_null_named(scalars::BOOLEAN))
                .description("Included when true."),
        )
}

/// `@deprecated(reason: String = "No longer supported")`
pub fn deprecated_directive() -> Directive {
    Directive::new(
        "deprecated",
        &[DirectiveLocation::FieldDefinition, DirectiveLocation::EnumValue],
    )
    .description("Marks an element of a GraphQL schema as no longer supported.")
    .argument(
        InputValue::new("reason", TypeAnnotation::named(scalars::STRING))
            .description(
                "Explains why this element was deprecated, usually also including a \
                 suggestion for how to access supported similar data. Formatted using \
                 the Markdown syntax (as specified by [CommonMark](https://commonmark.org/).",
            )
            .default_value(Value::String(DEFAULT_DEPRECATION_REASON.to_string())),
    )
}

/// The directives every schema includes.
pub fn specified_directives() -> Vec<Directive> {
    vec![skip_directive(), include_directive(), deprecated_directive()]
}
