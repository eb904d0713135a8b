use crate::Value;
use crate::Variables;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::ObjectType;
use crate::types::include_directive;
use crate::types::skip_directive;
use crate::values::value_from_ast;
use graphql_engine_parser::ast;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Selections grouped by response key, in first-occurrence order.
pub(super) type FieldMap<'a> = IndexMap<String, Vec<&'a ast::Field>>;

static SKIP: LazyLock<Directive> = LazyLock::new(skip_directive);
static INCLUDE: LazyLock<Directive> = LazyLock::new(include_directive);

/// What field collection needs from the surrounding execution.
pub(super) struct FieldCollector<'a, 'c> {
    pub schema: &'a Schema,
    pub fragments: &'c HashMap<String, &'a ast::FragmentDefinition>,
    pub variables: &'c Variables,
}

impl<'a> FieldCollector<'a, '_> {
    /// Gathers the fields of `selection_set` that apply to `runtime_type`,
    /// following inline fragments and fragment spreads whose type condition
    /// matches and honoring `@skip` and `@include`.
    pub(super) fn collect_fields(
        &self,
        runtime_type: &ObjectType,
        selection_set: &'a ast::SelectionSet,
        fields: &mut FieldMap<'a>,
        visited_fragments: &mut HashSet<&'a str>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    if !self.should_include(&field.directives) {
                        continue;
                    }
                    fields
                        .entry(field.response_key().to_string())
                        .or_default()
                        .push(field);
                },
                ast::Selection::InlineFragment(inline) => {
                    if !self.should_include(&inline.directives)
                        || !self.condition_matches(inline.type_condition.as_ref(), runtime_type)
                    {
                        continue;
                    }
                    self.collect_fields(runtime_type, &inline.selection_set, fields, visited_fragments);
                },
                ast::Selection::FragmentSpread(spread) => {
                    let name = spread.name.as_str();
                    if visited_fragments.contains(name) || !self.should_include(&spread.directives) {
                        continue;
                    }
                    visited_fragments.insert(name);
                    let Some(fragment) = self.fragments.get(name).copied() else {
                        continue;
                    };
                    if !self.condition_matches(Some(&fragment.type_condition), runtime_type) {
                        continue;
                    }
                    self.collect_fields(
                        runtime_type,
                        &fragment.selection_set,
                        fields,
                        visited_fragments,
                    );
                },
            }
        }
        log::trace!(
            "collected {} response keys on `{}`",
            fields.len(),
            runtime_type.name(),
        );
    }

    /// The merged sub-selections of `field_nodes`, collected on
    /// `runtime_type`.
    pub(super) fn collect_subfields(
        &self,
        runtime_type: &ObjectType,
        field_nodes: &[&'a ast::Field],
    ) -> FieldMap<'a> {
        let mut fields = FieldMap::new();
        let mut visited_fragments = HashSet::new();
        for field_node in field_nodes {
            if let Some(selection_set) = &field_node.selection_set {
                self.collect_fields(runtime_type, selection_set, &mut fields, &mut visited_fragments);
            }
        }
        fields
    }

    fn should_include(&self, directives: &[ast::Directive]) -> bool {
        if self.directive_condition(&SKIP, directives) == Some(true) {
            return false;
        }
        self.directive_condition(&INCLUDE, directives) != Some(false)
    }

    /// The coerced `if:` argument of `directive`, when it is applied.
    fn directive_condition(&self, directive: &Directive, directives: &[ast::Directive]) -> Option<bool> {
        let applied = directives.iter().find(|node| node.name.as_str() == directive.name)?;
        let condition = applied.argument("if")?;
        let if_type = &directive.arguments.get("if")?.value_type;
        match value_from_ast(&condition.value, if_type, self.schema, Some(self.variables))? {
            Value::Bool(condition) => Some(condition),
            _ => None,
        }
    }

    fn condition_matches(
        &self,
        type_condition: Option<&ast::NamedType>,
        runtime_type: &ObjectType,
    ) -> bool {
        let Some(type_condition) = type_condition else {
            return true;
        };
        let Some(conditional_type) = self.schema.type_named(type_condition.name.as_str()) else {
            return false;
        };
        if conditional_type.name() == runtime_type.name() {
            return true;
        }
        conditional_type.is_abstract_type()
            && self.schema.is_possible_type(conditional_type, runtime_type.name())
    }
}
