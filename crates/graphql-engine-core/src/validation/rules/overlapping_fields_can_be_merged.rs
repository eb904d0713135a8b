use crate::GraphQLError;
use crate::schema::Schema;
use crate::type_info;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::printer::print_value;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

/// Selections that share a response key can be merged into one field:
/// they select the same field with the same arguments (unless their parents
/// can never be the same object), their types are compatible, and their
/// sub-selections can be merged in turn.
///
/// The whole document is checked when the traversal enters it, since the
/// comparison follows fragment spreads in both directions.
pub struct OverlappingFieldsCanBeMerged;

impl<'a> Visitor<ValidationContext<'a>> for OverlappingFieldsCanBeMerged {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        if !matches!(node, AstNodeRef::Document(_)) {
            return VisitAction::Continue;
        }
        let schema = cx.schema();
        let document = cx.document();
        let mut finder = ConflictFinder {
            cx: &*cx,
            schema,
            cache: HashMap::new(),
            compared_fragment_pairs: PairSet::default(),
        };
        let mut errors = vec![];
        for definition in &document.definitions {
            match definition {
                ast::Definition::Operation(operation) => {
                    let root_type = schema
                        .root_type(operation.operation)
                        .and_then(|root| schema.type_named(root.name()));
                    finder.check_selection_set(&operation.selection_set, root_type, &mut errors);
                },
                ast::Definition::Fragment(fragment) => {
                    let condition_type = schema
                        .type_named(fragment.type_condition.name.as_str())
                        .filter(|condition_type| condition_type.is_composite_type());
                    finder.check_selection_set(&fragment.selection_set, condition_type, &mut errors);
                },
                _ => {},
            }
        }
        for error in errors {
            cx.report_error(error);
        }
        VisitAction::Break
    }
}

/// A selected field with the type it was selected on and its definition
/// there, when known.
type FieldAndDef<'a> = (Option<&'a GraphQLType>, &'a ast::Field, Option<&'a Field>);

type FieldMap<'a> = IndexMap<&'a str, Vec<FieldAndDef<'a>>>;

/// The fields of a selection set by response key, and the names of the
/// fragments it spreads.
type FieldsAndFragmentNames<'a> = Rc<(FieldMap<'a>, Vec<&'a str>)>;

enum ConflictReason<'a> {
    Message(String),
    Subfields(Vec<(&'a str, ConflictReason<'a>)>),
}

impl ConflictReason<'_> {
    fn describe(&self) -> String {
        match self {
            ConflictReason::Message(message) => message.clone(),
            ConflictReason::Subfields(subfields) => subfields
                .iter()
                .map(|(response_name, reason)| {
                    format!("subfields \"{response_name}\" conflict because {}", reason.describe())
                })
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }
}

struct Conflict<'a> {
    response_name: &'a str,
    reason: ConflictReason<'a>,
    fields1: Vec<&'a ast::Field>,
    fields2: Vec<&'a ast::Field>,
}

impl<'a> Conflict<'a> {
    fn new(
        response_name: &'a str,
        message: String,
        field1: &'a ast::Field,
        field2: &'a ast::Field,
    ) -> Self {
        Self {
            response_name,
            reason: ConflictReason::Message(message),
            fields1: vec![field1],
            fields2: vec![field2],
        }
    }

    fn into_error(self) -> GraphQLError {
        GraphQLError::with_spans(
            format!(
                "Fields \"{}\" conflict because {}. Use different aliases on the fields to fetch \
                 both if this was intentional.",
                self.response_name,
                self.reason.describe(),
            ),
            self.fields1.iter().chain(&self.fields2).map(|field| field.span),
        )
    }
}

/// Fragment pairs already compared, and whether that comparison assumed
/// mutually exclusive parents.
#[derive(Default)]
struct PairSet<'a> {
    pairs: HashMap<(&'a str, &'a str), bool>,
}

impl<'a> PairSet<'a> {
    fn contains(&self, a: &'a str, b: &'a str, are_mutually_exclusive: bool) -> bool {
        match self.pairs.get(&(a, b)) {
            None => false,
            // A comparison under exclusive parents checked less, so it does
            // not cover a non-exclusive one.
            Some(&compared_exclusive) => are_mutually_exclusive || !compared_exclusive,
        }
    }

    fn insert(&mut self, a: &'a str, b: &'a str, are_mutually_exclusive: bool) {
        self.pairs.insert((a, b), are_mutually_exclusive);
        self.pairs.insert((b, a), are_mutually_exclusive);
    }
}

struct ConflictFinder<'c, 'a> {
    cx: &'c ValidationContext<'a>,
    schema: &'a Schema,
    /// Keyed by selection set address.
    cache: HashMap<usize, FieldsAndFragmentNames<'a>>,
    compared_fragment_pairs: PairSet<'a>,
}

impl<'a> ConflictFinder<'_, 'a> {
    /// Checks `selection_set` and then, in document order, every selection
    /// set nested in it.
    fn check_selection_set(
        &mut self,
        selection_set: &'a ast::SelectionSet,
        parent_type: Option<&'a GraphQLType>,
        errors: &mut Vec<GraphQLError>,
    ) {
        let schema = self.schema;
        errors.extend(
            self.find_conflicts_within_selection_set(parent_type, selection_set)
                .into_iter()
                .map(Conflict::into_error),
        );
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    let Some(sub_selection) = &field.selection_set else {
                        continue;
                    };
                    let field_type = parent_type
                        .and_then(|parent| {
                            type_info::field_definition(schema, parent, field.name.as_str())
                        })
                        .and_then(|field_def| field_def.field_type.named_type(schema))
                        .filter(|field_type| field_type.is_composite_type());
                    self.check_selection_set(sub_selection, field_type, errors);
                },
                ast::Selection::InlineFragment(inline) => {
                    let condition_type = match &inline.type_condition {
                        Some(condition) => schema.type_named(condition.name.as_str()),
                        None => parent_type,
                    };
                    let condition_type =
                        condition_type.filter(|condition_type| condition_type.is_composite_type());
                    self.check_selection_set(&inline.selection_set, condition_type, errors);
                },
                ast::Selection::FragmentSpread(_) => {},
            }
        }
    }

    fn find_conflicts_within_selection_set(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = vec![];
        let fields = self.fields_and_fragment_names(parent_type, selection_set);
        let (field_map, fragment_names) = &*fields;
        self.collect_conflicts_within(&mut conflicts, field_map);

        let mut compared_fragments = HashSet::new();
        for (index, &fragment_name) in fragment_names.iter().enumerate() {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                &mut compared_fragments,
                false,
                &fields,
                fragment_name,
            );
            for &other_fragment_name in &fragment_names[index + 1..] {
                self.collect_conflicts_between_fragments(
                    &mut conflicts,
                    false,
                    fragment_name,
                    other_fragment_name,
                );
            }
        }
        conflicts
    }

    fn collect_conflicts_between_fields_and_fragment(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        compared_fragments: &mut HashSet<&'a str>,
        are_mutually_exclusive: bool,
        fields: &FieldsAndFragmentNames<'a>,
        fragment_name: &'a str,
    ) {
        if !compared_fragments.insert(fragment_name) {
            return;
        }
        let Some(fragment) = self.cx.fragment(fragment_name) else {
            return;
        };
        let referenced = self.referenced_fields_and_fragment_names(fragment);
        if Rc::ptr_eq(fields, &referenced) {
            return;
        }
        self.collect_conflicts_between(conflicts, are_mutually_exclusive, &fields.0, &referenced.0);
        for &nested_fragment_name in &referenced.1 {
            self.collect_conflicts_between_fields_and_fragment(
                conflicts,
                compared_fragments,
                are_mutually_exclusive,
                fields,
                nested_fragment_name,
            );
        }
    }

    fn collect_conflicts_between_fragments(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        are_mutually_exclusive: bool,
        fragment_name1: &'a str,
        fragment_name2: &'a str,
    ) {
        if fragment_name1 == fragment_name2
            || self.compared_fragment_pairs.contains(
                fragment_name1,
                fragment_name2,
                are_mutually_exclusive,
            )
        {
            return;
        }
        self.compared_fragment_pairs
            .insert(fragment_name1, fragment_name2, are_mutually_exclusive);

        let (Some(fragment1), Some(fragment2)) =
            (self.cx.fragment(fragment_name1), self.cx.fragment(fragment_name2))
        else {
            return;
        };
        let referenced1 = self.referenced_fields_and_fragment_names(fragment1);
        let referenced2 = self.referenced_fields_and_fragment_names(fragment2);
        self.collect_conflicts_between(
            conflicts,
            are_mutually_exclusive,
            &referenced1.0,
            &referenced2.0,
        );
        for &nested_name in &referenced2.1 {
            self.collect_conflicts_between_fragments(
                conflicts,
                are_mutually_exclusive,
                fragment_name1,
                nested_name,
            );
        }
        for &nested_name in &referenced1.1 {
            self.collect_conflicts_between_fragments(
                conflicts,
                are_mutually_exclusive,
                nested_name,
                fragment_name2,
            );
        }
    }

    fn find_conflicts_between_sub_selection_sets(
        &mut self,
        are_mutually_exclusive: bool,
        parent_type1: Option<&'a GraphQLType>,
        selection_set1: &'a ast::SelectionSet,
        parent_type2: Option<&'a GraphQLType>,
        selection_set2: &'a ast::SelectionSet,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = vec![];
        let fields1 = self.fields_and_fragment_names(parent_type1, selection_set1);
        let fields2 = self.fields_and_fragment_names(parent_type2, selection_set2);
        self.collect_conflicts_between(&mut conflicts, are_mutually_exclusive, &fields1.0, &fields2.0);

        let mut compared_fragments = HashSet::new();
        for &fragment_name in &fields2.1 {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                &mut compared_fragments,
                are_mutually_exclusive,
                &fields1,
                fragment_name,
            );
        }
        let mut compared_fragments = HashSet::new();
        for &fragment_name in &fields1.1 {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                &mut compared_fragments,
                are_mutually_exclusive,
                &fields2,
                fragment_name,
            );
        }
        for &fragment_name1 in &fields1.1 {
            for &fragment_name2 in &fields2.1 {
                self.collect_conflicts_between_fragments(
                    &mut conflicts,
                    are_mutually_exclusive,
                    fragment_name1,
                    fragment_name2,
                );
            }
        }
        conflicts
    }

    /// Compares every pair of same-keyed fields within one field map.
    fn collect_conflicts_within(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        field_map: &FieldMap<'a>,
    ) {
        for (&response_name, fields) in field_map {
            for (index, &field1) in fields.iter().enumerate() {
                for &field2 in &fields[index + 1..] {
                    if let Some(conflict) = self.find_conflict(false, response_name, field1, field2) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    /// Compares each field of one map with the same-keyed fields of the
    /// other.
    fn collect_conflicts_between(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        parent_fields_are_mutually_exclusive: bool,
        field_map1: &FieldMap<'a>,
        field_map2: &FieldMap<'a>,
    ) {
        for (&response_name, fields1) in field_map1 {
            let Some(fields2) = field_map2.get(response_name) else {
                continue;
            };
            for &field1 in fields1 {
                for &field2 in fields2 {
                    if let Some(conflict) = self.find_conflict(
                        parent_fields_are_mutually_exclusive,
                        response_name,
                        field1,
                        field2,
                    ) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    fn find_conflict(
        &mut self,
        parent_fields_are_mutually_exclusive: bool,
        response_name: &'a str,
        (parent_type1, node1, def1): FieldAndDef<'a>,
        (parent_type2, node2, def2): FieldAndDef<'a>,
    ) -> Option<Conflict<'a>> {
        // Fields on two different object types can never apply to the same
        // object, so only their shapes must agree.
        let are_mutually_exclusive = parent_fields_are_mutually_exclusive
            || (parent_type1.map(GraphQLType::name) != parent_type2.map(GraphQLType::name)
                && matches!(parent_type1, Some(GraphQLType::Object(_)))
                && matches!(parent_type2, Some(GraphQLType::Object(_))));

        if !are_mutually_exclusive {
            let (name1, name2) = (node1.name.as_str(), node2.name.as_str());
            if name1 != name2 {
                return Some(Conflict::new(
                    response_name,
                    format!("{name1} and {name2} are different fields"),
                    node1,
                    node2,
                ));
            }
            if !same_arguments(&node1.arguments, &node2.arguments) {
                return Some(Conflict::new(
                    response_name,
                    "they have differing arguments".to_string(),
                    node1,
                    node2,
                ));
            }
        }

        let type1 = def1.map(|def| &def.field_type);
        let type2 = def2.map(|def| &def.field_type);
        if let (Some(type1), Some(type2)) = (type1, type2) {
            if do_types_conflict(self.schema, type1, type2) {
                return Some(Conflict::new(
                    response_name,
                    format!("they return conflicting types {type1} and {type2}"),
                    node1,
                    node2,
                ));
            }
        }

        let (Some(selection_set1), Some(selection_set2)) =
            (&node1.selection_set, &node2.selection_set)
        else {
            return None;
        };
        let schema = self.schema;
        let conflicts = self.find_conflicts_between_sub_selection_sets(
            are_mutually_exclusive,
            type1.and_then(|type1| type1.named_type(schema)),
            selection_set1,
            type2.and_then(|type2| type2.named_type(schema)),
            selection_set2,
        );
        subfield_conflicts(conflicts, response_name, node1, node2)
    }

    fn fields_and_fragment_names(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
    ) -> FieldsAndFragmentNames<'a> {
        let key = selection_set as *const ast::SelectionSet as usize;
        if let Some(cached) = self.cache.get(&key) {
            return Rc::clone(cached);
        }
        let mut field_map = FieldMap::new();
        let mut fragment_names = vec![];
        self.collect_fields_and_fragment_names(
            parent_type,
            selection_set,
            &mut field_map,
            &mut fragment_names,
        );
        let fields = Rc::new((field_map, fragment_names));
        self.cache.insert(key, Rc::clone(&fields));
        fields
    }

    fn referenced_fields_and_fragment_names(
        &mut self,
        fragment: &'a ast::FragmentDefinition,
    ) -> FieldsAndFragmentNames<'a> {
        let condition_type = self.schema.type_named(fragment.type_condition.name.as_str());
        self.fields_and_fragment_names(condition_type, &fragment.selection_set)
    }

    fn collect_fields_and_fragment_names(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
        field_map: &mut FieldMap<'a>,
        fragment_names: &mut Vec<&'a str>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    let field_def = parent_type.and_then(|parent| parent.field(field.name.as_str()));
                    field_map
                        .entry(field.response_key())
                        .or_default()
                        .push((parent_type, field, field_def));
                },
                ast::Selection::FragmentSpread(spread) => {
                    let name = spread.name.as_str();
                    if !fragment_names.contains(&name) {
                        fragment_names.push(name);
                    }
                },
                ast::Selection::InlineFragment(inline) => {
                    let condition_type = match &inline.type_condition {
                        Some(condition) => self.schema.type_named(condition.name.as_str()),
                        None => parent_type,
                    };
                    self.collect_fields_and_fragment_names(
                        condition_type,
                        &inline.selection_set,
                        field_map,
                        fragment_names,
                    );
                },
            }
        }
    }
}

fn subfield_conflicts<'a>(
    conflicts: Vec<Conflict<'a>>,
    response_name: &'a str,
    node1: &'a ast::Field,
    node2: &'a ast::Field,
) -> Option<Conflict<'a>> {
    if conflicts.is_empty() {
        return None;
    }
    let mut fields1 = vec![node1];
    let mut fields2 = vec![node2];
    let mut reasons = vec![];
    for conflict in conflicts {
        fields1.extend(conflict.fields1);
        fields2.extend(conflict.fields2);
        reasons.push((conflict.response_name, conflict.reason));
    }
    Some(Conflict {
        response_name,
        reason: ConflictReason::Subfields(reasons),
        fields1,
        fields2,
    })
}

fn same_arguments(arguments1: &[ast::Argument], arguments2: &[ast::Argument]) -> bool {
    arguments1.len() == arguments2.len()
        && arguments1.iter().all(|argument1| {
            arguments2
                .iter()
                .find(|argument2| argument2.name.as_str() == argument1.name.as_str())
                .is_some_and(|argument2| {
                    print_value(&argument1.value) == print_value(&argument2.value)
                })
        })
}

/// Whether two field types could produce differently shaped values: list
/// and non-null layers must line up, and leaf types must be the same type.
fn do_types_conflict(schema: &Schema, type1: &TypeAnnotation, type2: &TypeAnnotation) -> bool {
    match (type1, type2) {
        (TypeAnnotation::List(list1), TypeAnnotation::List(list2)) => {
            list1.nullable() != list2.nullable()
                || do_types_conflict(schema, list1.inner_type(), list2.inner_type())
        },
        (TypeAnnotation::List(_), _) | (_, TypeAnnotation::List(_)) => true,
        (TypeAnnotation::Named(named1), TypeAnnotation::Named(named2)) => {
            if named1.nullable() != named2.nullable() {
                return true;
            }
            let is_leaf = |name: &str| schema.type_named(name).is_some_and(GraphQLType::is_leaf_type);
            (is_leaf(named1.name()) || is_leaf(named2.name())) && named1.name() != named2.name()
        },
    }
}
