use crate::GraphQLError;
use crate::Value;
use crate::schema::Schema;
use crate::type_info::TypeInfo;
use crate::type_info::TypeInfoVisitor;
use crate::type_info::WithTypeInfo;
use crate::types::TypeAnnotation;
use graphql_engine_parser::GraphQLSourceSpan;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use graphql_engine_parser::visitor::visit;
use std::collections::HashMap;
use std::collections::HashSet;
use std::ptr;

/// One place a variable is referenced, with the input type expected there.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableUsage<'a> {
    pub name: String,
    pub span: Option<GraphQLSourceSpan>,
    /// `None` when the position's type is unknown, e.g. an undefined
    /// argument.
    pub input_type: Option<TypeAnnotation>,
    /// The schema default of the argument or input field the variable
    /// fills, if any.
    pub default_value: Option<&'a Value>,
}

/// What every validation rule sees: the schema, the document, the type
/// context of the current node and the errors reported so far.
pub struct ValidationContext<'a> {
    schema: &'a Schema,
    document: &'a ast::Document,
    type_info: TypeInfo<'a>,
    errors: Vec<GraphQLError>,
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        let mut fragments = HashMap::new();
        for fragment in document.fragments() {
            fragments.entry(fragment.name.as_str()).or_insert(fragment);
        }
        Self {
            schema,
            document,
            type_info: TypeInfo::new(schema),
            errors: vec![],
            fragments,
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn document(&self) -> &'a ast::Document {
        self.document
    }

    pub fn type_info(&self) -> &TypeInfo<'a> {
        &self.type_info
    }

    pub fn report_error(&mut self, error: GraphQLError) {
        let error = match &self.document.source {
            Some(source) if error.source_name.is_none() => error.with_source_name(source.name()),
            _ => error,
        };
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[GraphQLError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<GraphQLError> {
        self.errors
    }

    /// The first fragment definition named `name`.
    pub fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    /// The document's own copy of `node`, which a visitor hook only
    /// borrows for the duration of the call.
    pub fn operation(
        &self,
        node: &ast::OperationDefinition,
    ) -> Option<&'a ast::OperationDefinition> {
        self.document
            .operations()
            .find(|operation| ptr::eq(*operation, node))
    }

    /// The fragment spreads anywhere within `selection_set`. Spreads are
    /// not followed into the fragments they name.
    pub fn fragment_spreads(
        &self,
        selection_set: &'a ast::SelectionSet,
    ) -> Vec<&'a ast::FragmentSpread> {
        let mut spreads = vec![];
        let mut sets_to_visit = vec![selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for selection in &set.selections {
                match selection {
                    ast::Selection::FragmentSpread(spread) => spreads.push(spread),
                    ast::Selection::InlineFragment(inline) => {
                        sets_to_visit.push(&inline.selection_set);
                    },
                    ast::Selection::Field(field) => {
                        if let Some(sub_selection) = &field.selection_set {
                            sets_to_visit.push(sub_selection);
                        }
                    },
                }
            }
        }
        spreads
    }

    /// Every defined fragment reachable from `operation` through spreads,
    /// each listed once.
    pub fn recursively_referenced_fragments(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<&'a ast::FragmentDefinition> {
        let mut fragments = vec![];
        let mut collected: HashSet<&str> = HashSet::new();
        let mut sets_to_visit = vec![&operation.selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for spread in self.fragment_spreads(set) {
                let name = spread.name.as_str();
                if !collected.insert(name) {
                    continue;
                }
                if let Some(fragment) = self.fragment(name) {
                    fragments.push(fragment);
                    sets_to_visit.push(&fragment.selection_set);
                }
            }
        }
        fragments
    }

    /// The variables referenced directly within an operation or fragment
    /// definition (not through its spreads), in document order.
    pub fn variable_usages(&self, definition: AstNodeRef<'a>) -> Vec<VariableUsage<'a>> {
        let mut collector = TypeInfoVisitor::new(UsageCollector { usages: vec![] });
        let mut type_info = TypeInfo::new(self.schema);
        visit(definition, &mut collector, &mut type_info);
        collector.into_inner().usages
    }

    /// The variables referenced by `operation` and by every fragment it
    /// reaches.
    pub fn recursive_variable_usages(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<VariableUsage<'a>> {
        let mut usages = self.variable_usages(operation.into());
        for fragment in self.recursively_referenced_fragments(operation) {
            usages.extend(self.variable_usages(fragment.into()));
        }
        usages
    }
}

impl<'a> WithTypeInfo<'a> for ValidationContext<'a> {
    fn type_info_mut(&mut self) -> &mut TypeInfo<'a> {
        &mut self.type_info
    }
}

struct UsageCollector<'a> {
    usages: Vec<VariableUsage<'a>>,
}

impl<'a> Visitor<TypeInfo<'a>> for UsageCollector<'a> {
    fn enter(&mut self, cx: &mut TypeInfo<'a>, node: AstNodeRef<'_>) -> VisitAction {
        match node {
            AstNodeRef::VariableDefinition(_) => VisitAction::Skip,
            AstNodeRef::Variable(variable) => {
                self.usages.push(VariableUsage {
                    name: variable.name.value.clone(),
                    span: variable.span,
                    input_type: cx.input_type().cloned(),
                    default_value: cx.default_value(),
                });
                VisitAction::Continue
            },
            _ => VisitAction::Continue,
        }
    }
}
