use crate::GraphQLError;
use crate::validation::ValidationContext;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;
use std::collections::HashMap;
use std::collections::HashSet;

/// No fragment spreads itself, directly or through other fragments.
///
/// Each cycle is reported once, at the spreads that form it.
pub struct NoFragmentCycles;

impl<'a> Visitor<ValidationContext<'a>> for NoFragmentCycles {
    fn enter(&mut self, cx: &mut ValidationContext<'a>, node: AstNodeRef<'_>) -> VisitAction {
        if !matches!(node, AstNodeRef::Document(_)) {
            return VisitAction::Continue;
        }
        let document = cx.document();
        let mut detector = CycleDetector {
            cx: &*cx,
            visited: HashSet::new(),
            spread_path: vec![],
            path_index_by_name: HashMap::new(),
            errors: vec![],
        };
        for fragment in document.fragments() {
            detector.detect_cycles(fragment);
        }
        let errors = detector.errors;
        for error in errors {
            cx.report_error(error);
        }
        VisitAction::Break
    }
}

struct CycleDetector<'c, 'a> {
    cx: &'c ValidationContext<'a>,
    visited: HashSet<&'a str>,
    spread_path: Vec<&'a ast::FragmentSpread>,
    path_index_by_name: HashMap<&'a str, usize>,
    errors: Vec<GraphQLError>,
}

impl<'a> CycleDetector<'_, 'a> {
    fn detect_cycles(&mut self, fragment: &'a ast::FragmentDefinition) {
        let fragment_name = fragment.name.as_str();
        if !self.visited.insert(fragment_name) {
            return;
        }
        let spreads = self.cx.fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return;
        }

        self.path_index_by_name.insert(fragment_name, self.spread_path.len());
        for spread in spreads {
            let spread_name = spread.name.as_str();
            match self.path_index_by_name.get(spread_name) {
                None => {
                    self.spread_path.push(spread);
                    if let Some(spread_fragment) = self.cx.fragment(spread_name) {
                        self.detect_cycles(spread_fragment);
                    }
                    self.spread_path.pop();
                },
                Some(&cycle_index) => {
                    let cycle_path = &self.spread_path[cycle_index..];
                    let via: Vec<&str> = cycle_path.iter().map(|s| s.name.as_str()).collect();
                    let mut message = format!("Cannot spread fragment \"{spread_name}\" within itself");
                    if via.is_empty() {
                        message.push('.');
                    } else {
                        message.push_str(&format!(" via {}.", via.join(", ")));
                    }
                    let spans = cycle_path.iter().chain([&spread]).map(|s| s.span);
                    self.errors.push(GraphQLError::with_spans(message, spans));
                },
            }
        }
        self.path_index_by_name.remove(fragment_name);
    }
}
