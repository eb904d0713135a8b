//! Tests for [`visit()`](crate::visitor::visit) and
//! [`ParallelVisitor`](crate::visitor::ParallelVisitor).

use crate::ast;
use crate::ast::AstNode;
use crate::ast::AstNodeRef;
use crate::ast::NodeKind;
use crate::printer::print;
use crate::tests::utils::parse_ok;
use crate::visitor::visit;
use crate::visitor::ParallelVisitor;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

/// Records `enter`/`leave` events as `"+Kind"`/`"-Kind"` strings.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    skip: Option<NodeKind>,
    break_on: Option<NodeKind>,
}

impl Visitor<Vec<String>> for Recorder {
    fn enter(&mut self, log: &mut Vec<String>, node: AstNodeRef<'_>) -> VisitAction {
        self.events.push(format!("+{:?}", node.kind()));
        log.push(format!("enter {:?}", node.kind()));
        if Some(node.kind()) == self.break_on {
            return VisitAction::Break;
        }
        if Some(node.kind()) == self.skip {
            return VisitAction::Skip;
        }
        VisitAction::Continue
    }

    fn leave(&mut self, log: &mut Vec<String>, node: AstNodeRef<'_>) -> VisitAction {
        self.events.push(format!("-{:?}", node.kind()));
        log.push(format!("leave {:?}", node.kind()));
        VisitAction::Continue
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Single visitor
// =============================================================================

/// Verifies enter/leave order follows the child-field table.
#[test]
fn visits_in_child_field_order() {
    let document = parse_ok("{ a: b(c: 1) }");
    let mut recorder = Recorder::default();
    let mut log = Vec::new();
    let result = visit((&document).into(), &mut recorder, &mut log);
    assert!(result.is_none());
    assert_eq!(
        recorder.events,
        strings(&[
            "+Document",
            "+OperationDefinition",
            "+SelectionSet",
            "+Field",
            "+Name",
            "-Name",
            "+Name",
            "-Name",
            "+Argument",
            "+Name",
            "-Name",
            "+IntValue",
            "-IntValue",
            "-Argument",
            "-Field",
            "-SelectionSet",
            "-OperationDefinition",
            "-Document",
        ]),
    );
    assert_eq!(log.len(), recorder.events.len());
}

/// Verifies `Skip` prunes the subtree and suppresses the matching `leave`.
#[test]
fn skip_prunes_subtree() {
    let document = parse_ok("{ a(x: 1) b }");
    let mut recorder = Recorder {
        skip: Some(NodeKind::Argument),
        ..Recorder::default()
    };
    visit((&document).into(), &mut recorder, &mut Vec::new());
    assert!(recorder.events.contains(&"+Argument".to_string()));
    assert!(!recorder.events.contains(&"-Argument".to_string()));
    assert!(!recorder.events.contains(&"+IntValue".to_string()));
    assert_eq!(recorder.events.iter().filter(|e| *e == "+Field").count(), 2);
}

/// Verifies `Break` halts traversal with no further hooks.
#[test]
fn break_halts_everything() {
    let document = parse_ok("{ a b c }");
    let mut recorder = Recorder {
        break_on: Some(NodeKind::Field),
        ..Recorder::default()
    };
    visit((&document).into(), &mut recorder, &mut Vec::new());
    assert_eq!(
        recorder.events,
        strings(&["+Document", "+OperationDefinition", "+SelectionSet", "+Field"]),
    );
}

/// Renames every field `old` to `new`.
struct Renamer;

impl Visitor for Renamer {
    fn enter(&mut self, _cx: &mut (), node: AstNodeRef<'_>) -> VisitAction {
        if let AstNodeRef::Field(field) = node
            && field.name.value == "old"
        {
            let mut renamed = field.clone();
            renamed.name = ast::Name::new("new");
            return VisitAction::Replace(AstNode::Field(renamed));
        }
        VisitAction::Continue
    }
}

/// Verifies `Replace` rewrites a copy of the tree and leaves the original
/// untouched.
#[test]
fn replace_produces_rewritten_copy() {
    let document = parse_ok("{ keep old { old } }");
    let rewritten = visit((&document).into(), &mut Renamer, &mut ()).expect("edited");
    let AstNode::Document(rewritten) = rewritten else {
        panic!("root kind changed");
    };
    assert_eq!(print((&rewritten).into()), "{\n  keep\n  new {\n    new\n  }\n}\n");
    assert_eq!(print((&document).into()), "{\n  keep\n  old {\n    old\n  }\n}\n");
}

/// Replaces integer arguments on the way out.
struct Doubler;

impl Visitor for Doubler {
    fn leave(&mut self, _cx: &mut (), node: AstNodeRef<'_>) -> VisitAction {
        if let AstNodeRef::IntValue(int) = node
            && let Some(n) = int.as_i64()
        {
            return VisitAction::Replace(AstNode::IntValue(ast::IntValue {
                value: (n * 2).to_string(),
                span: None,
            }));
        }
        VisitAction::Continue
    }
}

/// Verifies replacements returned from `leave`.
#[test]
fn replace_from_leave() {
    let document = parse_ok("{ f(a: 2, b: [3, 4]) }");
    let Some(AstNode::Document(rewritten)) = visit((&document).into(), &mut Doubler, &mut ())
    else {
        panic!("expected a rewritten document");
    };
    assert_eq!(print((&rewritten).into()), "{\n  f(a: 4, b: [6, 8])\n}\n");
}

/// Verifies that a replacement of the wrong kind for its slot panics.
#[test]
#[should_panic(expected = "cannot be placed")]
fn replace_with_wrong_kind_panics() {
    struct Bad;
    impl Visitor for Bad {
        fn enter(&mut self, _cx: &mut (), node: AstNodeRef<'_>) -> VisitAction {
            match node {
                AstNodeRef::IntValue(_) => VisitAction::Replace(AstNode::Name(ast::Name::new("x"))),
                _ => VisitAction::Continue,
            }
        }
    }
    let document = parse_ok("{ f(a: 1) }");
    visit((&document).into(), &mut Bad, &mut ());
}

// =============================================================================
// Parallel composition
// =============================================================================

/// Verifies that one visitor's skip does not hide nodes from another, and
/// that leave hooks run in reverse order.
#[test]
fn parallel_visitors_keep_independent_state() {
    let document = parse_ok("{ a(x: 1) }");
    let skipper = Recorder {
        skip: Some(NodeKind::Argument),
        ..Recorder::default()
    };
    let watcher = Recorder::default();
    let mut parallel = ParallelVisitor::new(vec![skipper, watcher]);
    let mut log = Vec::new();
    visit((&document).into(), &mut parallel, &mut log);

    let [skipper, watcher] = parallel.visitors() else {
        panic!("two visitors");
    };
    assert!(!skipper.events.contains(&"+IntValue".to_string()));
    assert!(!skipper.events.contains(&"-Argument".to_string()));
    assert!(watcher.events.contains(&"+IntValue".to_string()));
    assert!(watcher.events.contains(&"-Argument".to_string()));
    // After the skipped subtree the skipper is active again.
    assert!(skipper.events.contains(&"-Field".to_string()));

    let leave_document: Vec<_> =
        log.iter().filter(|e| *e == "leave Document").collect();
    assert_eq!(leave_document.len(), 2);
    let enters: Vec<_> = log.iter().take(2).cloned().collect();
    assert_eq!(enters, strings(&["enter Document", "enter Document"]));
}

/// Verifies that one visitor breaking leaves the others running.
#[test]
fn parallel_break_retires_one_visitor() {
    let document = parse_ok("{ a b }");
    let breaker = Recorder {
        break_on: Some(NodeKind::SelectionSet),
        ..Recorder::default()
    };
    let mut parallel = ParallelVisitor::new(vec![breaker, Recorder::default()]);
    visit((&document).into(), &mut parallel, &mut Vec::new());
    let visitors = parallel.into_visitors();
    assert_eq!(visitors[0].events.last().map(String::as_str), Some("+SelectionSet"));
    assert_eq!(visitors[1].events.last().map(String::as_str), Some("-Document"));
}

/// Verifies that the composite stops once every visitor has broken.
#[test]
fn parallel_breaks_when_all_break() {
    let document = parse_ok("{ a b }");
    let make = || Recorder {
        break_on: Some(NodeKind::OperationDefinition),
        ..Recorder::default()
    };
    let mut parallel = ParallelVisitor::new(vec![make(), make()]);
    let mut log = Vec::new();
    visit((&document).into(), &mut parallel, &mut log);
    assert_eq!(log.len(), 4);
}
