use crate::ast::AstNode;
use crate::ast::AstNodeRef;
use crate::ast::ChildField;

/// What a visitor hook asks the traversal to do next.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum VisitAction {
    /// Keep walking.
    #[default]
    Continue,

    /// From `enter`: do not descend into this node and do not call `leave`
    /// for it. From `leave`, same as `Continue`.
    Skip,

    /// Stop the whole traversal immediately. No further hooks run.
    Break,

    /// Substitute this node. From `enter`, the walk continues into the
    /// replacement's children and `leave` sees the replacement.
    Replace(AstNode),
}

/// Enter/leave hooks over AST nodes.
///
/// `C` is shared context threaded through every hook, such as a type
/// tracker or a validation context.
pub trait Visitor<C: ?Sized = ()> {
    fn enter(&mut self, _cx: &mut C, _node: AstNodeRef<'_>) -> VisitAction {
        VisitAction::Continue
    }

    fn leave(&mut self, _cx: &mut C, _node: AstNodeRef<'_>) -> VisitAction {
        VisitAction::Continue
    }
}

impl<C: ?Sized, V: Visitor<C> + ?Sized> Visitor<C> for &mut V {
    fn enter(&mut self, cx: &mut C, node: AstNodeRef<'_>) -> VisitAction {
        (**self).enter(cx, node)
    }

    fn leave(&mut self, cx: &mut C, node: AstNodeRef<'_>) -> VisitAction {
        (**self).leave(cx, node)
    }
}

impl<C: ?Sized, V: Visitor<C> + ?Sized> Visitor<C> for Box<V> {
    fn enter(&mut self, cx: &mut C, node: AstNodeRef<'_>) -> VisitAction {
        (**self).enter(cx, node)
    }

    fn leave(&mut self, cx: &mut C, node: AstNodeRef<'_>) -> VisitAction {
        (**self).leave(cx, node)
    }
}

enum Outcome {
    Unchanged,
    Edited(AstNode),
    Stopped(Option<AstNode>),
}

/// Walks the tree rooted at `root`, depth first.
///
/// Returns the rewritten root when any hook replaced a node, or `None` when
/// the tree was left untouched. Rewrites never mutate `root`: every ancestor
/// of a replaced node is cloned with the new child in place. A `Break` keeps
/// the rewrites made before it.
///
/// # Panics
///
/// Panics if a hook replaces a node with one whose kind cannot occupy the
/// original node's slot, e.g. a `Field` where a `Value` belongs.
pub fn visit<C: ?Sized, V: Visitor<C> + ?Sized>(
    root: AstNodeRef<'_>,
    visitor: &mut V,
    cx: &mut C,
) -> Option<AstNode> {
    match walk(root, visitor, cx) {
        Outcome::Unchanged => None,
        Outcome::Edited(node) => Some(node),
        Outcome::Stopped(node) => node,
    }
}

fn walk<C: ?Sized, V: Visitor<C> + ?Sized>(
    node: AstNodeRef<'_>,
    visitor: &mut V,
    cx: &mut C,
) -> Outcome {
    let replaced = match visitor.enter(cx, node) {
        VisitAction::Continue => None,
        VisitAction::Skip => return Outcome::Unchanged,
        VisitAction::Break => return Outcome::Stopped(None),
        VisitAction::Replace(replacement) => Some(replacement),
    };

    let base = replaced.as_ref().map_or(node, AstNode::as_node_ref);
    let mut edits: Vec<(ChildField, usize, AstNode)> = Vec::new();
    let mut stopped = false;
    'fields: for &field in base.kind().child_fields() {
        for (index, child) in base.children(field).into_iter().enumerate() {
            match walk(child, visitor, cx) {
                Outcome::Unchanged => {},
                Outcome::Edited(edited) => edits.push((field, index, edited)),
                Outcome::Stopped(edited) => {
                    if let Some(edited) = edited {
                        edits.push((field, index, edited));
                    }
                    stopped = true;
                    break 'fields;
                },
            }
        }
    }

    let edited = if edits.is_empty() {
        replaced
    } else {
        let mut owned = replaced.unwrap_or_else(|| node.to_owned_node());
        for (field, index, child) in edits {
            if let Err(child) = owned.replace_child(field, index, child) {
                panic!(
                    "a {:?} node cannot be placed in the {field:?} slot of a {:?} node",
                    child.kind(),
                    owned.kind(),
                );
            }
        }
        Some(owned)
    };

    if stopped {
        return Outcome::Stopped(edited);
    }

    let action = match &edited {
        Some(edited) => visitor.leave(cx, edited.as_node_ref()),
        None => visitor.leave(cx, node),
    };
    match action {
        VisitAction::Continue | VisitAction::Skip => match edited {
            Some(edited) => Outcome::Edited(edited),
            None => Outcome::Unchanged,
        },
        VisitAction::Break => Outcome::Stopped(edited),
        VisitAction::Replace(replacement) => Outcome::Edited(replacement),
    }
}
