use crate::type_info::TypeInfo;
use graphql_engine_parser::ast::AstNodeRef;
use graphql_engine_parser::visitor::VisitAction;
use graphql_engine_parser::visitor::Visitor;

/// A traversal context that carries a [`TypeInfo`].
pub trait WithTypeInfo<'s> {
    fn type_info_mut(&mut self) -> &mut TypeInfo<'s>;
}

impl<'s> WithTypeInfo<'s> for TypeInfo<'s> {
    fn type_info_mut(&mut self) -> &mut TypeInfo<'s> {
        self
    }
}

/// Wraps a visitor so the context's [`TypeInfo`] is updated around each of
/// its hooks: entered before the wrapped `enter`, left after the wrapped
/// `leave`. The wrapped visitor therefore always sees type information for
/// the node it is handed.
///
/// A `Skip` from the wrapped visitor also leaves the node (no `leave` hook
/// follows it), and a `Replace` swaps the node's type information for the
/// replacement's.
pub struct TypeInfoVisitor<V> {
    visitor: V,
}

impl<V> TypeInfoVisitor<V> {
    pub fn new(visitor: V) -> Self {
        Self { visitor }
    }

    pub fn inner(&self) -> &V {
        &self.visitor
    }

    pub fn into_inner(self) -> V {
        self.visitor
    }
}

impl<'s, C, V> Visitor<C> for TypeInfoVisitor<V>
where
    C: WithTypeInfo<'s>,
    V: Visitor<C>,
{
    fn enter(&mut self, cx: &mut C, node: AstNodeRef<'_>) -> VisitAction {
        cx.type_info_mut().enter(node);
        let action = self.visitor.enter(cx, node);
        match &action {
            VisitAction::Skip => cx.type_info_mut().leave(node),
            VisitAction::Replace(replacement) => {
                cx.type_info_mut().leave(node);
                cx.type_info_mut().enter(replacement.as_node_ref());
            },
            VisitAction::Continue | VisitAction::Break => {},
        }
        action
    }

    fn leave(&mut self, cx: &mut C, node: AstNodeRef<'_>) -> VisitAction {
        let action = self.visitor.leave(cx, node);
        cx.type_info_mut().leave(node);
        action
    }
}
