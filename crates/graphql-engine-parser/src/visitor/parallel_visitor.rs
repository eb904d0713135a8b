use crate::ast::AstNodeRef;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LaneState {
    Active,
    /// Skipping the subtree entered at this depth.
    Skipping(usize),
    Done,
}

/// Runs several visitors over a tree in a single pass.
///
/// Each visitor keeps its own skip and break state: a `Skip` from one only
/// hides that node's subtree from that visitor, and a `Break` only retires
/// that visitor. The composite breaks once every visitor has. `enter` hooks
/// run in order and `leave` hooks in reverse order. The first `Replace`
/// returned by any visitor is passed through to the traversal.
pub struct ParallelVisitor<V> {
    visitors: Vec<V>,
    states: Vec<LaneState>,
    depth: usize,
}

impl<V> ParallelVisitor<V> {
    pub fn new(visitors: Vec<V>) -> Self {
        let states = vec![LaneState::Active; visitors.len()];
        Self {
            visitors,
            states,
            depth: 0,
        }
    }

    pub fn visitors(&self) -> &[V] {
        &self.visitors
    }

    pub fn into_visitors(self) -> Vec<V> {
        self.visitors
    }

    fn all_done(&self) -> bool {
        self.states.iter().all(|state| *state == LaneState::Done)
    }
}

impl<C: ?Sized, V: Visitor<C>> Visitor<C> for ParallelVisitor<V> {
    fn enter(&mut self, cx: &mut C, node: AstNodeRef<'_>) -> VisitAction {
        self.depth += 1;
        for (visitor, state) in self.visitors.iter_mut().zip(self.states.iter_mut()) {
            if *state != LaneState::Active {
                continue;
            }
            match visitor.enter(cx, node) {
                VisitAction::Continue => {},
                VisitAction::Skip => *state = LaneState::Skipping(self.depth),
                VisitAction::Break => *state = LaneState::Done,
                VisitAction::Replace(replacement) => {
                    return VisitAction::Replace(replacement);
                },
            }
        }
        if self.all_done() {
            VisitAction::Break
        } else {
            VisitAction::Continue
        }
    }

    fn leave(&mut self, cx: &mut C, node: AstNodeRef<'_>) -> VisitAction {
        let mut replacement = None;
        let lanes = self.visitors.iter_mut().zip(self.states.iter_mut()).rev();
        for (visitor, state) in lanes {
            match *state {
                LaneState::Skipping(depth) if depth == self.depth => {
                    *state = LaneState::Active;
                },
                LaneState::Active if replacement.is_none() => {
                    match visitor.leave(cx, node) {
                        VisitAction::Continue | VisitAction::Skip => {},
                        VisitAction::Break => *state = LaneState::Done,
                        VisitAction::Replace(node) => replacement = Some(node),
                    }
                },
                _ => {},
            }
        }
        self.depth -= 1;
        match replacement {
            Some(node) => VisitAction::Replace(node),
            None if self.all_done() => VisitAction::Break,
            None => VisitAction::Continue,
        }
    }
}
