//! Kind-driven traversal of the AST.
//!
//! [`visit()`] walks a tree in the order given by
//! [`NodeKind::child_fields()`](crate::ast::NodeKind::child_fields), calling a
//! [`Visitor`]'s `enter` and `leave` hooks at every node. Hooks steer the walk
//! with a [`VisitAction`]. [`ParallelVisitor`] runs several visitors in one
//! pass, each with its own skip and break state.

mod parallel_visitor;
mod visit;

pub use parallel_visitor::ParallelVisitor;
pub use visit::visit;
pub use visit::VisitAction;
pub use visit::Visitor;
