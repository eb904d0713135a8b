//! Tracks the statically known types at each point of a document walk.

mod type_info;
mod type_info_visitor;

pub use type_info::TypeInfo;
pub use type_info::field_definition;
pub use type_info_visitor::TypeInfoVisitor;
pub use type_info_visitor::WithTypeInfo;
