//! Static checks of an executable document against a [`Schema`].
//!
//! Each rule is a [`Visitor`](graphql_engine_parser::visitor::Visitor) over
//! a [`ValidationContext`]. [`validate()`] runs every rule of
//! [`specified_rules()`] in a single traversal and returns all of their
//! errors; an empty list means the document may be executed.
//!
//! [`Schema`]: crate::Schema

pub mod rules;
mod validate;
mod validation_context;
mod validation_rule;

pub use validate::validate;
pub use validate::validate_with_rules;
pub use validation_context::ValidationContext;
pub use validation_context::VariableUsage;
pub use validation_rule::ValidationRule;
pub use validation_rule::specified_rules;
