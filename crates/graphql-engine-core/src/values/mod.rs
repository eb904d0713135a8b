//! Coercion of input values, shared by validation and execution.
//!
//! Literals written in a document go through [`value_from_ast()`] (or are
//! checked with [`is_valid_literal_value()`]); values supplied as request
//! variables go through [`coerce_input_value()`]. [`ast_from_value()`] goes
//! the other way, e.g. to print default values.

mod ast_from_value;
mod coerce_input_value;
mod is_valid_literal_value;
mod value_from_ast;

pub use ast_from_value::ast_from_value;
pub use coerce_input_value::coerce_input_value;
pub use is_valid_literal_value::is_valid_literal_value;
pub use value_from_ast::value_from_ast;
pub use value_from_ast::value_from_ast_untyped;

#[cfg(test)]
mod tests;
