//! Executes an operation of a validated document against a [`Schema`].
//!
//! [`execute()`] selects the operation, coerces its variables and resolves
//! its selection set. Sibling fields are resolved concurrently (except the
//! root fields of a mutation, which run in document order) and every value
//! is completed according to its field's type. Resolver failures become
//! errors in the [`ExecutionResult`] and null out the nearest nullable
//! position that contains them.
//!
//! [`Schema`]: crate::Schema

mod collect_fields;
mod execute;
mod execution_args;
mod execution_result;
mod resolve_info;
mod values;

pub use execute::execute;
pub use execution_args::ContextValue;
pub use execution_args::ExecutionArgs;
pub use execution_result::ExecutionResult;
pub use resolve_info::ResolveInfo;
pub use resolve_info::ResolveParams;
pub use values::get_argument_values;
pub use values::get_variable_values;
