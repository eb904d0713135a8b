use crate::GraphQLRequest;
use graphql_engine_core::GraphQLError;
use graphql_engine_core::Schema;
use graphql_engine_core::Value;
use graphql_engine_core::execution::ContextValue;
use graphql_engine_core::execution::ExecutionArgs;
use graphql_engine_core::execution::ExecutionResult;
use graphql_engine_core::execution::execute;
use graphql_engine_core::validation::validate;
use graphql_engine_parser::ParseOptions;
use graphql_engine_parser::Source;
use graphql_engine_parser::parse;

/// Parses, validates and executes `request` against `schema`.
///
/// A document that fails to parse or validate is rejected without
/// executing: the result then has no `data`, only `errors`.
pub async fn graphql(schema: &Schema, request: GraphQLRequest) -> ExecutionResult {
    graphql_with(schema, request, Value::Null, None).await
}

/// Like [`graphql()`], with a root value for the root fields' resolvers and
/// a context value shared by every resolver.
pub async fn graphql_with(
    schema: &Schema,
    request: GraphQLRequest,
    root_value: Value,
    context_value: Option<ContextValue>,
) -> ExecutionResult {
    let GraphQLRequest {
        query,
        variables,
        operation_name,
    } = request;

    let source = Source::new(query);
    let document = match parse(&source, ParseOptions::default()) {
        Ok(document) => document,
        Err(err) => {
            log::debug!("rejected request: {}", err.format_oneline());
            return ExecutionResult::from_errors(vec![GraphQLError::from(err)]);
        },
    };

    let validation_errors = validate(schema, &document);
    if !validation_errors.is_empty() {
        return ExecutionResult::from_errors(validation_errors);
    }

    let mut args = ExecutionArgs::new(schema, &document)
        .root_value(root_value)
        .variable_values(variables.unwrap_or_default());
    if let Some(operation_name) = operation_name {
        args = args.operation_name(operation_name);
    }
    if let Some(context_value) = context_value {
        args = args.context_arc(context_value);
    }
    execute(args).await
}
