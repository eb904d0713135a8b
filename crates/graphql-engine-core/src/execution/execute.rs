use crate::GraphQLError;
use crate::PathSegment;
use crate::Value;
use crate::Variables;
use crate::execution::ContextValue;
use crate::execution::ExecutionArgs;
use crate::execution::ExecutionResult;
use crate::execution::ResolveInfo;
use crate::execution::ResolveParams;
use crate::execution::collect_fields::FieldCollector;
use crate::execution::collect_fields::FieldMap;
use crate::execution::values::get_argument_values;
use crate::execution::values::get_variable_values;
use crate::schema::Schema;
use crate::type_info;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use futures::FutureExt;
use futures::future;
use futures::future::BoxFuture;
use graphql_engine_parser::ast;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::collections::HashSet;

type CompletionResult = Result<Value, GraphQLError>;

/// Executes the selected operation of `args.document`.
///
/// The document is expected to have passed validation; an invalid document
/// produces unspecified (but memory-safe) results. A request that cannot
/// start (no operation could be selected or its variables failed to
/// coerce) yields a result without `data`.
pub async fn execute(args: ExecutionArgs<'_>) -> ExecutionResult {
    let ExecutionArgs {
        schema,
        document,
        root_value,
        context_value,
        variable_values,
        operation_name,
    } = args;
    let source_name = document.source.as_ref().map(|source| source.name().to_string());
    let tag_source = |errors: Vec<GraphQLError>| -> Vec<GraphQLError> {
        errors
            .into_iter()
            .map(|mut error| {
                if error.source_name.is_none() {
                    error.source_name = source_name.clone();
                }
                error
            })
            .collect()
    };

    let operation = match select_operation(document, operation_name.as_deref()) {
        Ok(operation) => operation,
        Err(error) => return ExecutionResult::from_errors(tag_source(vec![error])),
    };
    log::debug!(
        "executing {} `{}`",
        operation.operation.as_str(),
        operation.name_str().unwrap_or("<anonymous>"),
    );

    let variable_values =
        match get_variable_values(schema, &operation.variable_definitions, &variable_values) {
            Ok(variable_values) => variable_values,
            Err(errors) => {
                log::debug!("rejected request with {} invalid variable(s)", errors.len());
                return ExecutionResult::from_errors(tag_source(errors));
            },
        };

    let exe = ExecutionContext {
        schema,
        fragments: document
            .fragments()
            .map(|fragment| (fragment.name.value.clone(), fragment))
            .collect(),
        root_value,
        context_value,
        operation,
        variable_values,
        errors: Mutex::new(vec![]),
    };
    let data = execute_operation(&exe).await;
    let errors = tag_source(exe.errors.into_inner());
    log::debug!("finished execution with {} error(s)", errors.len());
    ExecutionResult {
        data: Some(data),
        errors,
    }
}

/// State shared by every field of one execution.
struct ExecutionContext<'a> {
    schema: &'a Schema,
    fragments: HashMap<String, &'a ast::FragmentDefinition>,
    root_value: Value,
    context_value: Option<ContextValue>,
    operation: &'a ast::OperationDefinition,
    variable_values: Variables,
    errors: Mutex<Vec<GraphQLError>>,
}

impl<'a> ExecutionContext<'a> {
    fn record_error(&self, error: GraphQLError) {
        self.errors.lock().push(error);
    }

    fn collector(&self) -> FieldCollector<'a, '_> {
        FieldCollector {
            schema: self.schema,
            fragments: &self.fragments,
            variables: &self.variable_values,
        }
    }
}

fn select_operation<'d>(
    document: &'d ast::Document,
    operation_name: Option<&str>,
) -> Result<&'d ast::OperationDefinition, GraphQLError> {
    if let Some(operation_name) = operation_name {
        return document
            .operations()
            .find(|operation| operation.name_str() == Some(operation_name))
            .ok_or_else(|| {
                GraphQLError::new(format!("Unknown operation named \"{operation_name}\"."))
            });
    }
    let mut operations = document.operations();
    let operation = operations
        .next()
        .ok_or_else(|| GraphQLError::new("Must provide an operation."))?;
    if operations.next().is_some() {
        return Err(GraphQLError::new(
            "Must provide operation name if query contains multiple operations.",
        ));
    }
    Ok(operation)
}

async fn execute_operation(exe: &ExecutionContext<'_>) -> Value {
    let kind = exe.operation.operation;
    let Some(root_type) = exe.schema.root_type(kind) else {
        exe.record_error(GraphQLError::with_spans(
            format!("Schema is not configured for {}s.", kind.as_str()),
            [exe.operation.span],
        ));
        return Value::Null;
    };

    let mut fields = FieldMap::new();
    exe.collector().collect_fields(
        root_type,
        &exe.operation.selection_set,
        &mut fields,
        &mut HashSet::new(),
    );
    let result = if kind == ast::OperationKind::Mutation {
        execute_fields_serially(exe, root_type, &exe.root_value, &[], fields).await
    } else {
        execute_fields(exe, root_type, &exe.root_value, &[], fields).await
    };
    result.unwrap_or_else(|error| {
        exe.record_error(error);
        Value::Null
    })
}

/// Resolves `fields` on `source` concurrently. The first error (in
/// selection order) that could not be contained by a nullable field nulls
/// the whole object.
fn execute_fields<'a>(
    exe: &'a ExecutionContext<'a>,
    parent_type: &'a ObjectType,
    source: &'a Value,
    path: &'a [PathSegment],
    fields: FieldMap<'a>,
) -> BoxFuture<'a, CompletionResult> {
    async move {
        let pending = fields.into_iter().filter_map(|(response_key, field_nodes)| {
            let field_def = field_definition(exe.schema, parent_type, field_nodes.first()?)?;
            let field_path = child_path(path, PathSegment::Key(response_key.clone()));
            Some(
                resolve_field(exe, parent_type, source, field_def, field_nodes, field_path)
                    .map(move |result| (response_key, result)),
            )
        });
        let mut data = serde_json::Map::new();
        for (response_key, result) in future::join_all(pending).await {
            data.insert(response_key, result?);
        }
        Ok(Value::Object(data))
    }
    .boxed()
}

/// Like [`execute_fields()`], but each field finishes before the next one
/// starts. Used for the root fields of a mutation.
///
/// An error at a non-null field nulls the whole object, so the fields after
/// it are never resolved and their side effects never happen.
fn execute_fields_serially<'a>(
    exe: &'a ExecutionContext<'a>,
    parent_type: &'a ObjectType,
    source: &'a Value,
    path: &'a [PathSegment],
    fields: FieldMap<'a>,
) -> BoxFuture<'a, CompletionResult> {
    async move {
        let mut data = serde_json::Map::new();
        for (response_key, field_nodes) in fields {
            let Some(field_def) = field_nodes
                .first()
                .and_then(|field_node| field_definition(exe.schema, parent_type, field_node))
            else {
                continue;
            };
            let field_path = child_path(path, PathSegment::Key(response_key.clone()));
            let value =
                resolve_field(exe, parent_type, source, field_def, field_nodes, field_path).await?;
            data.insert(response_key, value);
        }
        Ok(Value::Object(data))
    }
    .boxed()
}

fn field_definition<'a>(
    schema: &'a Schema,
    parent_type: &ObjectType,
    field_node: &ast::Field,
) -> Option<&'a Field> {
    let parent_type = schema.type_named(parent_type.name())?;
    type_info::field_definition(schema, parent_type, field_node.name.as_str())
}

/// Resolves and completes one field. Errors at a nullable field are
/// recorded and replaced with `null`; errors at a non-null field propagate
/// to the parent.
fn resolve_field<'a>(
    exe: &'a ExecutionContext<'a>,
    parent_type: &'a ObjectType,
    source: &'a Value,
    field_def: &'a Field,
    field_nodes: Vec<&'a ast::Field>,
    path: Vec<PathSegment>,
) -> BoxFuture<'a, CompletionResult> {
    async move {
        let return_type = &field_def.field_type;
        let info = ResolveInfo {
            field_name: &field_def.name,
            field_nodes: &field_nodes,
            return_type,
            parent_type,
            path: &path,
            schema: exe.schema,
            fragments: &exe.fragments,
            root_value: &exe.root_value,
            operation: exe.operation,
            variable_values: &exe.variable_values,
        };
        let completed = match resolve_field_value(exe, source, field_def, &info).await {
            Ok(resolved) => complete_value(exe, return_type, &info, &path, resolved).await,
            Err(error) => Err(error),
        };
        match completed {
            Err(error) if return_type.is_nullable() => {
                exe.record_error(error);
                Ok(Value::Null)
            },
            completed => completed,
        }
    }
    .boxed()
}

async fn resolve_field_value(
    exe: &ExecutionContext<'_>,
    source: &Value,
    field_def: &Field,
    info: &ResolveInfo<'_>,
) -> CompletionResult {
    let arguments = info
        .field_nodes
        .first()
        .map_or(&[][..], |field_node| field_node.arguments.as_slice());
    let args = get_argument_values(exe.schema, &field_def.arguments, arguments, &exe.variable_values)
        .map_err(|error| located_error(error, info.field_nodes, info.path))?;

    let Some(resolver) = &field_def.resolver else {
        return Ok(source.get(&field_def.name).cloned().unwrap_or(Value::Null));
    };
    let params = ResolveParams {
        source,
        args: &args,
        info,
        context: exe.context_value.as_ref(),
    };
    resolver(params).await.map_err(|error| {
        log::warn!(
            "resolver for `{}.{}` failed: {}",
            info.parent_type.name(),
            info.field_name,
            error,
        );
        located_error(GraphQLError::new(error.message()), info.field_nodes, info.path)
    })
}

/// Shapes a resolved value according to `return_type`.
fn complete_value<'a>(
    exe: &'a ExecutionContext<'a>,
    return_type: &'a TypeAnnotation,
    info: &'a ResolveInfo<'a>,
    path: &'a [PathSegment],
    result: Value,
) -> BoxFuture<'a, CompletionResult> {
    async move {
        if result.is_null() {
            if return_type.is_non_null() {
                return Err(field_error(
                    info,
                    path,
                    format!(
                        "Cannot return null for non-nullable field {}.{}.",
                        info.parent_type.name(),
                        info.field_name,
                    ),
                ));
            }
            return Ok(Value::Null);
        }

        if let Some(item_type) = return_type.list_item_type() {
            return complete_list_value(exe, item_type, info, path, result).await;
        }

        let Some(named_type) = return_type.named_type(exe.schema) else {
            return Err(field_error(
                info,
                path,
                format!("Unknown type \"{}\".", return_type.innermost_name()),
            ));
        };
        match named_type {
            GraphQLType::Scalar(scalar) => scalar.serialize(&result).map_err(|reason| {
                log::warn!("could not serialize {result} as `{}`: {reason}", scalar.name());
                field_error(info, path, reason)
            }),
            GraphQLType::Enum(enum_type) => enum_type.serialize(&result).map_err(|_| {
                field_error(
                    info,
                    path,
                    format!(
                        "Expected a value of type \"{}\" but received: {result}",
                        enum_type.name(),
                    ),
                )
            }),
            GraphQLType::Object(object_type) => {
                complete_object_value(exe, object_type, info, path, result).await
            },
            GraphQLType::Interface(_) | GraphQLType::Union(_) => {
                complete_abstract_value(exe, named_type, info, path, result).await
            },
            GraphQLType::InputObject(input_object) => Err(field_error(
                info,
                path,
                format!("Cannot complete value of input type \"{}\".", input_object.name()),
            )),
        }
    }
    .boxed()
}

async fn complete_list_value<'a>(
    exe: &'a ExecutionContext<'a>,
    item_type: &'a TypeAnnotation,
    info: &'a ResolveInfo<'a>,
    path: &'a [PathSegment],
    result: Value,
) -> CompletionResult {
    let Value::Array(items) = result else {
        return Err(field_error(
            info,
            path,
            format!(
                "Expected Iterable, but did not find one for field {}.{}.",
                info.parent_type.name(),
                info.field_name,
            ),
        ));
    };
    let item_paths: Vec<Vec<PathSegment>> = (0..items.len())
        .map(|index| child_path(path, PathSegment::Index(index)))
        .collect();
    let pending = items.into_iter().zip(&item_paths).map(|(item, item_path)| async move {
        match complete_value(exe, item_type, info, item_path, item).await {
            Err(error) if item_type.is_nullable() => {
                exe.record_error(error);
                Ok(Value::Null)
            },
            completed => completed,
        }
    });
    future::join_all(pending)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

async fn complete_abstract_value<'a>(
    exe: &'a ExecutionContext<'a>,
    abstract_type: &'a GraphQLType,
    info: &'a ResolveInfo<'a>,
    path: &'a [PathSegment],
    result: Value,
) -> CompletionResult {
    let runtime_type_name = resolve_runtime_type_name(exe.schema, abstract_type, &result, info)
        .map_err(|message| field_error(info, path, message))?;
    let runtime_type = runtime_type_name
        .as_deref()
        .and_then(|name| exe.schema.type_named(name))
        .and_then(GraphQLType::as_object);
    let Some(runtime_type) = runtime_type else {
        let received = runtime_type_name.as_deref().unwrap_or("undefined");
        let mut message = format!(
            "Abstract type {} must resolve to an Object type at runtime for field {}.{} with \
             value {result}, received \"{received}\".",
            abstract_type.name(),
            info.parent_type.name(),
            info.field_name,
        );
        if runtime_type_name.is_none() {
            message.push_str(&format!(
                " Either the {} type should provide a \"resolveType\" function or each possible \
                 type should provide an \"isTypeOf\" function.",
                abstract_type.name(),
            ));
        }
        return Err(field_error(info, path, message));
    };
    if !exe.schema.is_possible_type(abstract_type, runtime_type.name()) {
        return Err(field_error(
            info,
            path,
            format!(
                "Runtime Object type \"{}\" is not a possible type for \"{}\".",
                runtime_type.name(),
                abstract_type.name(),
            ),
        ));
    }
    complete_object_value(exe, runtime_type, info, path, result).await
}

/// Picks the concrete type name of `value`: the abstract type's own
/// resolver first, then a `__typename` property, then the single possible
/// type whose `is_type_of` accepts the value.
fn resolve_runtime_type_name(
    schema: &Schema,
    abstract_type: &GraphQLType,
    value: &Value,
    info: &ResolveInfo<'_>,
) -> Result<Option<String>, String> {
    let resolved = match abstract_type {
        GraphQLType::Interface(interface) => interface.resolve_type(value, info),
        GraphQLType::Union(union) => union.resolve_type(value, info),
        _ => None,
    };
    if resolved.is_some() {
        return Ok(resolved);
    }
    if let Some(Value::String(type_name)) = value.get("__typename") {
        return Ok(Some(type_name.clone()));
    }

    let claimants: Vec<&str> = schema
        .possible_types(abstract_type)
        .iter()
        .filter(|object_type| object_type.is_type_of(value, info) == Some(true))
        .map(|object_type| object_type.name())
        .collect();
    match claimants.as_slice() {
        [] => Ok(None),
        [claimant] => Ok(Some(claimant.to_string())),
        [first, second, ..] => Err(format!(
            "Abstract type {} must resolve to exactly one Object type at runtime for field \
             {}.{}; both \"{first}\" and \"{second}\" claim the value.",
            abstract_type.name(),
            info.parent_type.name(),
            info.field_name,
        )),
    }
}

fn complete_object_value<'a>(
    exe: &'a ExecutionContext<'a>,
    object_type: &'a ObjectType,
    info: &'a ResolveInfo<'a>,
    path: &'a [PathSegment],
    result: Value,
) -> BoxFuture<'a, CompletionResult> {
    async move {
        if object_type.is_type_of(&result, info) == Some(false) {
            return Err(field_error(
                info,
                path,
                format!("Expected value of type \"{}\" but got: {result}.", object_type.name()),
            ));
        }
        let subfields = exe.collector().collect_subfields(object_type, info.field_nodes);
        execute_fields(exe, object_type, &result, path, subfields).await
    }
    .boxed()
}

fn child_path(path: &[PathSegment], segment: PathSegment) -> Vec<PathSegment> {
    let mut child = Vec::with_capacity(path.len() + 1);
    child.extend_from_slice(path);
    child.push(segment);
    child
}

fn field_error(info: &ResolveInfo<'_>, path: &[PathSegment], message: impl Into<String>) -> GraphQLError {
    located_error(GraphQLError::new(message), info.field_nodes, path)
}

/// Attaches the field's locations and response path unless the error
/// already carries them.
fn located_error(
    mut error: GraphQLError,
    field_nodes: &[&ast::Field],
    path: &[PathSegment],
) -> GraphQLError {
    if error.locations.is_empty() {
        error.locations = field_nodes
            .iter()
            .filter_map(|field_node| field_node.span)
            .map(|span| span.location())
            .collect();
    }
    if error.path.is_none() {
        error.path = Some(path.to_vec());
    }
    error
}
