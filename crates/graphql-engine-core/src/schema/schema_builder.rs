use crate::introspection;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::is_equal_type;
use crate::types::is_type_sub_type_of;
use crate::types::scalars;
use crate::types::specified_directives;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Assembles and validates a [`Schema`].
///
/// The schema's types are every type reachable from the root operation
/// types, from the types added with [`types()`](Self::types) and from the
/// arguments of its directives. Types refer to each other by name, so every
/// referenced name must be supplied to the builder unless it is a built-in
/// scalar or introspection type.
#[derive(Debug)]
pub struct SchemaBuilder {
    directives: Vec<Directive>,
    mutation: Option<GraphQLType>,
    query: GraphQLType,
    subscription: Option<GraphQLType>,
    types: Vec<GraphQLType>,
}

impl SchemaBuilder {
    pub fn new(query: GraphQLType) -> Self {
        Self {
            directives: vec![],
            mutation: None,
            query,
            subscription: None,
            types: vec![],
        }
    }

    #[must_use]
    pub fn mutation(mut self, mutation: impl Into<GraphQLType>) -> Self {
        self.mutation = Some(mutation.into());
        self
    }

    #[must_use]
    pub fn subscription(mut self, subscription: impl Into<GraphQLType>) -> Self {
        self.subscription = Some(subscription.into());
        self
    }

    /// Adds a type, whether or not any root references it. Object types
    /// that only appear as implementations of an interface must be added
    /// this way.
    #[must_use]
    pub fn add_type(mut self, graphql_type: impl Into<GraphQLType>) -> Self {
        self.types.push(graphql_type.into());
        self
    }

    #[must_use]
    pub fn types(mut self, types: impl IntoIterator<Item = GraphQLType>) -> Self {
        self.types.extend(types);
        self
    }

    /// Adds a directive in addition to the built-in ones.
    #[must_use]
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn build(self) -> Result<Schema> {
        let query_type = root_object("query", &self.query)?;
        let mutation_type = self
            .mutation
            .as_ref()
            .map(|mutation| root_object("mutation", mutation))
            .transpose()?;
        let subscription_type = self
            .subscription
            .as_ref()
            .map(|subscription| root_object("subscription", subscription))
            .transpose()?;

        let mut directives = IndexMap::new();
        for directive in specified_directives().into_iter().chain(self.directives) {
            if directives.contains_key(&directive.name) {
                return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                    directive_name: directive.name,
                });
            }
            directives.insert(directive.name.clone(), directive);
        }

        let user_types: Vec<GraphQLType> = [Some(self.query), self.mutation, self.subscription]
            .into_iter()
            .flatten()
            .chain(self.types)
            .collect();
        let pool = build_type_pool(&user_types)?;

        let mut roots: Vec<(String, String)> = user_types
            .iter()
            .map(|graphql_type| (graphql_type.name().to_string(), "schema".to_string()))
            .collect();
        roots.push((introspection::SCHEMA.to_string(), "schema".to_string()));
        for directive in directives.values() {
            for argument in directive.arguments.values() {
                roots.push((
                    argument.value_type.innermost_name().to_string(),
                    format!("@{}({}:)", directive.name, argument.name),
                ));
            }
        }
        let types = collect_reachable_types(&pool, roots)?;
        let possible_types = compute_possible_types(&types);

        let schema = Schema {
            directives,
            mutation_type,
            possible_types,
            query_type,
            subscription_type,
            types,
        };
        validate_types(&schema)?;

        log::debug!(
            "built schema with {} types and {} directives",
            schema.types.len(),
            schema.directives.len(),
        );
        Ok(schema)
    }
}

fn root_object(operation: &'static str, root: &GraphQLType) -> Result<Arc<ObjectType>> {
    root.as_object_arc()
        .cloned()
        .ok_or_else(|| SchemaBuildError::InvalidRootOperationType {
            operation,
            type_name: root.name().to_string(),
        })
}

/// Every definition the schema could draw from, by name: the user's types
/// first, then any built-in the user did not replace.
fn build_type_pool(user_types: &[GraphQLType]) -> Result<IndexMap<String, GraphQLType>> {
    let builtins: Vec<GraphQLType> = scalars::specified_scalars()
        .into_iter()
        .chain(introspection::introspection_types())
        .collect();

    let mut pool: IndexMap<String, GraphQLType> = IndexMap::new();
    for graphql_type in user_types {
        let name = graphql_type.name();
        let is_builtin = builtins.iter().any(|builtin| builtin.is_same_definition(graphql_type));
        if name.starts_with("__") && !is_builtin {
            return Err(SchemaBuildError::InvalidDunderName {
                name: name.to_string(),
            });
        }
        match pool.get(name) {
            Some(existing) if !existing.is_same_definition(graphql_type) => {
                return Err(SchemaBuildError::DuplicateTypeDefinition {
                    type_name: name.to_string(),
                });
            },
            Some(_) => {},
            None => {
                pool.insert(name.to_string(), graphql_type.clone());
            },
        }
    }
    for builtin in builtins {
        pool.entry(builtin.name().to_string()).or_insert(builtin);
    }
    Ok(pool)
}

/// Names `graphql_type` refers to, each paired with a description of where
/// the reference appears.
fn referenced_type_names(graphql_type: &GraphQLType) -> Vec<(String, String)> {
    let type_name = graphql_type.name();
    let mut names = vec![];
    match graphql_type {
        GraphQLType::Object(object) => {
            for interface in object.interface_names() {
                names.push((interface.clone(), type_name.to_string()));
            }
        },
        GraphQLType::Union(union_type) => {
            for member in union_type.member_type_names() {
                names.push((member.clone(), type_name.to_string()));
            }
        },
        GraphQLType::InputObject(input_object) => {
            for field in input_object.fields().values() {
                names.push((
                    field.value_type.innermost_name().to_string(),
                    format!("{type_name}.{}", field.name),
                ));
            }
        },
        _ => {},
    }
    if let Some(fields) = graphql_type.fields() {
        for field in fields.values() {
            names.push((
                field.field_type.innermost_name().to_string(),
                format!("{type_name}.{}", field.name),
            ));
            for argument in field.arguments.values() {
                names.push((
                    argument.value_type.innermost_name().to_string(),
                    format!("{type_name}.{}({}:)", field.name, argument.name),
                ));
            }
        }
    }
    names
}

/// Depth-first closure over type references, in the order a recursive walk
/// from each root would first reach each type.
fn collect_reachable_types(
    pool: &IndexMap<String, GraphQLType>,
    roots: Vec<(String, String)>,
) -> Result<IndexMap<String, GraphQLType>> {
    let mut types: IndexMap<String, GraphQLType> = IndexMap::new();
    let mut stack: Vec<(String, String)> = roots.into_iter().rev().collect();
    while let Some((name, referenced_by)) = stack.pop() {
        if types.contains_key(&name) {
            continue;
        }
        let Some(graphql_type) = pool.get(&name) else {
            return Err(SchemaBuildError::DanglingTypeReference {
                type_name: name,
                referenced_by,
            });
        };
        stack.extend(referenced_type_names(graphql_type).into_iter().rev());
        types.insert(name, graphql_type.clone());
    }
    Ok(types)
}

fn compute_possible_types(
    types: &IndexMap<String, GraphQLType>,
) -> HashMap<String, Vec<Arc<ObjectType>>> {
    let mut possible_types: HashMap<String, Vec<Arc<ObjectType>>> = HashMap::new();
    for graphql_type in types.values() {
        match graphql_type {
            GraphQLType::Union(union_type) => {
                let members = union_type
                    .member_type_names()
                    .iter()
                    .filter_map(|name| types.get(name)?.as_object_arc().cloned())
                    .collect();
                possible_types.insert(union_type.name().to_string(), members);
            },
            GraphQLType::Interface(interface) => {
                possible_types.entry(interface.name().to_string()).or_default();
            },
            GraphQLType::Object(object) => {
                for interface_name in object.interface_names() {
                    possible_types
                        .entry(interface_name.clone())
                        .or_default()
                        .push(object.clone());
                }
            },
            _ => {},
        }
    }
    possible_types
}

fn validate_types(schema: &Schema) -> Result<()> {
    for graphql_type in schema.types().values() {
        match graphql_type {
            GraphQLType::Object(object) => {
                validate_fields(schema, graphql_type)?;
                for interface_name in object.interface_names() {
                    validate_implementation(schema, object, interface_name)?;
                }
            },
            GraphQLType::Interface(_) => validate_fields(schema, graphql_type)?,
            GraphQLType::Union(union_type) => {
                if union_type.member_type_names().is_empty() {
                    return Err(SchemaBuildError::EmptyFieldSet {
                        type_name: union_type.name().to_string(),
                        members: "member types",
                    });
                }
                for member in union_type.member_type_names() {
                    if schema.type_named(member).and_then(GraphQLType::as_object).is_none() {
                        return Err(SchemaBuildError::InvalidUnionMember {
                            union_name: union_type.name().to_string(),
                            member_name: member.clone(),
                        });
                    }
                }
            },
            GraphQLType::InputObject(input_object) => {
                if input_object.fields().is_empty() {
                    return Err(SchemaBuildError::EmptyFieldSet {
                        type_name: input_object.name().to_string(),
                        members: "fields",
                    });
                }
                for field in input_object.fields().values() {
                    ensure_input_type(
                        schema,
                        &field.value_type,
                        || format!("{}.{}", input_object.name(), field.name),
                    )?;
                }
            },
            GraphQLType::Enum(enum_type) => {
                if enum_type.values().is_empty() {
                    return Err(SchemaBuildError::EmptyFieldSet {
                        type_name: enum_type.name().to_string(),
                        members: "values",
                    });
                }
            },
            GraphQLType::Scalar(_) => {},
        }
    }
    for directive in schema.directives().values() {
        for argument in directive.arguments.values() {
            ensure_input_type(
                schema,
                &argument.value_type,
                || format!("@{}({}:)", directive.name, argument.name),
            )?;
        }
    }
    Ok(())
}

fn validate_fields(schema: &Schema, graphql_type: &GraphQLType) -> Result<()> {
    let type_name = graphql_type.name();
    let Some(fields) = graphql_type.fields().filter(|fields| !fields.is_empty()) else {
        return Err(SchemaBuildError::EmptyFieldSet {
            type_name: type_name.to_string(),
            members: "fields",
        });
    };
    for field in fields.values() {
        if !field.field_type.is_output_type(schema) {
            return Err(SchemaBuildError::NonOutputTypeInOutputPosition {
                location: format!("{type_name}.{}", field.name),
                type_name: field.field_type.to_string(),
            });
        }
        for argument in field.arguments.values() {
            ensure_input_type(
                schema,
                &argument.value_type,
                || format!("{type_name}.{}({}:)", field.name, argument.name),
            )?;
        }
    }
    Ok(())
}

fn ensure_input_type(
    schema: &Schema,
    annotation: &TypeAnnotation,
    location: impl FnOnce() -> String,
) -> Result<()> {
    if annotation.is_input_type(schema) {
        Ok(())
    } else {
        Err(SchemaBuildError::NonInputTypeInInputPosition {
            location: location(),
            type_name: annotation.to_string(),
        })
    }
}

fn validate_implementation(
    schema: &Schema,
    object: &ObjectType,
    interface_name: &str,
) -> Result<()> {
    let invalid = |reason: String| SchemaBuildError::InvalidInterfaceImplementation {
        type_name: object.name().to_string(),
        interface_name: interface_name.to_string(),
        reason,
    };

    let Some(interface) = schema.type_named(interface_name).and_then(GraphQLType::as_interface)
    else {
        return Err(invalid(format!("`{interface_name}` is not an interface type")));
    };
    if object.interface_names().iter().filter(|name| *name == interface_name).count() > 1 {
        return Err(invalid("the interface is declared more than once".to_string()));
    }

    let object_name = object.name();
    for (field_name, interface_field) in interface.fields() {
        let Some(object_field) = object.field(field_name) else {
            return Err(invalid(format!(
                "Interface field {interface_name}.{field_name} expected but {object_name} does \
                 not provide it.",
            )));
        };
        if !is_type_sub_type_of(schema, &object_field.field_type, &interface_field.field_type) {
            return Err(invalid(format!(
                "Interface field {interface_name}.{field_name} expects type {} but \
                 {object_name}.{field_name} provides type {}.",
                interface_field.field_type, object_field.field_type,
            )));
        }

        for (arg_name, interface_arg) in &interface_field.arguments {
            let Some(object_arg) = object_field.arguments.get(arg_name) else {
                return Err(invalid(format!(
                    "Interface field argument {interface_name}.{field_name}({arg_name}:) \
                     expected but {object_name}.{field_name} does not provide it.",
                )));
            };
            if !is_equal_type(&interface_arg.value_type, &object_arg.value_type) {
                return Err(invalid(format!(
                    "Interface field argument {interface_name}.{field_name}({arg_name}:) \
                     expects type {} but {object_name}.{field_name}({arg_name}:) provides \
                     type {}.",
                    interface_arg.value_type, object_arg.value_type,
                )));
            }
        }

        for (arg_name, object_arg) in &object_field.arguments {
            if !interface_field.arguments.contains_key(arg_name) && object_arg.value_type.is_non_null() {
                return Err(invalid(format!(
                    "Object field argument {object_name}.{field_name}({arg_name}:) is of \
                     required type {} but is not also provided by the interface \
                     {interface_name}.{field_name}.",
                    object_arg.value_type,
                )));
            }
        }
    }
    Ok(())
}
