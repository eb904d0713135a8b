use crate::GraphQLError;
use crate::Value;
use crate::Variables;
use crate::schema::Schema;
use crate::types::InputValue;
use crate::types::type_from_ast;
use crate::values::coerce_input_value;
use crate::values::value_from_ast;
use graphql_engine_parser::ast;
use graphql_engine_parser::printer::print_type;
use graphql_engine_parser::printer::print_value;
use indexmap::IndexMap;

/// Coerces the raw variable values of a request against an operation's
/// variable definitions, applying defaults.
///
/// Every variable is checked; all problems are returned together.
pub fn get_variable_values(
    schema: &Schema,
    definitions: &[ast::VariableDefinition],
    inputs: &Variables,
) -> Result<Variables, Vec<GraphQLError>> {
    let mut errors = vec![];
    let mut coerced = Variables::new();
    for definition in definitions {
        let name = definition.variable.name.as_str();
        let Some(var_type) = type_from_ast(schema, &definition.var_type)
            .filter(|var_type| var_type.is_input_type(schema))
        else {
            errors.push(GraphQLError::with_spans(
                format!(
                    "Variable \"${name}\" expected value of type \"{}\" which cannot be used as \
                     an input type.",
                    print_type(&definition.var_type),
                ),
                [definition.var_type.span()],
            ));
            continue;
        };

        match inputs.get(name) {
            None => {
                if let Some(default_value) = &definition.default_value {
                    if let Some(value) = value_from_ast(default_value, &var_type, schema, None) {
                        coerced.insert(name.to_string(), value);
                    }
                } else if var_type.is_non_null() {
                    errors.push(GraphQLError::with_spans(
                        format!(
                            "Variable \"${name}\" of required type \"{var_type}\" was not provided.",
                        ),
                        [definition.span],
                    ));
                }
            },
            Some(Value::Null) if var_type.is_non_null() => {
                errors.push(GraphQLError::with_spans(
                    format!("Variable \"${name}\" of non-null type \"{var_type}\" must not be null."),
                    [definition.span],
                ));
            },
            Some(Value::Null) => {
                coerced.insert(name.to_string(), Value::Null);
            },
            Some(value) => match coerce_input_value(value, &var_type, schema) {
                Ok(value) => {
                    coerced.insert(name.to_string(), value);
                },
                Err(reasons) => {
                    errors.extend(reasons.into_iter().map(|reason| {
                        GraphQLError::with_spans(
                            format!("Variable \"${name}\" got invalid value {value}; {reason}"),
                            [definition.span],
                        )
                    }));
                },
            },
        }
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}

/// Coerces the arguments written on a field or directive against their
/// definitions, substituting variables and applying defaults.
pub fn get_argument_values(
    schema: &Schema,
    definitions: &IndexMap<String, InputValue>,
    arguments: &[ast::Argument],
    variables: &Variables,
) -> Result<Variables, GraphQLError> {
    let mut coerced = Variables::new();
    for (name, definition) in definitions {
        let arg_type = &definition.value_type;
        let argument = arguments.iter().find(|argument| argument.name.as_str() == name);
        let Some(argument) = argument else {
            if let Some(default_value) = &definition.default_value {
                coerced.insert(name.clone(), default_value.clone());
            } else if arg_type.is_non_null() {
                return Err(GraphQLError::new(format!(
                    "Argument \"{name}\" of required type \"{arg_type}\" was not provided.",
                )));
            }
            continue;
        };

        if let ast::Value::Variable(variable) = &argument.value {
            let variable_name = variable.name.as_str();
            match variables.get(variable_name) {
                Some(Value::Null) if arg_type.is_non_null() => {
                    return Err(GraphQLError::with_spans(
                        format!(
                            "Argument \"{name}\" of non-null type \"{arg_type}\" must not be null.",
                        ),
                        [argument.value.span()],
                    ));
                },
                Some(value) => {
                    coerced.insert(name.clone(), value.clone());
                },
                None => {
                    if let Some(default_value) = &definition.default_value {
                        coerced.insert(name.clone(), default_value.clone());
                    } else if arg_type.is_non_null() {
                        return Err(GraphQLError::with_spans(
                            format!(
                                "Argument \"{name}\" of required type \"{arg_type}\" was provided \
                                 the variable \"${variable_name}\" which was not provided a \
                                 runtime value.",
                            ),
                            [argument.value.span()],
                        ));
                    }
                },
            }
            continue;
        }

        match value_from_ast(&argument.value, arg_type, schema, Some(variables)) {
            Some(value) => {
                coerced.insert(name.clone(), value);
            },
            None => {
                return Err(GraphQLError::with_spans(
                    format!(
                        "Argument \"{name}\" has invalid value {}.",
                        print_value(&argument.value),
                    ),
                    [argument.value.span()],
                ));
            },
        }
    }
    Ok(coerced)
}
