use graphql_engine_core::Variables;
use serde::Deserialize;

/// A request as clients send it: the document text, its variables and the
/// operation to run.
///
/// Deserializes from the conventional `{query, variables?, operationName?}`
/// JSON body; `null` variables are treated as none.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,

    #[serde(default)]
    pub variables: Option<Variables>,

    #[serde(default)]
    pub operation_name: Option<String>,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    #[must_use]
    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = Some(variables);
        self
    }

    #[must_use]
    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }
}
