use crate::GraphQLError;
use crate::Value;
use serde::Serialize;

/// The response to a request: `{data?, errors?}`.
///
/// `data` is absent only when the request was rejected before execution
/// began (no operation could be selected, variables failed to coerce, or
/// the document did not parse or validate). Otherwise it is present,
/// possibly `null` or with `null` subtrees where errors occurred.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}

impl ExecutionResult {
    /// A request rejected before execution.
    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self { data: None, errors }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let mut response = serde_json::Map::new();
        if let Some(data) = &self.data {
            response.insert("data".to_string(), data.clone());
        }
        if !self.errors.is_empty() {
            response.insert(
                "errors".to_string(),
                Value::Array(
                    self.errors
                        .iter()
                        .map(|error| serde_json::to_value(error).unwrap_or(Value::Null))
                        .collect(),
                ),
            );
        }
        Value::Object(response)
    }
}
