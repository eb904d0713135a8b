use crate::types::Field;
use indexmap::IndexMap;

/// Accessors shared by object and interface types.
pub(crate) trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn field(&self, name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn name(&self) -> &str;
}
