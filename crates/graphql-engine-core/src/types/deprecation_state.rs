/// Whether a field or enum value is deprecated, and why.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}

impl DeprecationState<'_> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

impl<'a> From<&'a Option<String>> for DeprecationState<'a> {
    fn from(value: &'a Option<String>) -> DeprecationState<'a> {
        match value {
            Some(reason) => DeprecationState::Deprecated(reason.as_str()),
            None => DeprecationState::NotDeprecated,
        }
    }
}
