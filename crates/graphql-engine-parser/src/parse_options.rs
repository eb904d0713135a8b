/// Knobs controlling what the parser attaches to the AST it builds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Leave every node's `span` as `None`.
    pub no_location: bool,

    /// Do not retain the [`Source`](crate::Source) on the resulting
    /// [`Document`](crate::ast::Document).
    pub no_source: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn no_location(mut self, no_location: bool) -> Self {
        self.no_location = no_location;
        self
    }

    #[must_use]
    pub fn no_source(mut self, no_source: bool) -> Self {
        self.no_source = no_source;
        self
    }
}
