pub(crate) mod fixtures;
mod validation_tests;
