mod type_annotation_tests;
mod type_comparators_tests;
