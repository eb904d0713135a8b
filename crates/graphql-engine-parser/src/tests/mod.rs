mod graphql_parser_schema_tests;
mod printer_tests;
mod str_graphql_token_source_tests;
mod utils;
mod visitor_tests;
