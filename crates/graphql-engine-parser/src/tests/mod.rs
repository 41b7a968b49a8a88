mod block_string_tests;
mod graphql_error_tests;
mod lexer_tests;
mod parser_tests;
mod printer_tests;
mod source_tests;
mod visitor_tests;
