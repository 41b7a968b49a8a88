mod schema_tests;
mod validate_schema_tests;
