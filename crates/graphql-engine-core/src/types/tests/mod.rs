mod enum_type_tests;
mod scalar_tests;
mod type_ref_tests;
