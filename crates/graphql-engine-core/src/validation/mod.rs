//! Document validation.
//!
//! [`validate`] checks an executable document against a schema with the
//! [`specified_rules`]; [`validate_sdl`] checks a type-system document,
//! optionally as an extension of an existing schema, with the
//! [`specified_sdl_rules`]. All rules share one traversal: a rule that
//! skips a subtree or breaks off only stops itself.

mod specified_rules;
mod validate;
mod validation_context;
mod validation_rule;

pub mod rules;

pub use specified_rules::specified_rules;
pub use specified_rules::specified_sdl_rules;
pub use validate::validate;
pub use validate::validate_sdl;
pub use validate::ValidationOptions;
pub use validate::DEFAULT_MAX_ERRORS;
pub use validation_context::ValidationContext;
pub use validation_context::VariableUsage;
pub use validation_rule::RuleFactory;
pub use validation_rule::ValidationRule;

#[cfg(test)]
mod tests;
