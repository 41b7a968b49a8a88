use crate::validation::rules;
use crate::validation::RuleFactory;

const SPECIFIED_RULES: &[RuleFactory] = &[
    rules::executable_definitions,
    rules::unique_operation_names,
    rules::lone_anonymous_operation,
    rules::single_field_subscriptions,
    rules::known_type_names,
    rules::fragments_on_composite_types,
    rules::variables_are_input_types,
    rules::scalar_leafs,
    rules::fields_on_correct_type,
    rules::unique_fragment_names,
    rules::known_fragment_names,
    rules::no_unused_fragments,
    rules::possible_fragment_spreads,
    rules::no_fragment_cycles,
    rules::unique_variable_names,
    rules::no_undefined_variables,
    rules::no_unused_variables,
    rules::known_directives,
    rules::unique_directives_per_location,
    rules::known_argument_names,
    rules::unique_argument_names,
    rules::values_of_correct_type,
    rules::provided_required_arguments,
    rules::variables_in_allowed_position,
    rules::overlapping_fields_can_be_merged,
    rules::unique_input_field_names,
    rules::no_fragment_variables,
];

const SPECIFIED_SDL_RULES: &[RuleFactory] = &[
    rules::lone_schema_definition,
    rules::unique_operation_types,
    rules::unique_type_names,
    rules::unique_enum_value_names,
    rules::unique_field_definition_names,
    rules::unique_argument_definition_names,
    rules::unique_directive_names,
    rules::known_type_names,
    rules::known_directives,
    rules::unique_directives_per_location,
    rules::possible_type_extensions,
    rules::known_argument_names_on_directives,
    rules::unique_argument_names,
    rules::unique_input_field_names,
    rules::provided_required_arguments_on_directives,
];

/// The rules every executable document must pass, in the order they run.
pub fn specified_rules() -> Vec<RuleFactory> {
    SPECIFIED_RULES.to_vec()
}

/// The rules a type-system document must pass, in the order they run.
pub fn specified_sdl_rules() -> Vec<RuleFactory> {
    SPECIFIED_SDL_RULES.to_vec()
}
