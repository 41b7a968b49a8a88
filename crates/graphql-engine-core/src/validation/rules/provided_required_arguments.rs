use crate::validation::rules::directive_definitions;
use crate::validation::rules::schema_directives;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::print_ast;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Every required argument of a field or directive is provided. An
/// argument is required when its type is non-null and it has no default.
pub fn provided_required_arguments<'a>(
    context: &ValidationContext<'a>,
) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(ProvidedRequiredArguments {
        required_args_map: required_directive_args(context),
        check_fields: true,
    })
}

/// The directive half of [`provided_required_arguments`], for type-system
/// documents.
pub fn provided_required_arguments_on_directives<'a>(
    context: &ValidationContext<'a>,
) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(ProvidedRequiredArguments {
        required_args_map: required_directive_args(context),
        check_fields: false,
    })
}

/// Required argument names and printed types, per directive.
type RequiredArgs = Vec<(String, String)>;

fn required_directive_args(context: &ValidationContext<'_>) -> HashMap<String, RequiredArgs> {
    let mut required_args_map = HashMap::new();
    for directive in schema_directives(context) {
        let required = directive
            .args
            .values()
            .filter(|arg| arg.is_required())
            .map(|arg| (arg.name.clone(), arg.ty.to_string()))
            .collect();
        required_args_map.insert(directive.name.clone(), required);
    }
    for definition in directive_definitions(context.document()) {
        let required = definition
            .arguments
            .iter()
            .filter(|arg| matches!(arg.ty, ast::Type::NonNull(_)) && arg.default_value.is_none())
            .map(|arg| (arg.name.value.clone(), print_ast(&arg.ty)))
            .collect();
        required_args_map.insert(definition.name.value.clone(), required);
    }
    required_args_map
}

struct ProvidedRequiredArguments {
    required_args_map: HashMap<String, RequiredArgs>,
    check_fields: bool,
}

impl<'a> ValidationRule<'a> for ProvidedRequiredArguments {
    fn leave(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::Directive(directive) => {
                let directive_name = &directive.name.value;
                let Some(required_args) = self.required_args_map.get(directive_name) else {
                    return VisitorAction::Continue;
                };
                for (arg_name, arg_type) in required_args {
                    if directive.arguments.iter().any(|arg| &arg.name.value == arg_name) {
                        continue;
                    }
                    context.report_error(
                        GraphQLError::new(format!(
                            "Directive '@{directive_name}' argument '{arg_name}' of type \
                            '{arg_type}' is required, but it was not provided.",
                        ))
                        .with_node(directive.loc.as_ref()),
                    );
                }
            },
            AstNode::Field(field) if self.check_fields => {
                let Some(field_def) = context.get_field_def() else {
                    return VisitorAction::Continue;
                };
                for (arg_name, arg_def) in &field_def.args {
                    let provided = field.arguments.iter().any(|arg| &arg.name.value == arg_name);
                    if provided || !arg_def.is_required() {
                        continue;
                    }
                    context.report_error(
                        GraphQLError::new(format!(
                            "Field '{}' argument '{arg_name}' of type '{}' is required, but \
                            it was not provided.",
                            field.name.value, arg_def.ty,
                        ))
                        .with_node(field.loc.as_ref()),
                    );
                }
            },
            _ => {},
        }
        VisitorAction::Continue
    }
}
