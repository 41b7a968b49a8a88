use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use crate::validation::rules::directive_definitions;
use crate::validation::rules::schema_directives;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Every argument passed to a field or directive is one it defines.
pub fn known_argument_names<'a>(context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(KnownArgumentNames {
        directive_args: directive_args(context),
        check_fields: true,
    })
}

/// The directive half of [`known_argument_names`], for type-system
/// documents.
pub fn known_argument_names_on_directives<'a>(
    context: &ValidationContext<'a>,
) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(KnownArgumentNames {
        directive_args: directive_args(context),
        check_fields: false,
    })
}

fn directive_args(context: &ValidationContext<'_>) -> HashMap<String, Vec<String>> {
    let mut directive_args = HashMap::new();
    for directive in schema_directives(context) {
        directive_args.insert(directive.name.clone(), directive.args.keys().cloned().collect());
    }
    for definition in directive_definitions(context.document()) {
        let arg_names = definition
            .arguments
            .iter()
            .map(|arg| arg.name.value.clone())
            .collect();
        directive_args.insert(definition.name.value.clone(), arg_names);
    }
    directive_args
}

struct KnownArgumentNames {
    directive_args: HashMap<String, Vec<String>>,
    check_fields: bool,
}

impl<'a> ValidationRule<'a> for KnownArgumentNames {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::Directive(directive) => {
                let directive_name = &directive.name.value;
                let Some(known_args) = self.directive_args.get(directive_name) else {
                    return VisitorAction::Skip;
                };
                for arg in &directive.arguments {
                    let arg_name = &arg.name.value;
                    if known_args.contains(arg_name) {
                        continue;
                    }
                    let suggestions = suggestion_list(arg_name, known_args.iter().map(String::as_str));
                    context.report_error(
                        GraphQLError::new(format!(
                            "Unknown argument '{arg_name}' on directive '@{directive_name}'.{}",
                            did_you_mean(&suggestions, None),
                        ))
                        .with_node(arg.loc.as_ref()),
                    );
                }
                VisitorAction::Skip
            },
            AstNode::Argument(arg) if self.check_fields => {
                if context.get_argument().is_some() {
                    return VisitorAction::Continue;
                }
                let (Some(field_def), Some(parent_type)) =
                    (context.get_field_def(), context.get_parent_type())
                else {
                    return VisitorAction::Continue;
                };
                let arg_name = &arg.name.value;
                let suggestions = suggestion_list(arg_name, field_def.args.keys().map(String::as_str));
                context.report_error(
                    GraphQLError::new(format!(
                        "Unknown argument '{arg_name}' on field '{}.{}'.{}",
                        parent_type.name(),
                        field_def.name,
                        did_you_mean(&suggestions, None),
                    ))
                    .with_node(arg.loc.as_ref()),
                );
                VisitorAction::Continue
            },
            _ => VisitorAction::Continue,
        }
    }
}
