use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use indexmap::IndexMap;

/// Each argument of a field or directive definition is defined once.
pub fn unique_argument_definition_names<'a>(
    _context: &ValidationContext<'a>,
) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueArgumentDefinitionNames)
}

struct UniqueArgumentDefinitionNames;

fn check_arg_uniqueness(
    context: &mut ValidationContext<'_>,
    parent_name: &str,
    arguments: &[ast::InputValueDefinition],
) {
    let mut seen_args = IndexMap::<&str, Vec<&ast::Name>>::new();
    for arg in arguments {
        seen_args.entry(arg.name.value.as_str()).or_default().push(&arg.name);
    }
    for (arg_name, names) in seen_args {
        if names.len() > 1 {
            context.report_error(
                GraphQLError::new(format!(
                    "Argument '{parent_name}({arg_name}:)' can only be defined once.",
                ))
                .with_nodes(names.iter().map(|name| name.loc.as_ref())),
            );
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueArgumentDefinitionNames {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let (type_name, fields) = match node {
            AstNode::DirectiveDefinition(def) => {
                check_arg_uniqueness(context, &format!("@{}", def.name.value), &def.arguments);
                return VisitorAction::Skip;
            },
            AstNode::ObjectTypeDefinition(def) => (&def.name.value, &def.fields),
            AstNode::ObjectTypeExtension(ext) => (&ext.name.value, &ext.fields),
            AstNode::InterfaceTypeDefinition(def) => (&def.name.value, &def.fields),
            AstNode::InterfaceTypeExtension(ext) => (&ext.name.value, &ext.fields),
            _ => return VisitorAction::Continue,
        };
        for field_def in fields {
            let parent_name = format!("{type_name}.{}", field_def.name.value);
            check_arg_uniqueness(context, &parent_name, &field_def.arguments);
        }
        VisitorAction::Skip
    }
}
