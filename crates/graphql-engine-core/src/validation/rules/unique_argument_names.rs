use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use indexmap::IndexMap;

/// A field or directive receives each argument once.
pub fn unique_argument_names<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(UniqueArgumentNames)
}

struct UniqueArgumentNames;

fn check_arg_uniqueness(context: &mut ValidationContext<'_>, arguments: &[ast::Argument]) {
    let mut args_by_name = IndexMap::<&str, Vec<&ast::Argument>>::new();
    for arg in arguments {
        args_by_name.entry(arg.name.value.as_str()).or_default().push(arg);
    }
    for (arg_name, args) in args_by_name {
        if args.len() > 1 {
            context.report_error(
                GraphQLError::new(format!("There can be only one argument named '{arg_name}'."))
                    .with_nodes(args.iter().map(|arg| arg.name.loc.as_ref())),
            );
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueArgumentNames {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::Field(field) => check_arg_uniqueness(context, &field.arguments),
            AstNode::Directive(directive) => check_arg_uniqueness(context, &directive.arguments),
            _ => {},
        }
        VisitorAction::Continue
    }
}
