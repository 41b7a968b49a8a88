use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;

/// Only operations and fragments may appear in an executable document.
pub fn executable_definitions<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(ExecutableDefinitions)
}

struct ExecutableDefinitions;

impl<'a> ValidationRule<'a> for ExecutableDefinitions {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::Document(document) = node else {
            return VisitorAction::Continue;
        };
        for definition in &document.definitions {
            let name = match definition {
                ast::Definition::Operation(_) | ast::Definition::Fragment(_) => continue,
                ast::Definition::Schema(_) | ast::Definition::SchemaExtension(_) => {
                    "schema".to_string()
                },
                ast::Definition::Type(type_def) => format!("'{}'", type_def.name().value),
                ast::Definition::TypeExtension(extension) => {
                    format!("'{}'", extension.name().value)
                },
                ast::Definition::Directive(directive) => format!("'{}'", directive.name.value),
            };
            context.report_error(
                GraphQLError::new(format!("The {name} definition is not executable."))
                    .with_node(definition.loc()),
            );
        }
        VisitorAction::Skip
    }
}

