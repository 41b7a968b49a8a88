use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;

/// A document defines at most one schema, and none when extending a schema
/// that already has one.
pub fn lone_schema_definition<'a>(context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    let already_defined = context.schema().is_some_and(|schema| {
        schema.ast_node.is_some()
            || schema.query_type().is_some()
            || schema.mutation_type().is_some()
            || schema.subscription_type().is_some()
    });
    Box::new(LoneSchemaDefinition {
        already_defined,
        schema_definitions_count: 0,
    })
}

struct LoneSchemaDefinition {
    already_defined: bool,
    schema_definitions_count: usize,
}

impl<'a> ValidationRule<'a> for LoneSchemaDefinition {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::SchemaDefinition(definition) = node else {
            return VisitorAction::Continue;
        };
        if self.already_defined {
            context.report_error(
                GraphQLError::new("Cannot define a new schema within a schema extension.")
                    .with_node(definition.loc.as_ref()),
            );
        } else {
            if self.schema_definitions_count > 0 {
                context.report_error(
                    GraphQLError::new("Must provide only one schema definition.")
                        .with_node(definition.loc.as_ref()),
                );
            }
            self.schema_definitions_count += 1;
        }
        VisitorAction::Continue
    }
}
