use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Each root operation type is defined once across the schema definition,
/// its extensions and the schema being extended.
pub fn unique_operation_types<'a>(context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    let existing_operation_types = [
        ast::OperationType::Query,
        ast::OperationType::Mutation,
        ast::OperationType::Subscription,
    ]
    .into_iter()
    .filter(|&operation| {
        context
            .schema()
            .is_some_and(|schema| schema.root_type(operation).is_some())
    })
    .collect();
    Box::new(UniqueOperationTypes {
        existing_operation_types,
        defined_operation_types: HashMap::new(),
    })
}

struct UniqueOperationTypes<'a> {
    existing_operation_types: Vec<ast::OperationType>,
    defined_operation_types: HashMap<ast::OperationType, &'a ast::OperationTypeDefinition>,
}

impl<'a> UniqueOperationTypes<'a> {
    fn check_operation_types(
        &mut self,
        context: &mut ValidationContext<'a>,
        operation_types: &'a [ast::OperationTypeDefinition],
    ) {
        for operation_type in operation_types {
            let operation = operation_type.operation;
            if self.existing_operation_types.contains(&operation) {
                context.report_error(
                    GraphQLError::new(format!(
                        "Type for {operation} already defined in the schema. It cannot be \
                        redefined.",
                    ))
                    .with_node(operation_type.loc.as_ref()),
                );
            } else if let Some(already_defined) = self.defined_operation_types.get(&operation) {
                context.report_error(
                    GraphQLError::new(format!("There can be only one {operation} type in schema."))
                        .with_nodes([already_defined.loc.as_ref(), operation_type.loc.as_ref()]),
                );
            } else {
                self.defined_operation_types.insert(operation, operation_type);
            }
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueOperationTypes<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::SchemaDefinition(definition) => {
                self.check_operation_types(context, &definition.operation_types);
                VisitorAction::Skip
            },
            AstNode::SchemaExtension(extension) => {
                self.check_operation_types(context, &extension.operation_types);
                VisitorAction::Skip
            },
            _ => VisitorAction::Continue,
        }
    }
}
