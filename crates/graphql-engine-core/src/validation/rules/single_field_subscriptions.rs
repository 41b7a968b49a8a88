use crate::execution::collect_fields;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use serde_json::Map;

/// A subscription selects exactly one root field, and not an
/// introspection field.
pub fn single_field_subscriptions<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(SingleFieldSubscriptions)
}

struct SingleFieldSubscriptions;

impl<'a> ValidationRule<'a> for SingleFieldSubscriptions {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::OperationDefinition(operation) = node else {
            return VisitorAction::Continue;
        };
        if operation.operation != ast::OperationType::Subscription {
            return VisitorAction::Skip;
        }
        let Some(schema) = context.schema() else {
            return VisitorAction::Skip;
        };
        let Some(subscription_type) = schema.root_named_type(ast::OperationType::Subscription) else {
            return VisitorAction::Skip;
        };
        let operation_name = match &operation.name {
            Some(name) => format!("Subscription '{}'", name.value),
            None => "Anonymous Subscription".to_string(),
        };
        let fields = collect_fields(
            schema,
            context.fragments(),
            &Map::new(),
            subscription_type,
            &operation.selection_set,
        );
        if fields.len() > 1 {
            let extra_field_nodes = fields
                .values()
                .skip(1)
                .flatten()
                .map(|field| field.loc.as_ref())
                .collect::<Vec<_>>();
            context.report_error(
                GraphQLError::new(format!(
                    "{operation_name} must select only one top level field.",
                ))
                .with_nodes(extra_field_nodes),
            );
        }
        for field_nodes in fields.values() {
            if field_nodes[0].name.value.starts_with("__") {
                context.report_error(
                    GraphQLError::new(format!(
                        "{operation_name} must not select an introspection top level field.",
                    ))
                    .with_nodes(field_nodes.iter().map(|field| field.loc.as_ref())),
                );
            }
        }
        VisitorAction::Skip
    }
}
