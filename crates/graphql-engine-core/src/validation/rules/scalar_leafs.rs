use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;

/// Leaf fields have no selection set; composite fields must have one.
pub fn scalar_leafs<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(ScalarLeafs)
}

struct ScalarLeafs;

impl<'a> ValidationRule<'a> for ScalarLeafs {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::Field(field) = node else {
            return VisitorAction::Continue;
        };
        let (Some(schema), Some(ty)) = (context.schema(), context.get_type()) else {
            return VisitorAction::Continue;
        };
        let Some(named) = schema.named_type_of(ty) else {
            return VisitorAction::Continue;
        };
        let field_name = &field.name.value;
        let type_str = ty.to_string();
        if named.is_leaf_type() {
            if let Some(selection_set) = &field.selection_set {
                context.report_error(
                    GraphQLError::new(format!(
                        "Field '{field_name}' must not have a selection since type \
                        '{type_str}' has no subfields.",
                    ))
                    .with_node(selection_set.loc.as_ref()),
                );
            }
        } else if field.selection_set.is_none() {
            context.report_error(
                GraphQLError::new(format!(
                    "Field '{field_name}' of type '{type_str}' must have a selection of \
                    subfields. Did you mean '{field_name} {{ ... }}'?",
                ))
                .with_node(field.loc.as_ref()),
            );
        }
        VisitorAction::Continue
    }
}
