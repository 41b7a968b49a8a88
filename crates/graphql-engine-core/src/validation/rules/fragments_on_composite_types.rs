use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;

/// Fragments can only condition on object, interface and union types.
pub fn fragments_on_composite_types<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(FragmentsOnCompositeTypes)
}

struct FragmentsOnCompositeTypes;

fn is_non_composite(context: &ValidationContext<'_>, type_condition: &ast::NamedType) -> bool {
    context
        .schema()
        .and_then(|schema| schema.get_type(&type_condition.name.value))
        .is_some_and(|ty| !ty.is_composite_type())
}

impl<'a> ValidationRule<'a> for FragmentsOnCompositeTypes {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::InlineFragment(fragment) => {
                let Some(type_condition) = &fragment.type_condition else {
                    return VisitorAction::Continue;
                };
                if is_non_composite(context, type_condition) {
                    context.report_error(
                        GraphQLError::new(format!(
                            "Fragment cannot condition on non composite type '{}'.",
                            type_condition.name.value,
                        ))
                        .with_node(type_condition.loc.as_ref()),
                    );
                }
            },
            AstNode::FragmentDefinition(fragment) => {
                let type_condition = &fragment.type_condition;
                if is_non_composite(context, type_condition) {
                    context.report_error(
                        GraphQLError::new(format!(
                            "Fragment '{}' cannot condition on non composite type '{}'.",
                            fragment.name.value, type_condition.name.value,
                        ))
                        .with_node(type_condition.loc.as_ref()),
                    );
                }
            },
            _ => {},
        }
        VisitorAction::Continue
    }
}
