use crate::utilities::type_from_ast;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::print_ast;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;

/// Variables can only be declared with input types.
pub fn variables_are_input_types<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(VariablesAreInputTypes)
}

struct VariablesAreInputTypes;

impl<'a> ValidationRule<'a> for VariablesAreInputTypes {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::VariableDefinition(definition) = node else {
            return VisitorAction::Continue;
        };
        let Some(schema) = context.schema() else {
            return VisitorAction::Continue;
        };
        let is_input_type = type_from_ast(schema, &definition.ty)
            .and_then(|ty| schema.named_type_of(&ty).map(|named| named.is_input_type()));
        if is_input_type == Some(false) {
            context.report_error(
                GraphQLError::new(format!(
                    "Variable '${}' cannot be non-input type '{}'.",
                    definition.variable.name.value,
                    print_ast(&definition.ty),
                ))
                .with_node(definition.ty.loc()),
            );
        }
        VisitorAction::Continue
    }
}
