use crate::types::NamedType;
use crate::utilities::do_types_overlap;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;

/// A fragment can only be spread where its type condition could apply: the
/// fragment type and the parent type must share a possible object type.
pub fn possible_fragment_spreads<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(PossibleFragmentSpreads)
}

struct PossibleFragmentSpreads;

impl PossibleFragmentSpreads {
    fn fragment_type<'a>(context: &ValidationContext<'a>, name: &str) -> Option<&'a NamedType> {
        let fragment = context.get_fragment(name)?;
        context
            .schema()?
            .get_type(&fragment.type_condition.name.value)
            .filter(|ty| ty.is_composite_type())
    }
}

impl<'a> ValidationRule<'a> for PossibleFragmentSpreads {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let Some(schema) = context.schema() else {
            return VisitorAction::Continue;
        };
        let Some(parent_type) = context.get_parent_type().filter(|ty| ty.is_composite_type()) else {
            return VisitorAction::Continue;
        };
        match node {
            AstNode::InlineFragment(fragment) => {
                let Some(fragment_type) = context
                    .get_type()
                    .and_then(|ty| schema.named_type_of(ty))
                    .filter(|ty| ty.is_composite_type())
                else {
                    return VisitorAction::Continue;
                };
                if !do_types_overlap(schema, fragment_type, parent_type) {
                    context.report_error(
                        GraphQLError::new(format!(
                            "Fragment cannot be spread here as objects of type '{}' can \
                            never be of type '{}'.",
                            parent_type.name(),
                            fragment_type.name(),
                        ))
                        .with_node(fragment.loc.as_ref()),
                    );
                }
            },
            AstNode::FragmentSpread(spread) => {
                let name = &spread.name.value;
                let Some(fragment_type) = Self::fragment_type(context, name) else {
                    return VisitorAction::Continue;
                };
                if !do_types_overlap(schema, fragment_type, parent_type) {
                    context.report_error(
                        GraphQLError::new(format!(
                            "Fragment '{name}' cannot be spread here as objects of type \
                            '{}' can never be of type '{}'.",
                            parent_type.name(),
                            fragment_type.name(),
                        ))
                        .with_node(spread.loc.as_ref()),
                    );
                }
            },
            _ => {},
        }
        VisitorAction::Continue
    }
}
