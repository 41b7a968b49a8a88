use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fragments never spread themselves, directly or through other fragments.
///
/// Each fragment is searched depth-first once; cycles are reported from
/// the fragment where the search first closes them.
pub fn no_fragment_cycles<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(NoFragmentCycles::default())
}

#[derive(Default)]
struct NoFragmentCycles<'a> {
    visited_fragments: HashSet<&'a str>,
    spread_path: Vec<&'a ast::FragmentSpread>,
    spread_path_index_by_name: HashMap<&'a str, usize>,
}

impl<'a> NoFragmentCycles<'a> {
    fn detect_cycle_recursive(
        &mut self,
        context: &mut ValidationContext<'a>,
        fragment: &'a ast::FragmentDefinition,
    ) {
        let fragment_name = fragment.name.value.as_str();
        if !self.visited_fragments.insert(fragment_name) {
            return;
        }
        let spread_nodes = context.get_fragment_spreads(&fragment.selection_set);
        if spread_nodes.is_empty() {
            return;
        }

        self.spread_path_index_by_name
            .insert(fragment_name, self.spread_path.len());
        for spread in spread_nodes {
            let spread_name = spread.name.value.as_str();
            let cycle_index = self.spread_path_index_by_name.get(spread_name).copied();
            self.spread_path.push(spread);
            match cycle_index {
                None => {
                    if let Some(spread_fragment) = context.get_fragment(spread_name) {
                        self.detect_cycle_recursive(context, spread_fragment);
                    }
                },
                Some(cycle_index) => {
                    let cycle_path = &self.spread_path[cycle_index..];
                    let via_path = cycle_path[..cycle_path.len() - 1]
                        .iter()
                        .map(|spread| format!("'{}'", spread.name.value))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let message = if via_path.is_empty() {
                        format!("Cannot spread fragment '{spread_name}' within itself.")
                    } else {
                        format!("Cannot spread fragment '{spread_name}' within itself via {via_path}.")
                    };
                    context.report_error(
                        GraphQLError::new(message)
                            .with_nodes(cycle_path.iter().map(|spread| spread.loc.as_ref())),
                    );
                },
            }
            self.spread_path.pop();
        }
        self.spread_path_index_by_name.remove(fragment_name);
    }
}

impl<'a> ValidationRule<'a> for NoFragmentCycles<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::OperationDefinition(_) => VisitorAction::Skip,
            AstNode::FragmentDefinition(fragment) => {
                self.detect_cycle_recursive(context, fragment);
                VisitorAction::Skip
            },
            _ => VisitorAction::Continue,
        }
    }
}
