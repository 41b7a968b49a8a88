use crate::validation::rules::directive_definitions;
use crate::validation::rules::directive_location;
use crate::validation::rules::schema_directives;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::ast::DirectiveLocation;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// Every directive is defined and used only in locations its definition
/// allows.
pub fn known_directives<'a>(context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    let mut locations_map = HashMap::new();
    for directive in schema_directives(context) {
        locations_map.insert(directive.name.clone(), directive.locations.clone());
    }
    for definition in directive_definitions(context.document()) {
        let locations = definition
            .locations
            .iter()
            .filter_map(|name| name.value.parse::<DirectiveLocation>().ok())
            .collect();
        locations_map.insert(definition.name.value.clone(), locations);
    }
    Box::new(KnownDirectives {
        locations_map,
        ancestors: vec![],
    })
}

struct KnownDirectives<'a> {
    locations_map: HashMap<String, Vec<DirectiveLocation>>,
    ancestors: Vec<AstNode<'a>>,
}

impl<'a> KnownDirectives<'a> {
    /// The location of the node the current directive is attached to.
    fn candidate_location(&self) -> Option<DirectiveLocation> {
        let (owner, rest) = self.ancestors.split_last()?;
        let in_input_object = matches!(
            rest.last(),
            Some(AstNode::InputObjectTypeDefinition(_) | AstNode::InputObjectTypeExtension(_)),
        );
        directive_location(*owner, in_input_object)
    }
}

impl<'a> ValidationRule<'a> for KnownDirectives<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::Directive(directive) = node else {
            self.ancestors.push(node);
            return VisitorAction::Continue;
        };
        let name = &directive.name.value;
        let Some(locations) = self.locations_map.get(name) else {
            context.report_error(
                GraphQLError::new(format!("Unknown directive '@{name}'."))
                    .with_node(directive.loc.as_ref()),
            );
            return VisitorAction::Skip;
        };
        if let Some(location) = self.candidate_location() {
            if !locations.contains(&location) {
                context.report_error(
                    GraphQLError::new(format!(
                        "Directive '@{name}' may not be used on {}.",
                        location.as_str(),
                    ))
                    .with_node(directive.loc.as_ref()),
                );
            }
        }
        VisitorAction::Skip
    }

    fn leave(&mut self, _context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        if !matches!(node, AstNode::Directive(_)) {
            self.ancestors.pop();
        }
        VisitorAction::Continue
    }
}
