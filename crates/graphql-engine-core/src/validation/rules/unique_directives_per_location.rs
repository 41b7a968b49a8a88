use crate::validation::rules::directive_definitions;
use crate::validation::rules::directives_of;
use crate::validation::rules::schema_directives;
use crate::validation::rules::type_system_type_name;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;

/// A non-repeatable directive appears at most once per location.
///
/// The schema definition and its extensions count as one location, and so
/// do a type's definition and its extensions.
pub fn unique_directives_per_location<'a>(
    context: &ValidationContext<'a>,
) -> Box<dyn ValidationRule<'a> + 'a> {
    let mut unique_directive_map = HashMap::new();
    for directive in schema_directives(context) {
        unique_directive_map.insert(directive.name.clone(), !directive.is_repeatable);
    }
    for definition in directive_definitions(context.document()) {
        unique_directive_map.insert(definition.name.value.clone(), !definition.repeatable);
    }
    Box::new(UniqueDirectivesPerLocation {
        unique_directive_map,
        schema_directives: HashMap::new(),
        type_directives_map: HashMap::new(),
    })
}

type SeenDirectives<'a> = HashMap<&'a str, &'a ast::Directive>;

struct UniqueDirectivesPerLocation<'a> {
    unique_directive_map: HashMap<String, bool>,
    schema_directives: SeenDirectives<'a>,
    type_directives_map: HashMap<&'a str, SeenDirectives<'a>>,
}

impl<'a> ValidationRule<'a> for UniqueDirectivesPerLocation<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let Some(directives) = directives_of(node) else {
            return VisitorAction::Continue;
        };
        let mut local_directives = SeenDirectives::new();
        let seen_directives = if matches!(node, AstNode::SchemaDefinition(_) | AstNode::SchemaExtension(_)) {
            &mut self.schema_directives
        } else if let Some(type_name) = type_system_type_name(node) {
            self.type_directives_map.entry(type_name).or_default()
        } else {
            &mut local_directives
        };

        for directive in directives {
            let name = directive.name.value.as_str();
            if self.unique_directive_map.get(name) != Some(&true) {
                continue;
            }
            match seen_directives.get(name) {
                Some(seen) => context.report_error(
                    GraphQLError::new(format!(
                        "The directive '@{name}' can only be used once at this location.",
                    ))
                    .with_nodes([seen.loc.as_ref(), directive.loc.as_ref()]),
                ),
                None => {
                    seen_directives.insert(name, directive);
                },
            }
        }
        VisitorAction::Continue
    }
}
