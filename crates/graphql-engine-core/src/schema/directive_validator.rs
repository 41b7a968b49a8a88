use crate::schema::validate::deprecated_directive_loc;
use crate::schema::validate::validate_name;
use crate::schema::Schema;
use crate::types::Directive;
use graphql_engine_parser::GraphQLError;

pub(super) struct DirectiveValidator<'a> {
    errors: Vec<GraphQLError>,
    directive: &'a Directive,
    schema: &'a Schema,
}
impl<'a> DirectiveValidator<'a> {
    pub fn new(directive: &'a Directive, schema: &'a Schema) -> Self {
        Self {
            errors: vec![],
            directive,
            schema,
        }
    }

    pub fn validate(mut self) -> Vec<GraphQLError> {
        let directive = self.directive;
        let directive_loc = directive.ast_node.as_ref().and_then(|node| node.loc.as_ref());
        validate_name(&directive.name, directive_loc, &mut self.errors);

        for (arg_name, arg) in &directive.args {
            let arg_node = arg.ast_node.as_ref();
            validate_name(arg_name, arg_node.and_then(|node| node.loc.as_ref()), &mut self.errors);

            if !self
                .schema
                .named_type_of(&arg.ty)
                .is_some_and(|ty| ty.is_input_type())
            {
                self.errors.push(
                    GraphQLError::new(format!(
                        "The type of @{}({arg_name}:) must be Input Type but got: {}.",
                        directive.name, arg.ty,
                    ))
                    .with_node(arg_node.and_then(|node| node.loc.as_ref())),
                );
            }

            if arg.is_required() && arg.deprecation_reason.is_some() {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Required argument @{}({arg_name}:) cannot be deprecated.",
                        directive.name,
                    ))
                    .with_nodes([
                        deprecated_directive_loc(arg_node),
                        arg_node.and_then(|node| node.ty.loc()),
                    ]),
                );
            }
        }

        self.errors
    }
}
