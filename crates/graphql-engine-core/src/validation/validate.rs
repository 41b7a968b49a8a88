use crate::schema::validate_schema;
use crate::schema::Schema;
use crate::validation::specified_rules;
use crate::validation::specified_sdl_rules;
use crate::validation::RuleFactory;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::visit;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::Visitor;
use graphql_engine_parser::VisitorAction;
use std::fmt;

/// The error limit [`ValidationOptions::default`] sets.
pub const DEFAULT_MAX_ERRORS: usize = 100;

/// Options for [`validate`].
#[derive(Clone)]
pub struct ValidationOptions {
    /// Validation stops after this many errors, adding one final error that
    /// says so. `None` means no limit.
    pub max_errors: Option<usize>,
    /// The rules to run. `None` means [`specified_rules`].
    pub rules: Option<Vec<RuleFactory>>,
    /// Accepts variable definitions on fragments, for documents parsed with
    /// `allow_legacy_fragment_variables`.
    pub allow_legacy_fragment_variables: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_errors: Some(DEFAULT_MAX_ERRORS),
            rules: None,
            allow_legacy_fragment_variables: false,
        }
    }
}

impl fmt::Debug for ValidationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationOptions")
            .field("max_errors", &self.max_errors)
            .field("rules", &self.rules.as_ref().map(Vec::len))
            .field(
                "allow_legacy_fragment_variables",
                &self.allow_legacy_fragment_variables,
            )
            .finish()
    }
}

/// Checks that `document` is a valid executable document for `schema`.
///
/// Returns every error found, in document order, or the schema's own
/// validation errors if the schema is invalid. An empty result means the
/// document can be executed.
///
/// ```rust
/// # use graphql_engine_core::utilities::build_schema;
/// # use graphql_engine_core::validation::validate;
/// # use graphql_engine_core::validation::ValidationOptions;
/// # use graphql_engine_parser::parse;
/// let schema = build_schema("type Query { name: String }").unwrap();
/// let document = parse("{ nmae }").unwrap();
/// let errors = validate(&schema, &document, ValidationOptions::default());
/// assert_eq!(
///     errors[0].message(),
///     "Cannot query field 'nmae' on type 'Query'. Did you mean 'name'?",
/// );
/// ```
pub fn validate(
    schema: &Schema,
    document: &ast::Document,
    options: ValidationOptions,
) -> Vec<GraphQLError> {
    let span = tracing::debug_span!("validate");
    let _guard = span.enter();

    let schema_errors = validate_schema(schema);
    if !schema_errors.is_empty() {
        return schema_errors.to_vec();
    }

    let context = ValidationContext::new(
        schema,
        document,
        options.max_errors,
        options.allow_legacy_fragment_variables,
    );
    let factories = options.rules.unwrap_or_else(specified_rules);
    let errors = run_rules(context, &factories);
    tracing::debug!(errors = errors.len(), "validated document");
    errors
}

/// Checks a type-system document on its own, or as an extension of
/// `schema_to_extend`.
pub fn validate_sdl(document: &ast::Document, schema_to_extend: Option<&Schema>) -> Vec<GraphQLError> {
    let context = ValidationContext::without_type_info(document, schema_to_extend);
    run_rules(context, &specified_sdl_rules())
}

fn run_rules<'a>(context: ValidationContext<'a>, factories: &[RuleFactory]) -> Vec<GraphQLError> {
    let rules = factories
        .iter()
        .map(|factory| factory(&context))
        .collect::<Vec<_>>();
    let states = vec![RuleState::Active; rules.len()];
    let mut visitor = ParallelVisitor {
        context,
        rules,
        states,
    };
    visit(visitor.context.document(), &mut visitor);
    visitor.context.into_errors()
}

#[derive(Clone, Copy)]
enum RuleState<'a> {
    Active,
    Skipping(AstNode<'a>),
    Done,
}

/// Drives every rule through one traversal, keeping the type information
/// in step with it.
struct ParallelVisitor<'a> {
    context: ValidationContext<'a>,
    rules: Vec<Box<dyn ValidationRule<'a> + 'a>>,
    states: Vec<RuleState<'a>>,
}

impl<'a> Visitor<'a> for ParallelVisitor<'a> {
    fn enter(&mut self, node: AstNode<'a>) -> VisitorAction {
        if let Some(type_info) = &mut self.context.type_info {
            type_info.enter(node);
        }
        for (rule, state) in self.rules.iter_mut().zip(self.states.iter_mut()) {
            if !matches!(state, RuleState::Active) {
                continue;
            }
            match rule.enter(&mut self.context, node) {
                VisitorAction::Skip | VisitorAction::Remove => *state = RuleState::Skipping(node),
                VisitorAction::Break => *state = RuleState::Done,
                VisitorAction::Continue => {},
            }
            if self.context.is_aborted() {
                return VisitorAction::Break;
            }
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, node: AstNode<'a>) -> VisitorAction {
        for (rule, state) in self.rules.iter_mut().zip(self.states.iter_mut()) {
            match state {
                RuleState::Active => {
                    if rule.leave(&mut self.context, node) == VisitorAction::Break {
                        *state = RuleState::Done;
                    }
                },
                RuleState::Skipping(skipped) if skipped.same_node(&node) => {
                    *state = RuleState::Active;
                },
                RuleState::Skipping(_) | RuleState::Done => {},
            }
            if self.context.is_aborted() {
                return VisitorAction::Break;
            }
        }
        if let Some(type_info) = &mut self.context.type_info {
            type_info.leave(node);
        }
        VisitorAction::Continue
    }
}
