use crate::types::InputValue;
use crate::types::InputValueMap;
use crate::types::TypeRef;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::DirectiveLocation;
use std::sync::Arc;
use std::sync::LazyLock;

/// A directive definition: `directive @name(args) repeatable on LOCATIONS`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: String,
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    pub args: InputValueMap,
    pub is_repeatable: bool,
    pub ast_node: Option<ast::DirectiveDefinition>,
}

impl Directive {
    pub fn new(name: impl Into<String>, locations: impl IntoIterator<Item = DirectiveLocation>) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations: locations.into_iter().collect(),
            args: InputValueMap::new(),
            is_repeatable: false,
            ast_node: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn argument(mut self, arg: InputValue) -> Self {
        self.args.insert(arg.name.clone(), arg);
        self
    }

    pub fn repeatable(mut self, is_repeatable: bool) -> Self {
        self.is_repeatable = is_repeatable;
        self
    }
}

static INCLUDE: LazyLock<Arc<Directive>> = LazyLock::new(|| {
    Arc::new(
        Directive::new(
            "include",
            [
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
        )
        .description(
            "Directs the executor to include this field or fragment only when the `if` \
            argument is true.",
        )
        .argument(
            InputValue::new("if", TypeRef::named("Boolean").non_null())
                .description("Included when true."),
        ),
    )
});

static SKIP: LazyLock<Arc<Directive>> = LazyLock::new(|| {
    Arc::new(
        Directive::new(
            "skip",
            [
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
        )
        .description(
            "Directs the executor to skip this field or fragment when the `if` argument is \
            true.",
        )
        .argument(
            InputValue::new("if", TypeRef::named("Boolean").non_null())
                .description("Skipped when true."),
        ),
    )
});

static DEPRECATED: LazyLock<Arc<Directive>> = LazyLock::new(|| {
    Arc::new(
        Directive::new(
            "deprecated",
            [
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
        )
        .description("Marks an element of a GraphQL schema as no longer supported.")
        .argument(
            InputValue::new("reason", "String")
                .description(
                    "Explains why this element was deprecated, usually also including a \
                    suggestion for how to access supported similar data. Formatted using \
                    the Markdown syntax, as specified by \
                    [CommonMark](https://commonmark.org/).",
                )
                .default_value(Value::String(DEFAULT_DEPRECATION_REASON.to_string())),
        ),
    )
});

static SPECIFIED_BY: LazyLock<Arc<Directive>> = LazyLock::new(|| {
    Arc::new(
        Directive::new("specifiedBy", [DirectiveLocation::Scalar])
            .description("Exposes a URL that specifies the behavior of this scalar.")
            .argument(
                InputValue::new("url", TypeRef::named("String").non_null())
                    .description("The URL that specifies the behavior of this scalar."),
            ),
    )
});

pub fn include_directive() -> Arc<Directive> {
    INCLUDE.clone()
}

pub fn skip_directive() -> Arc<Directive> {
    SKIP.clone()
}

pub fn deprecated_directive() -> Arc<Directive> {
    DEPRECATED.clone()
}

pub fn specified_by_directive() -> Arc<Directive> {
    SPECIFIED_BY.clone()
}

/// `@include`, `@skip`, `@deprecated` and `@specifiedBy`, in that order.
pub fn specified_directives() -> Vec<Arc<Directive>> {
    vec![
        include_directive(),
        skip_directive(),
        deprecated_directive(),
        specified_by_directive(),
    ]
}

pub fn is_specified_directive(name: &str) -> bool {
    matches!(name, "include" | "skip" | "deprecated" | "specifiedBy")
}
