use graphql_engine::GraphQLError;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Renders errors one after another, each with its source snippet.
pub(crate) fn format_errors<'a>(errors: impl IntoIterator<Item = &'a GraphQLError>) -> String {
    errors
        .into_iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
