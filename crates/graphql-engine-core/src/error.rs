use crate::Value;
use graphql_engine_parser::ast::Loc;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::PathSegment;
use serde_json::Map;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The error a resolver fails with.
///
/// Any `std::error::Error + Send + Sync` converts into a `FieldError`, so
/// resolvers can use `?` freely. The executor turns it into a located
/// [`GraphQLError`] carrying the response path of the failing field.
#[derive(Clone)]
pub struct FieldError {
    message: String,
    extensions: Option<Map<String, Value>>,
    source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extensions: None,
            source: None,
        }
    }

    pub fn with_extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn extensions(&self) -> Option<&Map<String, Value>> {
        self.extensions.as_ref()
    }

    pub fn source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Converts this error into a [`GraphQLError`] located at `nodes` and
    /// `path`.
    ///
    /// If the error wraps a [`GraphQLError`] that already has a path, that
    /// error is returned unchanged so the innermost location wins.
    pub fn located<'a>(
        self,
        nodes: impl IntoIterator<Item = Option<&'a Loc>>,
        path: Vec<PathSegment>,
    ) -> GraphQLError {
        if let Some(inner) = self
            .source
            .as_deref()
            .and_then(|err| err.downcast_ref::<GraphQLError>())
        {
            return located_error(inner.clone(), nodes, path);
        }
        let mut error = GraphQLError::new(self.message)
            .with_nodes(nodes)
            .with_path(path);
        if let Some(source) = self.source {
            error = error.with_original_error(source);
        }
        if let Some(extensions) = self.extensions {
            error = error.with_extensions(extensions);
        }
        error
    }
}

impl<E> From<E> for FieldError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        let extensions = (&error as &(dyn std::error::Error + 'static))
            .downcast_ref::<GraphQLError>()
            .and_then(|err| err.extensions().cloned());
        Self {
            message: error.to_string_message(),
            extensions,
            source: Some(Arc::new(error)),
        }
    }
}

impl fmt::Debug for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldError")
            .field("message", &self.message)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// `Display` for a [`GraphQLError`] appends source excerpts, which must not
/// leak into response messages.
trait ErrorMessage {
    fn to_string_message(&self) -> String;
}

impl<E: std::error::Error + 'static> ErrorMessage for E {
    fn to_string_message(&self) -> String {
        match (self as &(dyn std::error::Error + 'static)).downcast_ref::<GraphQLError>() {
            Some(err) => err.message().to_string(),
            None => self.to_string(),
        }
    }
}

/// Attaches `nodes` and `path` to `error` unless it already carries a path.
///
/// Existing nodes are kept when present.
pub fn located_error<'a>(
    error: GraphQLError,
    nodes: impl IntoIterator<Item = Option<&'a Loc>>,
    path: Vec<PathSegment>,
) -> GraphQLError {
    if error.path().is_some() {
        return error;
    }
    if error.nodes().is_empty() && error.locations().is_empty() {
        error.with_nodes(nodes).with_path(path)
    } else {
        error.with_path(path)
    }
}

/// Failures while assembling a [`Schema`](crate::schema::Schema) from types,
/// SDL or an introspection result.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "Schema must contain uniquely named types but contains multiple types \
        named '{type_name}'."
    )]
    DuplicateTypeName {
        type_name: String,
    },

    #[error("Unknown type: \"{type_name}\".")]
    UnknownType {
        type_name: String,
    },

    #[error("Unknown directive: \"@{directive_name}\".")]
    UnknownDirective {
        directive_name: String,
    },

    #[error("{}", errors.iter().map(|err| err.message()).collect::<Vec<_>>().join("\n\n"))]
    InvalidSdl {
        errors: Vec<GraphQLError>,
    },

    #[error(
        "Invalid or incomplete introspection result. Ensure that you are \
        passing the 'data' attribute of an introspection response and no \
        'errors' were returned alongside: {detail}."
    )]
    InvalidIntrospection {
        detail: String,
    },

    #[error("{message}")]
    InvalidClientSchema {
        message: String,
    },

    #[error(transparent)]
    Syntax(#[from] GraphQLError),
}
