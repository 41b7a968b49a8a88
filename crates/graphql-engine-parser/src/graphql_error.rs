use crate::ast::Loc;
use crate::print_location::print_location;
use crate::print_location::print_source_location;
use crate::Source;
use crate::SourceLocation;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// One step in a response path: an object key or a list index.
#[derive(
    Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

/// The error type used for syntax, validation and execution errors alike.
///
/// Locations are derived from the attached AST nodes, or from an explicit
/// source plus byte positions. `Display` renders the message followed by a
/// source excerpt for each location.
#[derive(Clone, Debug)]
pub struct GraphQLError {
    message: String,
    nodes: Vec<Loc>,
    source: Option<Arc<Source>>,
    positions: Vec<usize>,
    locations: Vec<SourceLocation>,
    path: Option<Vec<PathSegment>>,
    original_error: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    extensions: Option<Map<String, JsonValue>>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            nodes: vec![],
            source: None,
            positions: vec![],
            locations: vec![],
            path: None,
            original_error: None,
            extensions: None,
        }
    }

    /// A `Syntax Error: ...` located at a single byte offset of `source`.
    pub fn syntax_error(
        source: &Arc<Source>,
        position: usize,
        description: impl fmt::Display,
    ) -> Self {
        Self::new(format!("Syntax Error: {description}"))
            .with_source_positions(source.clone(), vec![position])
    }

    /// Attaches the AST nodes the error refers to. Nodes without a location
    /// are ignored. Replaces any previously computed locations.
    pub fn with_nodes<'a>(mut self, nodes: impl IntoIterator<Item = Option<&'a Loc>>) -> Self {
        self.nodes = nodes.into_iter().flatten().cloned().collect();
        if let Some(first) = self.nodes.first() {
            self.source = Some(first.source.clone());
        }
        self.positions = self.nodes.iter().map(|loc| loc.start).collect();
        self.locations = self.nodes.iter().map(Loc::source_location).collect();
        self
    }

    pub fn with_node(self, node: Option<&Loc>) -> Self {
        self.with_nodes([node])
    }

    pub fn with_source_positions(mut self, source: Arc<Source>, positions: Vec<usize>) -> Self {
        self.locations = positions
            .iter()
            .map(|pos| source.get_location(*pos))
            .collect();
        self.positions = positions;
        self.source = Some(source);
        self
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_original_error(
        mut self,
        error: Arc<dyn std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        self.original_error = Some(error);
        self
    }

    pub fn with_extensions(mut self, extensions: Map<String, JsonValue>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Replaces the message, keeping locations, path and cause.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn locations(&self) -> &[SourceLocation] {
        &self.locations
    }

    pub fn path(&self) -> Option<&[PathSegment]> {
        self.path.as_deref()
    }

    pub fn nodes(&self) -> &[Loc] {
        &self.nodes
    }

    pub fn source(&self) -> Option<&Arc<Source>> {
        self.source.as_ref()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn original_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.original_error.as_deref()
    }

    pub fn extensions(&self) -> Option<&Map<String, JsonValue>> {
        self.extensions.as_ref()
    }

    /// The response-format view of this error: message plus optional
    /// locations, path and extensions.
    pub fn formatted(&self) -> FormattedError {
        FormattedError {
            message: self.message.clone(),
            locations: (!self.locations.is_empty()).then(|| self.locations.clone()),
            path: self.path.clone(),
            extensions: self.extensions.clone().filter(|ext| !ext.is_empty()),
        }
    }
}

impl PartialEq for GraphQLError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.locations == other.locations
            && self.path == other.path
            && self.extensions == other.extensions
    }
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if !self.nodes.is_empty() {
            for loc in &self.nodes {
                write!(f, "\n\n{}", print_location(loc))?;
            }
        } else if let Some(source) = &self.source {
            for location in &self.locations {
                write!(f, "\n\n{}", print_source_location(source, *location))?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for GraphQLError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.original_error
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl Serialize for GraphQLError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.formatted().serialize(serializer)
    }
}

/// The serializable shape of an error inside a response.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FormattedError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<SourceLocation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, JsonValue>>,
}
