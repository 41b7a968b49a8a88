use graphql_engine_parser::PathSegment;
use std::sync::Arc;

/// A response path, stored as a linked list from the leaf back to the
/// root so that sibling fields share their common prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub prev: Option<Arc<Path>>,
    pub key: PathSegment,
    /// The parent object type's name, for field keys.
    pub typename: Option<String>,
}

impl Path {
    pub fn new(
        prev: Option<Arc<Path>>,
        key: impl Into<PathSegment>,
        typename: Option<&str>,
    ) -> Arc<Self> {
        Arc::new(Self {
            prev,
            key: key.into(),
            typename: typename.map(str::to_string),
        })
    }

    /// The keys from the root to this path, in order.
    pub fn as_list(&self) -> Vec<PathSegment> {
        let mut keys = vec![self.key.clone()];
        let mut current = self.prev.as_deref();
        while let Some(path) = current {
            keys.push(path.key.clone());
            current = path.prev.as_deref();
        }
        keys.reverse();
        keys
    }
}
