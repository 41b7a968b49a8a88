use crate::execution::FieldValue;
use crate::execution::Path;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::PathSegment;
use serde_json::Map;
use smallvec::SmallVec;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Everything a resolver may want to know about the field it resolves and
/// the request it belongs to.
#[derive(Clone)]
pub struct ResolveInfo<'a> {
    pub field_name: &'a str,
    /// Every field node contributing to this response key; they share
    /// name and arguments but may carry different sub-selections.
    pub field_nodes: SmallVec<[&'a ast::Field; 1]>,
    pub return_type: &'a TypeRef,
    pub parent_type: &'a ObjectType,
    pub path: Arc<Path>,
    pub schema: &'a Schema,
    pub fragments: &'a HashMap<String, &'a ast::FragmentDefinition>,
    pub root_value: &'a FieldValue,
    pub operation: &'a ast::OperationDefinition,
    pub variable_values: &'a Map<String, Value>,
    pub context: Option<&'a Arc<dyn Any + Send + Sync>>,
}

impl ResolveInfo<'_> {
    /// The request context, if one was given and it has type `T`.
    pub fn context<T: Any>(&self) -> Option<&T> {
        self.context.and_then(|context| context.downcast_ref::<T>())
    }

    pub fn path_list(&self) -> Vec<PathSegment> {
        self.path.as_list()
    }

    /// Locations of the contributing field nodes, for error reporting.
    pub fn field_locs(&self) -> impl Iterator<Item = Option<&ast::Loc>> {
        self.field_nodes.iter().map(|node| node.loc.as_ref())
    }
}

impl std::fmt::Debug for ResolveInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveInfo")
            .field("field_name", &self.field_name)
            .field("return_type", &self.return_type)
            .field("parent_type", &self.parent_type.name)
            .field("path", &self.path.as_list())
            .finish_non_exhaustive()
    }
}
