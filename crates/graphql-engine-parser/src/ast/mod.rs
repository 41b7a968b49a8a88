//! Owned AST types for GraphQL executable and type-system documents.
//!
//! Every node carries an optional [`Loc`] pointing back into the
//! [`Source`](crate::Source) it was parsed from. Nodes built by hand carry
//! no location.

mod ast_node;
mod directive_location;
mod executable;
mod type_system;
mod value;

pub use ast_node::AstNode;
pub use directive_location::DirectiveLocation;
pub use executable::*;
pub use type_system::*;
pub use value::*;

use crate::Source;
use crate::SourceLocation;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

/// The byte range a node was parsed from, plus the source it came from.
///
/// Two `Loc`s compare equal when their byte ranges match; the source is
/// not compared.
#[derive(Clone, Debug)]
pub struct Loc {
    pub start: usize,
    pub end: usize,
    pub source: Arc<Source>,
}

impl Loc {
    pub fn new(start: usize, end: usize, source: Arc<Source>) -> Self {
        Self { start, end, source }
    }

    /// The line/column of the first character of the node.
    pub fn source_location(&self) -> SourceLocation {
        self.source.get_location(self.start)
    }
}

impl PartialEq for Loc {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Loc {}

impl Hash for Loc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

/// A GraphQL name: `[_A-Za-z][_0-9A-Za-z]*`.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub loc: Option<Loc>,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            loc: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// The root container of a parsed GraphQL document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Option<Loc>,
}

impl Document {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }

    pub fn source(&self) -> Option<&Arc<Source>> {
        self.loc.as_ref().map(|loc| &loc.source)
    }
}

/// A top-level definition inside a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    Directive(DirectiveDefinition),
    SchemaExtension(SchemaExtension),
    TypeExtension(TypeExtension),
}

impl Definition {
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::Operation(_) | Self::Fragment(_))
    }

    pub fn is_type_system(&self) -> bool {
        matches!(self, Self::Schema(_) | Self::Type(_) | Self::Directive(_))
    }

    pub fn is_type_system_extension(&self) -> bool {
        matches!(self, Self::SchemaExtension(_) | Self::TypeExtension(_))
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Self::Operation(def) => def.loc.as_ref(),
            Self::Fragment(def) => def.loc.as_ref(),
            Self::Schema(def) => def.loc.as_ref(),
            Self::Type(def) => def.loc(),
            Self::Directive(def) => def.loc.as_ref(),
            Self::SchemaExtension(def) => def.loc.as_ref(),
            Self::TypeExtension(def) => def.loc(),
        }
    }
}

/// A directive applied to some node, e.g. `@include(if: $flag)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub loc: Option<Loc>,
}

/// A `name: value` pair used by fields and directives.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Loc>,
}

/// A type reference such as `String`, `[Int!]` or `ID!`.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

impl Type {
    /// The innermost named type, with all list and non-null wrappers
    /// removed.
    pub fn named_type(&self) -> &NamedType {
        match self {
            Self::Named(named) => named,
            Self::List(list) => list.ty.named_type(),
            Self::NonNull(non_null) => non_null.ty.named_type(),
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Self::Named(named) => named.loc.as_ref(),
            Self::List(list) => list.loc.as_ref(),
            Self::NonNull(non_null) => non_null.loc.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub loc: Option<Loc>,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            loc: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub ty: Box<Type>,
    pub loc: Option<Loc>,
}

/// A non-null wrapper. The parser never produces a non-null of a non-null.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub ty: Box<Type>,
    pub loc: Option<Loc>,
}
