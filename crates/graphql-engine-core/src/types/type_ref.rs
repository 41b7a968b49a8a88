use graphql_engine_parser::ast;
use std::fmt;

/// A reference to a type as written in a field, argument or variable
/// definition: a named type, possibly wrapped in lists and non-null
/// markers.
///
/// Named types are referenced by name and resolved through the owning
/// [`Schema`](crate::schema::Schema), which lets object types refer to
/// each other without reference cycles.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// `[self]`
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// `self!`. Wrapping an already non-null type returns it unchanged.
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// The name of the innermost named type.
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }

    /// The wrapped type of a list or non-null type.
    pub fn of_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Named(_) => None,
            Self::List(inner) | Self::NonNull(inner) => Some(inner),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The type with one outer non-null marker removed.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            Self::NonNull(inner) => inner,
            other => other,
        }
    }

    /// The `ast::Type` spelling of this reference.
    pub fn to_ast(&self) -> ast::Type {
        match self {
            Self::Named(name) => ast::Type::Named(ast::NamedType::new(name.as_str())),
            Self::List(inner) => ast::Type::List(ast::ListType {
                ty: Box::new(inner.to_ast()),
                loc: None,
            }),
            Self::NonNull(inner) => ast::Type::NonNull(ast::NonNullType {
                ty: Box::new(inner.to_ast()),
                loc: None,
            }),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl From<&ast::Type> for TypeRef {
    fn from(ty: &ast::Type) -> Self {
        match ty {
            ast::Type::Named(named) => Self::Named(named.name.value.clone()),
            ast::Type::List(list) => Self::List(Box::new(list.ty.as_ref().into())),
            ast::Type::NonNull(non_null) => {
                Self::NonNull(Box::new(non_null.ty.as_ref().into()))
            },
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}
