use crate::types::EnumType;
use crate::types::FieldMap;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::UnionType;
use crate::introspection::is_introspection_type;
use crate::types::is_specified_scalar_type;
use graphql_engine_parser::ast::Loc;
use std::sync::Arc;

/// Any named type that can live in a schema's type map.
#[derive(Clone, Debug)]
pub enum NamedType {
    Scalar(Arc<ScalarType>),
    Object(Arc<ObjectType>),
    Interface(Arc<InterfaceType>),
    Union(Arc<UnionType>),
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => &t.name,
            Self::Object(t) => &t.name,
            Self::Interface(t) => &t.name,
            Self::Union(t) => &t.name,
            Self::Enum(t) => &t.name,
            Self::InputObject(t) => &t.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(t) => t.description.as_deref(),
            Self::Object(t) => t.description.as_deref(),
            Self::Interface(t) => t.description.as_deref(),
            Self::Union(t) => t.description.as_deref(),
            Self::Enum(t) => t.description.as_deref(),
            Self::InputObject(t) => t.description.as_deref(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.into()
    }

    /// Scalars, enums and input objects.
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    /// Everything except input objects.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn is_leaf_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_))
    }

    pub fn is_composite_type(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    pub fn is_abstract_type(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    pub fn is_introspection_type(&self) -> bool {
        is_introspection_type(self.name())
    }

    pub fn is_specified_scalar_type(&self) -> bool {
        matches!(self, Self::Scalar(_)) && is_specified_scalar_type(self.name())
    }

    /// The field map of an object or interface type.
    pub fn fields(&self) -> Option<&FieldMap> {
        match self {
            Self::Object(t) => Some(t.fields()),
            Self::Interface(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// The interfaces an object or interface type declares.
    pub fn interfaces(&self) -> &[String] {
        match self {
            Self::Object(t) => t.interfaces(),
            Self::Interface(t) => t.interfaces(),
            _ => &[],
        }
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        match self {
            Self::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&Arc<InterfaceType>> {
        match self {
            Self::Interface(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&Arc<UnionType>> {
        match self {
            Self::Union(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&Arc<EnumType>> {
        match self {
            Self::Enum(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&Arc<InputObjectType>> {
        match self {
            Self::InputObject(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Arc<ScalarType>> {
        match self {
            Self::Scalar(t) => Some(t),
            _ => None,
        }
    }

    /// The location of the definition this type was built from, if any.
    pub fn ast_loc(&self) -> Option<&Loc> {
        match self {
            Self::Scalar(t) => t.ast_node.as_ref().and_then(|n| n.loc.as_ref()),
            Self::Object(t) => t.ast_node.as_ref().and_then(|n| n.loc.as_ref()),
            Self::Interface(t) => t.ast_node.as_ref().and_then(|n| n.loc.as_ref()),
            Self::Union(t) => t.ast_node.as_ref().and_then(|n| n.loc.as_ref()),
            Self::Enum(t) => t.ast_node.as_ref().and_then(|n| n.loc.as_ref()),
            Self::InputObject(t) => t.ast_node.as_ref().and_then(|n| n.loc.as_ref()),
        }
    }

    /// Locations of the definition and every extension of this type.
    pub fn all_ast_locs(&self) -> Vec<Option<&Loc>> {
        let mut locs = vec![self.ast_loc()];
        match self {
            Self::Scalar(t) => locs.extend(t.extension_ast_nodes.iter().map(|n| n.loc.as_ref())),
            Self::Object(t) => locs.extend(t.extension_ast_nodes.iter().map(|n| n.loc.as_ref())),
            Self::Interface(t) => {
                locs.extend(t.extension_ast_nodes.iter().map(|n| n.loc.as_ref()))
            },
            Self::Union(t) => locs.extend(t.extension_ast_nodes.iter().map(|n| n.loc.as_ref())),
            Self::Enum(t) => locs.extend(t.extension_ast_nodes.iter().map(|n| n.loc.as_ref())),
            Self::InputObject(t) => {
                locs.extend(t.extension_ast_nodes.iter().map(|n| n.loc.as_ref()))
            },
        }
        locs
    }

    /// Whether both values point at the same type definition.
    pub fn ptr_eq(&self, other: &NamedType) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Interface(a), Self::Interface(b)) => Arc::ptr_eq(a, b),
            (Self::Union(a), Self::Union(b)) => Arc::ptr_eq(a, b),
            (Self::Enum(a), Self::Enum(b)) => Arc::ptr_eq(a, b),
            (Self::InputObject(a), Self::InputObject(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<ScalarType> for NamedType {
    fn from(t: ScalarType) -> Self {
        Self::Scalar(Arc::new(t))
    }
}

impl From<ObjectType> for NamedType {
    fn from(t: ObjectType) -> Self {
        Self::Object(Arc::new(t))
    }
}

impl From<InterfaceType> for NamedType {
    fn from(t: InterfaceType) -> Self {
        Self::Interface(Arc::new(t))
    }
}

impl From<UnionType> for NamedType {
    fn from(t: UnionType) -> Self {
        Self::Union(Arc::new(t))
    }
}

impl From<EnumType> for NamedType {
    fn from(t: EnumType) -> Self {
        Self::Enum(Arc::new(t))
    }
}

impl From<InputObjectType> for NamedType {
    fn from(t: InputObjectType) -> Self {
        Self::InputObject(Arc::new(t))
    }
}

impl From<Arc<ObjectType>> for NamedType {
    fn from(t: Arc<ObjectType>) -> Self {
        Self::Object(t)
    }
}

impl From<Arc<ScalarType>> for NamedType {
    fn from(t: Arc<ScalarType>) -> Self {
        Self::Scalar(t)
    }
}
