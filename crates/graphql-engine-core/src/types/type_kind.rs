use crate::types::NamedType;
use crate::types::TypeRef;

/// The category of a type, as reported by `__Type.kind`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    pub const ALL: [TypeKind; 8] = [
        Self::Scalar,
        Self::Object,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::InputObject,
        Self::List,
        Self::NonNull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Scalar => "Indicates this type is a scalar.",
            Self::Object => {
                "Indicates this type is an object. `fields` and `interfaces` are valid fields."
            },
            Self::Interface => {
                "Indicates this type is an interface. `fields`, `interfaces`, and \
                `possibleTypes` are valid fields."
            },
            Self::Union => "Indicates this type is a union. `possibleTypes` is a valid field.",
            Self::Enum => "Indicates this type is an enum. `enumValues` is a valid field.",
            Self::InputObject => {
                "Indicates this type is an input object. `inputFields` is a valid field."
            },
            Self::List => "Indicates this type is a list. `ofType` is a valid field.",
            Self::NonNull => "Indicates this type is a non-null. `ofType` is a valid field.",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl From<&NamedType> for TypeKind {
    fn from(value: &NamedType) -> Self {
        match value {
            NamedType::Scalar(_) => Self::Scalar,
            NamedType::Object(_) => Self::Object,
            NamedType::Interface(_) => Self::Interface,
            NamedType::Union(_) => Self::Union,
            NamedType::Enum(_) => Self::Enum,
            NamedType::InputObject(_) => Self::InputObject,
        }
    }
}

impl TypeRef {
    /// The kind of a wrapping reference. Named references have no kind of
    /// their own; callers look them up in the schema.
    pub fn wrapper_kind(&self) -> Option<TypeKind> {
        match self {
            Self::Named(_) => None,
            Self::List(_) => Some(TypeKind::List),
            Self::NonNull(_) => Some(TypeKind::NonNull),
        }
    }
}
