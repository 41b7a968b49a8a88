use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The places a directive may be applied.
///
/// See
/// [DirectiveLocations](https://spec.graphql.org/October2021/#DirectiveLocations)
/// in the GraphQL spec.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type-system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub const ALL: [DirectiveLocation; 19] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
        Self::Field,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::VariableDefinition,
        Self::Schema,
        Self::Scalar,
        Self::Object,
        Self::FieldDefinition,
        Self::ArgumentDefinition,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::EnumValue,
        Self::InputObject,
        Self::InputFieldDefinition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Self::Query
                | Self::Mutation
                | Self::Subscription
                | Self::Field
                | Self::FragmentDefinition
                | Self::FragmentSpread
                | Self::InlineFragment
                | Self::VariableDefinition
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Query => "Location adjacent to a query operation.",
            Self::Mutation => "Location adjacent to a mutation operation.",
            Self::Subscription => "Location adjacent to a subscription operation.",
            Self::Field => "Location adjacent to a field.",
            Self::FragmentDefinition => "Location adjacent to a fragment definition.",
            Self::FragmentSpread => "Location adjacent to a fragment spread.",
            Self::InlineFragment => "Location adjacent to an inline fragment.",
            Self::VariableDefinition => "Location adjacent to a variable definition.",
            Self::Schema => "Location adjacent to a schema definition.",
            Self::Scalar => "Location adjacent to a scalar definition.",
            Self::Object => "Location adjacent to an object type definition.",
            Self::FieldDefinition => "Location adjacent to a field definition.",
            Self::ArgumentDefinition => "Location adjacent to an argument definition.",
            Self::Interface => "Location adjacent to an interface definition.",
            Self::Union => "Location adjacent to a union definition.",
            Self::Enum => "Location adjacent to an enum definition.",
            Self::EnumValue => "Location adjacent to an enum value definition.",
            Self::InputObject => "Location adjacent to an input object type definition.",
            Self::InputFieldDefinition => {
                "Location adjacent to an input object field definition."
            },
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirectiveLocation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|loc| loc.as_str() == s)
            .ok_or(())
    }
}
