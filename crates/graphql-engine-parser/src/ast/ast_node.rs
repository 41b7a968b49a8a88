use crate::ast::*;

/// A borrowed reference to any node in a [`Document`].
///
/// This is the currency of [`visit`](crate::visitor::visit): visitors
/// receive an `AstNode` on enter and leave, and match on the variants they
/// care about.
#[derive(Clone, Copy, Debug)]
pub enum AstNode<'a> {
    Name(&'a Name),
    Document(&'a Document),
    OperationDefinition(&'a OperationDefinition),
    VariableDefinition(&'a VariableDefinition),
    Variable(&'a Variable),
    SelectionSet(&'a SelectionSet),
    Field(&'a Field),
    Argument(&'a Argument),
    FragmentSpread(&'a FragmentSpread),
    InlineFragment(&'a InlineFragment),
    FragmentDefinition(&'a FragmentDefinition),
    IntValue(&'a IntValue),
    FloatValue(&'a FloatValue),
    StringValue(&'a StringValue),
    BooleanValue(&'a BooleanValue),
    NullValue(&'a NullValue),
    EnumValue(&'a EnumValue),
    ListValue(&'a ListValue),
    ObjectValue(&'a ObjectValue),
    ObjectField(&'a ObjectField),
    Directive(&'a Directive),
    NamedType(&'a NamedType),
    ListType(&'a ListType),
    NonNullType(&'a NonNullType),
    SchemaDefinition(&'a SchemaDefinition),
    OperationTypeDefinition(&'a OperationTypeDefinition),
    ScalarTypeDefinition(&'a ScalarTypeDefinition),
    ObjectTypeDefinition(&'a ObjectTypeDefinition),
    FieldDefinition(&'a FieldDefinition),
    InputValueDefinition(&'a InputValueDefinition),
    InterfaceTypeDefinition(&'a InterfaceTypeDefinition),
    UnionTypeDefinition(&'a UnionTypeDefinition),
    EnumTypeDefinition(&'a EnumTypeDefinition),
    EnumValueDefinition(&'a EnumValueDefinition),
    InputObjectTypeDefinition(&'a InputObjectTypeDefinition),
    DirectiveDefinition(&'a DirectiveDefinition),
    SchemaExtension(&'a SchemaExtension),
    ScalarTypeExtension(&'a ScalarTypeExtension),
    ObjectTypeExtension(&'a ObjectTypeExtension),
    InterfaceTypeExtension(&'a InterfaceTypeExtension),
    UnionTypeExtension(&'a UnionTypeExtension),
    EnumTypeExtension(&'a EnumTypeExtension),
    InputObjectTypeExtension(&'a InputObjectTypeExtension),
}

impl<'a> AstNode<'a> {
    /// A stable snake_case tag naming the node kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Document(_) => "document",
            Self::OperationDefinition(_) => "operation_definition",
            Self::VariableDefinition(_) => "variable_definition",
            Self::Variable(_) => "variable",
            Self::SelectionSet(_) => "selection_set",
            Self::Field(_) => "field",
            Self::Argument(_) => "argument",
            Self::FragmentSpread(_) => "fragment_spread",
            Self::InlineFragment(_) => "inline_fragment",
            Self::FragmentDefinition(_) => "fragment_definition",
            Self::IntValue(_) => "int_value",
            Self::FloatValue(_) => "float_value",
            Self::StringValue(_) => "string_value",
            Self::BooleanValue(_) => "boolean_value",
            Self::NullValue(_) => "null_value",
            Self::EnumValue(_) => "enum_value",
            Self::ListValue(_) => "list_value",
            Self::ObjectValue(_) => "object_value",
            Self::ObjectField(_) => "object_field",
            Self::Directive(_) => "directive",
            Self::NamedType(_) => "named_type",
            Self::ListType(_) => "list_type",
            Self::NonNullType(_) => "non_null_type",
            Self::SchemaDefinition(_) => "schema_definition",
            Self::OperationTypeDefinition(_) => "operation_type_definition",
            Self::ScalarTypeDefinition(_) => "scalar_type_definition",
            Self::ObjectTypeDefinition(_) => "object_type_definition",
            Self::FieldDefinition(_) => "field_definition",
            Self::InputValueDefinition(_) => "input_value_definition",
            Self::InterfaceTypeDefinition(_) => "interface_type_definition",
            Self::UnionTypeDefinition(_) => "union_type_definition",
            Self::EnumTypeDefinition(_) => "enum_type_definition",
            Self::EnumValueDefinition(_) => "enum_value_definition",
            Self::InputObjectTypeDefinition(_) => "input_object_type_definition",
            Self::DirectiveDefinition(_) => "directive_definition",
            Self::SchemaExtension(_) => "schema_extension",
            Self::ScalarTypeExtension(_) => "scalar_type_extension",
            Self::ObjectTypeExtension(_) => "object_type_extension",
            Self::InterfaceTypeExtension(_) => "interface_type_extension",
            Self::UnionTypeExtension(_) => "union_type_extension",
            Self::EnumTypeExtension(_) => "enum_type_extension",
            Self::InputObjectTypeExtension(_) => "input_object_type_extension",
        }
    }

    pub fn loc(&self) -> Option<&'a Loc> {
        match *self {
            Self::Name(n) => n.loc.as_ref(),
            Self::Document(n) => n.loc.as_ref(),
            Self::OperationDefinition(n) => n.loc.as_ref(),
            Self::VariableDefinition(n) => n.loc.as_ref(),
            Self::Variable(n) => n.loc.as_ref(),
            Self::SelectionSet(n) => n.loc.as_ref(),
            Self::Field(n) => n.loc.as_ref(),
            Self::Argument(n) => n.loc.as_ref(),
            Self::FragmentSpread(n) => n.loc.as_ref(),
            Self::InlineFragment(n) => n.loc.as_ref(),
            Self::FragmentDefinition(n) => n.loc.as_ref(),
            Self::IntValue(n) => n.loc.as_ref(),
            Self::FloatValue(n) => n.loc.as_ref(),
            Self::StringValue(n) => n.loc.as_ref(),
            Self::BooleanValue(n) => n.loc.as_ref(),
            Self::NullValue(n) => n.loc.as_ref(),
            Self::EnumValue(n) => n.loc.as_ref(),
            Self::ListValue(n) => n.loc.as_ref(),
            Self::ObjectValue(n) => n.loc.as_ref(),
            Self::ObjectField(n) => n.loc.as_ref(),
            Self::Directive(n) => n.loc.as_ref(),
            Self::NamedType(n) => n.loc.as_ref(),
            Self::ListType(n) => n.loc.as_ref(),
            Self::NonNullType(n) => n.loc.as_ref(),
            Self::SchemaDefinition(n) => n.loc.as_ref(),
            Self::OperationTypeDefinition(n) => n.loc.as_ref(),
            Self::ScalarTypeDefinition(n) => n.loc.as_ref(),
            Self::ObjectTypeDefinition(n) => n.loc.as_ref(),
            Self::FieldDefinition(n) => n.loc.as_ref(),
            Self::InputValueDefinition(n) => n.loc.as_ref(),
            Self::InterfaceTypeDefinition(n) => n.loc.as_ref(),
            Self::UnionTypeDefinition(n) => n.loc.as_ref(),
            Self::EnumTypeDefinition(n) => n.loc.as_ref(),
            Self::EnumValueDefinition(n) => n.loc.as_ref(),
            Self::InputObjectTypeDefinition(n) => n.loc.as_ref(),
            Self::DirectiveDefinition(n) => n.loc.as_ref(),
            Self::SchemaExtension(n) => n.loc.as_ref(),
            Self::ScalarTypeExtension(n) => n.loc.as_ref(),
            Self::ObjectTypeExtension(n) => n.loc.as_ref(),
            Self::InterfaceTypeExtension(n) => n.loc.as_ref(),
            Self::UnionTypeExtension(n) => n.loc.as_ref(),
            Self::EnumTypeExtension(n) => n.loc.as_ref(),
            Self::InputObjectTypeExtension(n) => n.loc.as_ref(),
        }
    }

    /// The address of the referenced node. Together with [`kind`](Self::kind)
    /// this identifies a node within one document; a node and its first
    /// field may share an address.
    pub fn addr(&self) -> usize {
        match *self {
            Self::Name(n) => n as *const _ as *const () as usize,
            Self::Document(n) => n as *const _ as *const () as usize,
            Self::OperationDefinition(n) => n as *const _ as *const () as usize,
            Self::VariableDefinition(n) => n as *const _ as *const () as usize,
            Self::Variable(n) => n as *const _ as *const () as usize,
            Self::SelectionSet(n) => n as *const _ as *const () as usize,
            Self::Field(n) => n as *const _ as *const () as usize,
            Self::Argument(n) => n as *const _ as *const () as usize,
            Self::FragmentSpread(n) => n as *const _ as *const () as usize,
            Self::InlineFragment(n) => n as *const _ as *const () as usize,
            Self::FragmentDefinition(n) => n as *const _ as *const () as usize,
            Self::IntValue(n) => n as *const _ as *const () as usize,
            Self::FloatValue(n) => n as *const _ as *const () as usize,
            Self::StringValue(n) => n as *const _ as *const () as usize,
            Self::BooleanValue(n) => n as *const _ as *const () as usize,
            Self::NullValue(n) => n as *const _ as *const () as usize,
            Self::EnumValue(n) => n as *const _ as *const () as usize,
            Self::ListValue(n) => n as *const _ as *const () as usize,
            Self::ObjectValue(n) => n as *const _ as *const () as usize,
            Self::ObjectField(n) => n as *const _ as *const () as usize,
            Self::Directive(n) => n as *const _ as *const () as usize,
            Self::NamedType(n) => n as *const _ as *const () as usize,
            Self::ListType(n) => n as *const _ as *const () as usize,
            Self::NonNullType(n) => n as *const _ as *const () as usize,
            Self::SchemaDefinition(n) => n as *const _ as *const () as usize,
            Self::OperationTypeDefinition(n) => n as *const _ as *const () as usize,
            Self::ScalarTypeDefinition(n) => n as *const _ as *const () as usize,
            Self::ObjectTypeDefinition(n) => n as *const _ as *const () as usize,
            Self::FieldDefinition(n) => n as *const _ as *const () as usize,
            Self::InputValueDefinition(n) => n as *const _ as *const () as usize,
            Self::InterfaceTypeDefinition(n) => n as *const _ as *const () as usize,
            Self::UnionTypeDefinition(n) => n as *const _ as *const () as usize,
            Self::EnumTypeDefinition(n) => n as *const _ as *const () as usize,
            Self::EnumValueDefinition(n) => n as *const _ as *const () as usize,
            Self::InputObjectTypeDefinition(n) => n as *const _ as *const () as usize,
            Self::DirectiveDefinition(n) => n as *const _ as *const () as usize,
            Self::SchemaExtension(n) => n as *const _ as *const () as usize,
            Self::ScalarTypeExtension(n) => n as *const _ as *const () as usize,
            Self::ObjectTypeExtension(n) => n as *const _ as *const () as usize,
            Self::InterfaceTypeExtension(n) => n as *const _ as *const () as usize,
            Self::UnionTypeExtension(n) => n as *const _ as *const () as usize,
            Self::EnumTypeExtension(n) => n as *const _ as *const () as usize,
            Self::InputObjectTypeExtension(n) => n as *const _ as *const () as usize,
        }
    }

    /// Identity comparison: the same node in memory.
    pub fn same_node(&self, other: &AstNode<'_>) -> bool {
        self.kind() == other.kind() && self.addr() == other.addr()
    }

    /// Direct children in traversal order.
    pub fn children(&self) -> Vec<AstNode<'a>> {
        let mut out = Vec::new();
        match *self {
            Self::Name(_)
            | Self::IntValue(_)
            | Self::FloatValue(_)
            | Self::StringValue(_)
            | Self::BooleanValue(_)
            | Self::NullValue(_)
            | Self::EnumValue(_) => {},
            Self::Document(n) => {
                out.extend(n.definitions.iter().map(AstNode::from));
            },
            Self::OperationDefinition(n) => {
                out.extend(n.name.as_ref().map(AstNode::Name));
                out.extend(n.variable_definitions.iter().map(AstNode::VariableDefinition));
                push_directives(&mut out, &n.directives);
                out.push(AstNode::SelectionSet(&n.selection_set));
            },
            Self::VariableDefinition(n) => {
                out.push(AstNode::Variable(&n.variable));
                out.push(AstNode::from(&n.ty));
                out.extend(n.default_value.as_ref().map(AstNode::from));
                push_directives(&mut out, &n.directives);
            },
            Self::Variable(n) => out.push(AstNode::Name(&n.name)),
            Self::SelectionSet(n) => {
                out.extend(n.selections.iter().map(AstNode::from));
            },
            Self::Field(n) => {
                out.extend(n.alias.as_ref().map(AstNode::Name));
                out.push(AstNode::Name(&n.name));
                out.extend(n.arguments.iter().map(AstNode::Argument));
                push_directives(&mut out, &n.directives);
                out.extend(n.selection_set.as_ref().map(AstNode::SelectionSet));
            },
            Self::Argument(n) => {
                out.push(AstNode::Name(&n.name));
                out.push(AstNode::from(&n.value));
            },
            Self::FragmentSpread(n) => {
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
            },
            Self::InlineFragment(n) => {
                out.extend(n.type_condition.as_ref().map(AstNode::NamedType));
                push_directives(&mut out, &n.directives);
                out.push(AstNode::SelectionSet(&n.selection_set));
            },
            Self::FragmentDefinition(n) => {
                out.push(AstNode::Name(&n.name));
                if let Some(var_defs) = &n.variable_definitions {
                    out.extend(var_defs.iter().map(AstNode::VariableDefinition));
                }
                out.push(AstNode::NamedType(&n.type_condition));
                push_directives(&mut out, &n.directives);
                out.push(AstNode::SelectionSet(&n.selection_set));
            },
            Self::ListValue(n) => out.extend(n.values.iter().map(AstNode::from)),
            Self::ObjectValue(n) => {
                out.extend(n.fields.iter().map(AstNode::ObjectField));
            },
            Self::ObjectField(n) => {
                out.push(AstNode::Name(&n.name));
                out.push(AstNode::from(&n.value));
            },
            Self::Directive(n) => {
                out.push(AstNode::Name(&n.name));
                out.extend(n.arguments.iter().map(AstNode::Argument));
            },
            Self::NamedType(n) => out.push(AstNode::Name(&n.name)),
            Self::ListType(n) => out.push(AstNode::from(n.ty.as_ref())),
            Self::NonNullType(n) => out.push(AstNode::from(n.ty.as_ref())),
            Self::SchemaDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                push_directives(&mut out, &n.directives);
                out.extend(n.operation_types.iter().map(AstNode::OperationTypeDefinition));
            },
            Self::OperationTypeDefinition(n) => out.push(AstNode::NamedType(&n.ty)),
            Self::ScalarTypeDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
            },
            Self::ObjectTypeDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                out.extend(n.interfaces.iter().map(AstNode::NamedType));
                push_directives(&mut out, &n.directives);
                out.extend(n.fields.iter().map(AstNode::FieldDefinition));
            },
            Self::FieldDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                out.extend(n.arguments.iter().map(AstNode::InputValueDefinition));
                out.push(AstNode::from(&n.ty));
                push_directives(&mut out, &n.directives);
            },
            Self::InputValueDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                out.push(AstNode::from(&n.ty));
                out.extend(n.default_value.as_ref().map(AstNode::from));
                push_directives(&mut out, &n.directives);
            },
            Self::InterfaceTypeDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                out.extend(n.interfaces.iter().map(AstNode::NamedType));
                push_directives(&mut out, &n.directives);
                out.extend(n.fields.iter().map(AstNode::FieldDefinition));
            },
            Self::UnionTypeDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
                out.extend(n.types.iter().map(AstNode::NamedType));
            },
            Self::EnumTypeDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
                out.extend(n.values.iter().map(AstNode::EnumValueDefinition));
            },
            Self::EnumValueDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
            },
            Self::InputObjectTypeDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
                out.extend(n.fields.iter().map(AstNode::InputValueDefinition));
            },
            Self::DirectiveDefinition(n) => {
                out.extend(n.description.as_ref().map(AstNode::StringValue));
                out.push(AstNode::Name(&n.name));
                out.extend(n.arguments.iter().map(AstNode::InputValueDefinition));
                out.extend(n.locations.iter().map(AstNode::Name));
            },
            Self::SchemaExtension(n) => {
                push_directives(&mut out, &n.directives);
                out.extend(n.operation_types.iter().map(AstNode::OperationTypeDefinition));
            },
            Self::ScalarTypeExtension(n) => {
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
            },
            Self::ObjectTypeExtension(n) => {
                out.push(AstNode::Name(&n.name));
                out.extend(n.interfaces.iter().map(AstNode::NamedType));
                push_directives(&mut out, &n.directives);
                out.extend(n.fields.iter().map(AstNode::FieldDefinition));
            },
            Self::InterfaceTypeExtension(n) => {
                out.push(AstNode::Name(&n.name));
                out.extend(n.interfaces.iter().map(AstNode::NamedType));
                push_directives(&mut out, &n.directives);
                out.extend(n.fields.iter().map(AstNode::FieldDefinition));
            },
            Self::UnionTypeExtension(n) => {
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
                out.extend(n.types.iter().map(AstNode::NamedType));
            },
            Self::EnumTypeExtension(n) => {
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
                out.extend(n.values.iter().map(AstNode::EnumValueDefinition));
            },
            Self::InputObjectTypeExtension(n) => {
                out.push(AstNode::Name(&n.name));
                push_directives(&mut out, &n.directives);
                out.extend(n.fields.iter().map(AstNode::InputValueDefinition));
            },
        }
        out
    }
}

fn push_directives<'a>(out: &mut Vec<AstNode<'a>>, directives: &'a [Directive]) {
    out.extend(directives.iter().map(AstNode::Directive));
}

impl<'a> From<&'a Definition> for AstNode<'a> {
    fn from(def: &'a Definition) -> Self {
        match def {
            Definition::Operation(d) => Self::OperationDefinition(d),
            Definition::Fragment(d) => Self::FragmentDefinition(d),
            Definition::Schema(d) => Self::SchemaDefinition(d),
            Definition::Type(d) => Self::from(d),
            Definition::Directive(d) => Self::DirectiveDefinition(d),
            Definition::SchemaExtension(d) => Self::SchemaExtension(d),
            Definition::TypeExtension(d) => Self::from(d),
        }
    }
}

impl<'a> From<&'a TypeDefinition> for AstNode<'a> {
    fn from(def: &'a TypeDefinition) -> Self {
        match def {
            TypeDefinition::Scalar(d) => Self::ScalarTypeDefinition(d),
            TypeDefinition::Object(d) => Self::ObjectTypeDefinition(d),
            TypeDefinition::Interface(d) => Self::InterfaceTypeDefinition(d),
            TypeDefinition::Union(d) => Self::UnionTypeDefinition(d),
            TypeDefinition::Enum(d) => Self::EnumTypeDefinition(d),
            TypeDefinition::InputObject(d) => Self::InputObjectTypeDefinition(d),
        }
    }
}

impl<'a> From<&'a TypeExtension> for AstNode<'a> {
    fn from(ext: &'a TypeExtension) -> Self {
        match ext {
            TypeExtension::Scalar(e) => Self::ScalarTypeExtension(e),
            TypeExtension::Object(e) => Self::ObjectTypeExtension(e),
            TypeExtension::Interface(e) => Self::InterfaceTypeExtension(e),
            TypeExtension::Union(e) => Self::UnionTypeExtension(e),
            TypeExtension::Enum(e) => Self::EnumTypeExtension(e),
            TypeExtension::InputObject(e) => Self::InputObjectTypeExtension(e),
        }
    }
}

impl<'a> From<&'a Selection> for AstNode<'a> {
    fn from(selection: &'a Selection) -> Self {
        match selection {
            Selection::Field(s) => Self::Field(s),
            Selection::FragmentSpread(s) => Self::FragmentSpread(s),
            Selection::InlineFragment(s) => Self::InlineFragment(s),
        }
    }
}

impl<'a> From<&'a Value> for AstNode<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Variable(v) => Self::Variable(v),
            Value::Int(v) => Self::IntValue(v),
            Value::Float(v) => Self::FloatValue(v),
            Value::String(v) => Self::StringValue(v),
            Value::Boolean(v) => Self::BooleanValue(v),
            Value::Null(v) => Self::NullValue(v),
            Value::Enum(v) => Self::EnumValue(v),
            Value::List(v) => Self::ListValue(v),
            Value::Object(v) => Self::ObjectValue(v),
        }
    }
}

impl<'a> From<&'a Type> for AstNode<'a> {
    fn from(ty: &'a Type) -> Self {
        match ty {
            Type::Named(t) => Self::NamedType(t),
            Type::List(t) => Self::ListType(t),
            Type::NonNull(t) => Self::NonNullType(t),
        }
    }
}

impl<'a> From<&'a Document> for AstNode<'a> {
    fn from(doc: &'a Document) -> Self {
        Self::Document(doc)
    }
}
