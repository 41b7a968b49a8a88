use crate::schema::Schema;
use crate::types::Directive;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::NamedType;
use crate::types::TypeRef;
use crate::utilities::type_from_ast;
use crate::Value;
use graphql_engine_parser::ast::AstNode;

/// Tracks where a traversal is in terms of the schema.
///
/// Call [`enter`](Self::enter) and [`leave`](Self::leave) with every node
/// a visitor sees, in the same order. The getters then describe the
/// innermost position: the output type expected there, the composite type
/// whose fields are being selected, the input type a literal must match,
/// and the field, argument, directive, enum value and default value in
/// scope. Each getter returns `None` when the document refers to something
/// the schema doesn't define.
#[derive(Debug)]
pub struct TypeInfo<'a> {
    schema: &'a Schema,
    type_stack: Vec<Option<TypeRef>>,
    parent_type_stack: Vec<Option<&'a NamedType>>,
    input_type_stack: Vec<Option<TypeRef>>,
    field_def_stack: Vec<Option<&'a Field>>,
    default_value_stack: Vec<Option<&'a Value>>,
    directive: Option<&'a Directive>,
    argument: Option<&'a InputValue>,
    enum_value: Option<&'a EnumValue>,
}

impl<'a> TypeInfo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            type_stack: vec![],
            parent_type_stack: vec![],
            input_type_stack: vec![],
            field_def_stack: vec![],
            default_value_stack: vec![],
            directive: None,
            argument: None,
            enum_value: None,
        }
    }

    /// Starts tracking with `initial_type` already in scope, for
    /// traversals that begin below the document root.
    pub fn with_initial_type(schema: &'a Schema, initial_type: TypeRef) -> Self {
        let mut type_info = Self::new(schema);
        let named = schema.named_type_of(&initial_type);
        if named.is_some_and(NamedType::is_input_type) {
            type_info.input_type_stack.push(Some(initial_type.clone()));
        }
        if named.is_some_and(NamedType::is_composite_type) {
            type_info.parent_type_stack.push(named);
        }
        if named.is_some_and(NamedType::is_output_type) {
            type_info.type_stack.push(Some(initial_type));
        }
        type_info
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn get_type(&self) -> Option<&TypeRef> {
        self.type_stack.last().and_then(Option::as_ref)
    }

    pub fn get_parent_type(&self) -> Option<&'a NamedType> {
        self.parent_type_stack.last().copied().flatten()
    }

    pub fn get_input_type(&self) -> Option<&TypeRef> {
        self.input_type_stack.last().and_then(Option::as_ref)
    }

    /// The input type enclosing the current one: the list type around a
    /// list item, or the input object around one of its fields.
    pub fn get_parent_input_type(&self) -> Option<&TypeRef> {
        let len = self.input_type_stack.len();
        if len < 2 {
            return None;
        }
        self.input_type_stack[len - 2].as_ref()
    }

    pub fn get_field_def(&self) -> Option<&'a Field> {
        self.field_def_stack.last().copied().flatten()
    }

    pub fn get_default_value(&self) -> Option<&'a Value> {
        self.default_value_stack.last().copied().flatten()
    }

    pub fn get_directive(&self) -> Option<&'a Directive> {
        self.directive
    }

    pub fn get_argument(&self) -> Option<&'a InputValue> {
        self.argument
    }

    pub fn get_enum_value(&self) -> Option<&'a EnumValue> {
        self.enum_value
    }

    fn named(&self, type_ref: Option<&TypeRef>) -> Option<&'a NamedType> {
        type_ref.and_then(|type_ref| self.schema.named_type_of(type_ref))
    }

    pub fn enter(&mut self, node: AstNode<'a>) {
        let schema = self.schema;
        match node {
            AstNode::SelectionSet(_) => {
                let named = self
                    .named(self.get_type())
                    .filter(|named| named.is_composite_type());
                self.parent_type_stack.push(named);
            },
            AstNode::Field(field) => {
                let field_def = self
                    .get_parent_type()
                    .and_then(|parent| schema.field_def(parent, &field.name.value));
                self.field_def_stack.push(field_def);
                self.type_stack.push(field_def.map(|def| def.ty.clone()));
            },
            AstNode::Directive(directive) => {
                self.directive = schema
                    .get_directive(&directive.name.value)
                    .map(|directive| &**directive);
            },
            AstNode::OperationDefinition(operation) => {
                let root = schema
                    .root_named_type(operation.operation)
                    .filter(|root| root.as_object().is_some());
                self.type_stack
                    .push(root.map(|root| TypeRef::named(root.name())));
            },
            AstNode::InlineFragment(fragment) => {
                let ty = match &fragment.type_condition {
                    Some(condition) => self.output_type_named(&condition.name.value),
                    None => self
                        .get_type()
                        .map(|current| TypeRef::named(current.named_type())),
                };
                self.type_stack.push(ty);
            },
            AstNode::FragmentDefinition(fragment) => {
                let ty = self.output_type_named(&fragment.type_condition.name.value);
                self.type_stack.push(ty);
            },
            AstNode::VariableDefinition(definition) => {
                let input_type = type_from_ast(schema, &definition.ty)
                    .filter(|ty| self.named(Some(ty)).is_some_and(NamedType::is_input_type));
                self.input_type_stack.push(input_type);
            },
            AstNode::Argument(argument) => {
                let argument_def = match (self.directive, self.get_field_def()) {
                    (Some(directive), _) => directive.args.get(&argument.name.value),
                    (None, Some(field_def)) => field_def.args.get(&argument.name.value),
                    (None, None) => None,
                };
                self.argument = argument_def;
                self.default_value_stack
                    .push(argument_def.and_then(|def| def.default_value.as_ref()));
                self.input_type_stack
                    .push(argument_def.map(|def| def.ty.clone()));
            },
            AstNode::ListValue(_) => {
                let item_type = self.get_input_type().map(|input_type| {
                    let list_type = input_type.nullable();
                    list_type.of_type().unwrap_or(list_type).clone()
                });
                // Items of a list have no default of their own.
                self.default_value_stack.push(None);
                self.input_type_stack.push(item_type);
            },
            AstNode::ObjectField(object_field) => {
                let input_field = self
                    .named(self.get_input_type())
                    .and_then(NamedType::as_input_object)
                    .and_then(|input_object| input_object.fields().get(&object_field.name.value));
                self.default_value_stack
                    .push(input_field.and_then(|field| field.default_value.as_ref()));
                self.input_type_stack
                    .push(input_field.map(|field| field.ty.clone()));
            },
            AstNode::EnumValue(enum_value) => {
                self.enum_value = self
                    .named(self.get_input_type())
                    .and_then(NamedType::as_enum)
                    .and_then(|enum_type| enum_type.get_value(&enum_value.value));
            },
            _ => {},
        }
    }

    pub fn leave(&mut self, node: AstNode<'a>) {
        match node {
            AstNode::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },
            AstNode::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },
            AstNode::Directive(_) => self.directive = None,
            AstNode::OperationDefinition(_)
            | AstNode::InlineFragment(_)
            | AstNode::FragmentDefinition(_) => {
                self.type_stack.pop();
            },
            AstNode::VariableDefinition(_) => {
                self.input_type_stack.pop();
            },
            AstNode::Argument(_) => {
                self.argument = None;
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },
            AstNode::ListValue(_) | AstNode::ObjectField(_) => {
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },
            AstNode::EnumValue(_) => self.enum_value = None,
            _ => {},
        }
    }

    fn output_type_named(&self, name: &str) -> Option<TypeRef> {
        self.schema
            .get_type(name)
            .filter(|ty| ty.is_output_type())
            .map(|ty| TypeRef::named(ty.name()))
    }
}
