use crate::ast::*;
use crate::token::Token;
use crate::token::TokenKind;
use crate::GraphQLError;
use crate::Lexer;
use crate::Result;
use crate::Source;
use std::sync::Arc;

/// Maximum nesting depth for selection sets, list/object values and type
/// references. Keeps adversarial inputs like `[[[[...` from overflowing
/// the stack.
const MAX_RECURSION_DEPTH: usize = 64;

/// Knobs for [`parse_with_options`] and [`Parser`].
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Omit [`Loc`] information from every node.
    pub no_location: bool,

    /// Abort with a syntax error once more than this many tokens have been
    /// read. Guards servers against very large documents.
    pub max_tokens: Option<usize>,

    /// Accept (deprecated) variable definitions on fragments:
    /// `fragment A($var: Boolean = false) on T { ... }`.
    pub allow_legacy_fragment_variables: bool,
}

/// Parses a complete GraphQL document (executable and/or type-system
/// definitions).
pub fn parse(source: impl Into<Source>) -> Result<Document> {
    parse_with_options(source, ParseOptions::default())
}

pub fn parse_with_options(source: impl Into<Source>, options: ParseOptions) -> Result<Document> {
    Parser::new(Arc::new(source.into()), options).parse_document()
}

/// Parses a lone value literal such as `[1, $x]`.
pub fn parse_value(source: impl Into<Source>) -> Result<Value> {
    let mut parser = Parser::new(Arc::new(source.into()), ParseOptions::default());
    parser.expect_token(TokenKind::Sof)?;
    let value = parser.parse_value_literal(false)?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(value)
}

/// Like [`parse_value`] but rejects variables.
pub fn parse_const_value(source: impl Into<Source>) -> Result<ConstValue> {
    let mut parser = Parser::new(Arc::new(source.into()), ParseOptions::default());
    parser.expect_token(TokenKind::Sof)?;
    let value = parser.parse_value_literal(true)?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(value)
}

/// Parses a lone type reference such as `[String!]!`.
pub fn parse_type(source: impl Into<Source>) -> Result<Type> {
    let mut parser = Parser::new(Arc::new(source.into()), ParseOptions::default());
    parser.expect_token(TokenKind::Sof)?;
    let ty = parser.parse_type_reference()?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(ty)
}

/// A recursive-descent parser over a [`Lexer`].
///
/// Every `parse_*` method consumes exactly the grammar production it is
/// named after, starting at the lexer's current token.
pub struct Parser {
    lexer: Lexer,
    options: ParseOptions,
    token_counter: usize,
    recursion_depth: usize,
}

impl Parser {
    pub fn new(source: Arc<Source>, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(source),
            options,
            token_counter: 0,
            recursion_depth: 0,
        }
    }

    // =========================================================================
    // Document
    // =========================================================================

    pub fn parse_document(&mut self) -> Result<Document> {
        let start = self.lexer.token.clone();
        let definitions = self.many(TokenKind::Sof, Self::parse_definition, TokenKind::Eof)?;
        Ok(Document {
            definitions,
            loc: self.loc(&start),
        })
    }

    pub fn parse_name(&mut self) -> Result<Name> {
        let token = self.expect_token(TokenKind::Name)?;
        Ok(Name {
            value: token.value.clone().unwrap_or_default(),
            loc: self.loc(&token),
        })
    }

    fn parse_definition(&mut self) -> Result<Definition> {
        if self.peek(TokenKind::CurlyBraceOpen) {
            return Ok(Definition::Operation(self.parse_operation_definition()?));
        }

        // Descriptions are only allowed before type-system definitions, so
        // look past one to find the keyword.
        let has_description = self.peek_description();
        let keyword_token = if has_description {
            self.lexer.lookahead()?
        } else {
            self.lexer.token.clone()
        };

        if keyword_token.kind == TokenKind::Name {
            let keyword = keyword_token.value.as_deref().unwrap_or_default();
            match keyword {
                "schema" => return Ok(Definition::Schema(self.parse_schema_definition()?)),
                "scalar" | "type" | "interface" | "union" | "enum" | "input" => {
                    return Ok(Definition::Type(self.parse_type_definition(keyword)?));
                },
                "directive" => {
                    return Ok(Definition::Directive(self.parse_directive_definition()?));
                },
                _ => {},
            }

            if has_description {
                return Err(GraphQLError::syntax_error(
                    self.lexer.source(),
                    self.lexer.token.start,
                    "Unexpected description, descriptions are supported only on type definitions.",
                ));
            }

            match keyword {
                "query" | "mutation" | "subscription" => {
                    return Ok(Definition::Operation(self.parse_operation_definition()?));
                },
                "fragment" => {
                    return Ok(Definition::Fragment(self.parse_fragment_definition()?));
                },
                "extend" => return self.parse_type_system_extension(),
                _ => {},
            }
        }

        Err(self.unexpected(Some(&keyword_token)))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    pub fn parse_operation_definition(&mut self) -> Result<OperationDefinition> {
        let start = self.lexer.token.clone();
        if self.peek(TokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
                loc: self.loc(&start),
            });
        }
        let operation = self.parse_operation_type()?;
        let name = if self.peek(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    fn parse_operation_type(&mut self) -> Result<OperationType> {
        let token = self.expect_token(TokenKind::Name)?;
        token
            .value
            .as_deref()
            .and_then(OperationType::from_keyword)
            .ok_or_else(|| self.unexpected(Some(&token)))
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition>> {
        self.optional_many(
            TokenKind::ParenOpen,
            Self::parse_variable_definition,
            TokenKind::ParenClose,
        )
    }

    fn parse_variable_definition(&mut self) -> Result<VariableDefinition> {
        let start = self.lexer.token.clone();
        let variable = self.parse_variable()?;
        self.expect_token(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(VariableDefinition {
            variable,
            ty,
            default_value,
            directives,
            loc: self.loc(&start),
        })
    }

    fn parse_variable(&mut self) -> Result<Variable> {
        let start = self.lexer.token.clone();
        self.expect_token(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            name,
            loc: self.loc(&start),
        })
    }

    pub fn parse_selection_set(&mut self) -> Result<SelectionSet> {
        let start = self.lexer.token.clone();
        self.enter_recursion()?;
        let selections = self.many(
            TokenKind::CurlyBraceOpen,
            Self::parse_selection,
            TokenKind::CurlyBraceClose,
        );
        self.exit_recursion();
        Ok(SelectionSet {
            selections: selections?,
            loc: self.loc(&start),
        })
    }

    fn parse_selection(&mut self) -> Result<Selection> {
        if self.peek(TokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    fn parse_field(&mut self) -> Result<Field> {
        let start = self.lexer.token.clone();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.expect_optional_token(TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek(TokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    fn parse_arguments(&mut self, is_const: bool) -> Result<Vec<Argument>> {
        self.optional_many(
            TokenKind::ParenOpen,
            |parser| parser.parse_argument(is_const),
            TokenKind::ParenClose,
        )
    }

    fn parse_argument(&mut self, is_const: bool) -> Result<Argument> {
        let start = self.lexer.token.clone();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Argument {
            name,
            value,
            loc: self.loc(&start),
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    fn parse_fragment(&mut self) -> Result<Selection> {
        let start = self.lexer.token.clone();
        self.expect_token(TokenKind::Ellipsis)?;

        let has_type_condition = self.expect_optional_keyword("on")?;
        if !has_type_condition && self.peek(TokenKind::Name) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                loc: self.loc(&start),
            }));
        }

        let type_condition = if has_type_condition {
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(&start),
        }))
    }

    pub fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition> {
        let start = self.lexer.token.clone();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        let variable_definitions = if self.options.allow_legacy_fragment_variables {
            Some(self.parse_variable_definitions()?)
        } else {
            None
        };
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            variable_definitions,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    /// FragmentName: Name but not `on`
    fn parse_fragment_name(&mut self) -> Result<Name> {
        if self.lexer.token.value.as_deref() == Some("on") {
            return Err(self.unexpected(None));
        }
        self.parse_name()
    }

    fn parse_type_condition(&mut self) -> Result<NamedType> {
        self.expect_keyword("on")?;
        self.parse_named_type()
    }

    // =========================================================================
    // Values
    // =========================================================================

    pub fn parse_value_literal(&mut self, is_const: bool) -> Result<Value> {
        let token = self.lexer.token.clone();
        match token.kind {
            TokenKind::SquareBracketOpen => {
                self.enter_recursion()?;
                let values = self.any(
                    TokenKind::SquareBracketOpen,
                    |parser| parser.parse_value_literal(is_const),
                    TokenKind::SquareBracketClose,
                );
                self.exit_recursion();
                Ok(Value::List(ListValue {
                    values: values?,
                    loc: self.loc(&token),
                }))
            },
            TokenKind::CurlyBraceOpen => {
                self.enter_recursion()?;
                let fields = self.any(
                    TokenKind::CurlyBraceOpen,
                    |parser| parser.parse_object_field(is_const),
                    TokenKind::CurlyBraceClose,
                );
                self.exit_recursion();
                Ok(Value::Object(ObjectValue {
                    fields: fields?,
                    loc: self.loc(&token),
                }))
            },
            TokenKind::IntValue => {
                self.advance_lexer()?;
                Ok(Value::Int(IntValue {
                    value: token.value.clone().unwrap_or_default(),
                    loc: self.loc(&token),
                }))
            },
            TokenKind::FloatValue => {
                self.advance_lexer()?;
                Ok(Value::Float(FloatValue {
                    value: token.value.clone().unwrap_or_default(),
                    loc: self.loc(&token),
                }))
            },
            TokenKind::StringValue | TokenKind::BlockStringValue => {
                Ok(Value::String(self.parse_string_literal()?))
            },
            TokenKind::Name => {
                self.advance_lexer()?;
                let loc = self.loc(&token);
                Ok(match token.value.as_deref().unwrap_or_default() {
                    "true" => Value::Boolean(BooleanValue { value: true, loc }),
                    "false" => Value::Boolean(BooleanValue { value: false, loc }),
                    "null" => Value::Null(NullValue { loc }),
                    other => Value::Enum(EnumValue {
                        value: other.to_string(),
                        loc,
                    }),
                })
            },
            TokenKind::Dollar => {
                if is_const {
                    let variable_token = self.expect_token(TokenKind::Dollar)?;
                    let name_token = self.lexer.token.clone();
                    if name_token.kind == TokenKind::Name {
                        return Err(GraphQLError::syntax_error(
                            self.lexer.source(),
                            variable_token.start,
                            format!(
                                "Unexpected variable '${}' in constant value.",
                                name_token.value.unwrap_or_default(),
                            ),
                        ));
                    }
                    return Err(self.unexpected(Some(&variable_token)));
                }
                Ok(Value::Variable(self.parse_variable()?))
            },
            _ => Err(self.unexpected(None)),
        }
    }

    fn parse_object_field(&mut self, is_const: bool) -> Result<ObjectField> {
        let start = self.lexer.token.clone();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField {
            name,
            value,
            loc: self.loc(&start),
        })
    }

    fn parse_string_literal(&mut self) -> Result<StringValue> {
        let token = self.lexer.token.clone();
        self.advance_lexer()?;
        Ok(StringValue {
            value: token.value.clone().unwrap_or_default(),
            block: token.kind == TokenKind::BlockStringValue,
            loc: self.loc(&token),
        })
    }

    // =========================================================================
    // Directives and types
    // =========================================================================

    fn parse_directives(&mut self, is_const: bool) -> Result<Vec<Directive>> {
        let mut directives = vec![];
        while self.peek(TokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, is_const: bool) -> Result<Directive> {
        let start = self.lexer.token.clone();
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(Directive {
            name,
            arguments,
            loc: self.loc(&start),
        })
    }

    pub fn parse_type_reference(&mut self) -> Result<Type> {
        let start = self.lexer.token.clone();
        let ty = if self.expect_optional_token(TokenKind::SquareBracketOpen)? {
            self.enter_recursion()?;
            let inner = self.parse_type_reference();
            self.exit_recursion();
            let inner = inner?;
            self.expect_token(TokenKind::SquareBracketClose)?;
            Type::List(ListType {
                ty: Box::new(inner),
                loc: self.loc(&start),
            })
        } else {
            Type::Named(self.parse_named_type()?)
        };
        if self.expect_optional_token(TokenKind::Bang)? {
            return Ok(Type::NonNull(NonNullType {
                ty: Box::new(ty),
                loc: self.loc(&start),
            }));
        }
        Ok(ty)
    }

    fn parse_named_type(&mut self) -> Result<NamedType> {
        let start = self.lexer.token.clone();
        let name = self.parse_name()?;
        Ok(NamedType {
            name,
            loc: self.loc(&start),
        })
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn peek_description(&self) -> bool {
        self.peek(TokenKind::StringValue) || self.peek(TokenKind::BlockStringValue)
    }

    fn parse_description(&mut self) -> Result<Option<StringValue>> {
        if self.peek_description() {
            Ok(Some(self.parse_string_literal()?))
        } else {
            Ok(None)
        }
    }

    fn parse_schema_definition(&mut self) -> Result<SchemaDefinition> {
        let start = self.lexer.token.clone();
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            TokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            TokenKind::CurlyBraceClose,
        )?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            loc: self.loc(&start),
        })
    }

    fn parse_operation_type_definition(&mut self) -> Result<OperationTypeDefinition> {
        let start = self.lexer.token.clone();
        let operation = self.parse_operation_type()?;
        self.expect_token(TokenKind::Colon)?;
        let ty = self.parse_named_type()?;
        Ok(OperationTypeDefinition {
            operation,
            ty,
            loc: self.loc(&start),
        })
    }

    fn parse_type_definition(&mut self, keyword: &str) -> Result<TypeDefinition> {
        let start = self.lexer.token.clone();
        let description = self.parse_description()?;
        self.expect_keyword(keyword)?;
        let name = self.parse_name()?;
        let def = match keyword {
            "scalar" => {
                let directives = self.parse_directives(true)?;
                TypeDefinition::Scalar(ScalarTypeDefinition {
                    description,
                    name,
                    directives,
                    loc: self.loc(&start),
                })
            },
            "type" => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(true)?;
                let fields = self.parse_fields_definition()?;
                TypeDefinition::Object(ObjectTypeDefinition {
                    description,
                    name,
                    interfaces,
                    directives,
                    fields,
                    loc: self.loc(&start),
                })
            },
            "interface" => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(true)?;
                let fields = self.parse_fields_definition()?;
                TypeDefinition::Interface(InterfaceTypeDefinition {
                    description,
                    name,
                    interfaces,
                    directives,
                    fields,
                    loc: self.loc(&start),
                })
            },
            "union" => {
                let directives = self.parse_directives(true)?;
                let types = self.parse_union_member_types()?;
                TypeDefinition::Union(UnionTypeDefinition {
                    description,
                    name,
                    directives,
                    types,
                    loc: self.loc(&start),
                })
            },
            "enum" => {
                let directives = self.parse_directives(true)?;
                let values = self.parse_enum_values_definition()?;
                TypeDefinition::Enum(EnumTypeDefinition {
                    description,
                    name,
                    directives,
                    values,
                    loc: self.loc(&start),
                })
            },
            _ => {
                let directives = self.parse_directives(true)?;
                let fields = self.parse_input_fields_definition()?;
                TypeDefinition::InputObject(InputObjectTypeDefinition {
                    description,
                    name,
                    directives,
                    fields,
                    loc: self.loc(&start),
                })
            },
        };
        Ok(def)
    }

    fn parse_implements_interfaces(&mut self) -> Result<Vec<NamedType>> {
        if self.expect_optional_keyword("implements")? {
            self.delimited_many(TokenKind::Ampersand, Self::parse_named_type)
        } else {
            Ok(vec![])
        }
    }

    fn parse_fields_definition(&mut self) -> Result<Vec<FieldDefinition>> {
        self.optional_many(
            TokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            TokenKind::CurlyBraceClose,
        )
    }

    fn parse_field_definition(&mut self) -> Result<FieldDefinition> {
        let start = self.lexer.token.clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect_token(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
            loc: self.loc(&start),
        })
    }

    fn parse_argument_defs(&mut self) -> Result<Vec<InputValueDefinition>> {
        self.optional_many(
            TokenKind::ParenOpen,
            Self::parse_input_value_def,
            TokenKind::ParenClose,
        )
    }

    fn parse_input_value_def(&mut self) -> Result<InputValueDefinition> {
        let start = self.lexer.token.clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(InputValueDefinition {
            description,
            name,
            ty,
            default_value,
            directives,
            loc: self.loc(&start),
        })
    }

    fn parse_union_member_types(&mut self) -> Result<Vec<NamedType>> {
        if self.expect_optional_token(TokenKind::Equals)? {
            self.delimited_many(TokenKind::Pipe, Self::parse_named_type)
        } else {
            Ok(vec![])
        }
    }

    fn parse_enum_values_definition(&mut self) -> Result<Vec<EnumValueDefinition>> {
        self.optional_many(
            TokenKind::CurlyBraceOpen,
            Self::parse_enum_value_definition,
            TokenKind::CurlyBraceClose,
        )
    }

    fn parse_enum_value_definition(&mut self) -> Result<EnumValueDefinition> {
        let start = self.lexer.token.clone();
        let description = self.parse_description()?;
        let name = self.parse_enum_value_name()?;
        let directives = self.parse_directives(true)?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(&start),
        })
    }

    fn parse_enum_value_name(&mut self) -> Result<Name> {
        let token = &self.lexer.token;
        if matches!(token.value.as_deref(), Some("true" | "false" | "null")) {
            return Err(GraphQLError::syntax_error(
                self.lexer.source(),
                token.start,
                format!(
                    "{} is reserved and cannot be used for an enum value.",
                    token.description(),
                ),
            ));
        }
        self.parse_name()
    }

    fn parse_input_fields_definition(&mut self) -> Result<Vec<InputValueDefinition>> {
        self.optional_many(
            TokenKind::CurlyBraceOpen,
            Self::parse_input_value_def,
            TokenKind::CurlyBraceClose,
        )
    }

    fn parse_directive_definition(&mut self) -> Result<DirectiveDefinition> {
        let start = self.lexer.token.clone();
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let repeatable = self.expect_optional_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.delimited_many(TokenKind::Pipe, Self::parse_directive_location)?;
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            loc: self.loc(&start),
        })
    }

    fn parse_directive_location(&mut self) -> Result<Name> {
        let start = self.lexer.token.clone();
        let name = self.parse_name()?;
        if name.value.parse::<DirectiveLocation>().is_ok() {
            return Ok(name);
        }
        Err(self.unexpected(Some(&start)))
    }

    // =========================================================================
    // Type-system extensions
    // =========================================================================

    fn parse_type_system_extension(&mut self) -> Result<Definition> {
        let keyword_token = self.lexer.lookahead()?;
        if keyword_token.kind == TokenKind::Name {
            match keyword_token.value.as_deref().unwrap_or_default() {
                "schema" => return Ok(Definition::SchemaExtension(self.parse_schema_extension()?)),
                keyword @ ("scalar" | "type" | "interface" | "union" | "enum" | "input") => {
                    let keyword = keyword.to_string();
                    return Ok(Definition::TypeExtension(self.parse_type_extension(&keyword)?));
                },
                _ => {},
            }
        }
        Err(self.unexpected(Some(&keyword_token)))
    }

    fn parse_schema_extension(&mut self) -> Result<SchemaExtension> {
        let start = self.lexer.token.clone();
        self.expect_keyword("extend")?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.optional_many(
            TokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            TokenKind::CurlyBraceClose,
        )?;
        if directives.is_empty() && operation_types.is_empty() {
            return Err(self.unexpected(None));
        }
        Ok(SchemaExtension {
            directives,
            operation_types,
            loc: self.loc(&start),
        })
    }

    /// An extension must add something; `extend type Foo` alone is an
    /// error reported at the token following the name.
    fn parse_type_extension(&mut self, keyword: &str) -> Result<TypeExtension> {
        let start = self.lexer.token.clone();
        self.expect_keyword("extend")?;
        self.expect_keyword(keyword)?;
        let name = self.parse_name()?;
        let ext = match keyword {
            "scalar" => {
                let directives = self.parse_directives(true)?;
                if directives.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::Scalar(ScalarTypeExtension {
                    name,
                    directives,
                    loc: self.loc(&start),
                })
            },
            "type" | "interface" => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(true)?;
                let fields = self.parse_fields_definition()?;
                if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
                    return Err(self.unexpected(None));
                }
                let loc = self.loc(&start);
                if keyword == "type" {
                    TypeExtension::Object(ObjectTypeExtension {
                        name,
                        interfaces,
                        directives,
                        fields,
                        loc,
                    })
                } else {
                    TypeExtension::Interface(InterfaceTypeExtension {
                        name,
                        interfaces,
                        directives,
                        fields,
                        loc,
                    })
                }
            },
            "union" => {
                let directives = self.parse_directives(true)?;
                let types = self.parse_union_member_types()?;
                if directives.is_empty() && types.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::Union(UnionTypeExtension {
                    name,
                    directives,
                    types,
                    loc: self.loc(&start),
                })
            },
            "enum" => {
                let directives = self.parse_directives(true)?;
                let values = self.parse_enum_values_definition()?;
                if directives.is_empty() && values.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::Enum(EnumTypeExtension {
                    name,
                    directives,
                    values,
                    loc: self.loc(&start),
                })
            },
            _ => {
                let directives = self.parse_directives(true)?;
                let fields = self.parse_input_fields_definition()?;
                if directives.is_empty() && fields.is_empty() {
                    return Err(self.unexpected(None));
                }
                TypeExtension::InputObject(InputObjectTypeExtension {
                    name,
                    directives,
                    fields,
                    loc: self.loc(&start),
                })
            },
        };
        Ok(ext)
    }

    // =========================================================================
    // Core parsing utilities
    // =========================================================================

    fn loc(&self, start_token: &Token) -> Option<Loc> {
        if self.options.no_location {
            return None;
        }
        Some(Loc::new(
            start_token.start,
            self.lexer.last_token.end,
            self.lexer.source().clone(),
        ))
    }

    fn peek(&self, kind: TokenKind) -> bool {
        self.lexer.token.kind == kind
    }

    /// Consumes the current token if it has the given kind; otherwise
    /// fails with `Expected <kind>, found <token>.`
    pub fn expect_token(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.lexer.token.clone();
        if token.kind == kind {
            self.advance_lexer()?;
            return Ok(token);
        }
        Err(GraphQLError::syntax_error(
            self.lexer.source(),
            token.start,
            format!("Expected {}, found {}.", kind, token.description()),
        ))
    }

    fn expect_optional_token(&mut self, kind: TokenKind) -> Result<bool> {
        if self.lexer.token.kind == kind {
            self.advance_lexer()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        let token = self.lexer.token.clone();
        if token.kind == TokenKind::Name && token.value.as_deref() == Some(keyword) {
            return self.advance_lexer();
        }
        Err(GraphQLError::syntax_error(
            self.lexer.source(),
            token.start,
            format!("Expected '{}', found {}.", keyword, token.description()),
        ))
    }

    fn expect_optional_keyword(&mut self, keyword: &str) -> Result<bool> {
        let token = &self.lexer.token;
        if token.kind == TokenKind::Name && token.value.as_deref() == Some(keyword) {
            self.advance_lexer()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// `Unexpected <token>.` at `at_token`, or at the current token.
    fn unexpected(&self, at_token: Option<&Token>) -> GraphQLError {
        let token = at_token.unwrap_or(&self.lexer.token);
        GraphQLError::syntax_error(
            self.lexer.source(),
            token.start,
            format!("Unexpected {}.", token.description()),
        )
    }

    /// Zero or more items between `open` and `close`.
    fn any<T>(
        &mut self,
        open: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> Result<T>,
        close: TokenKind,
    ) -> Result<Vec<T>> {
        self.expect_token(open)?;
        let mut nodes = vec![];
        while !self.expect_optional_token(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// Like [`many`](Self::many), but the whole delimited group may be
    /// absent, yielding an empty list.
    fn optional_many<T>(
        &mut self,
        open: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> Result<T>,
        close: TokenKind,
    ) -> Result<Vec<T>> {
        if !self.expect_optional_token(open)? {
            return Ok(vec![]);
        }
        let mut nodes = vec![parse_fn(self)?];
        while !self.expect_optional_token(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// One or more items between `open` and `close`.
    fn many<T>(
        &mut self,
        open: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> Result<T>,
        close: TokenKind,
    ) -> Result<Vec<T>> {
        self.expect_token(open)?;
        let mut nodes = vec![parse_fn(self)?];
        while !self.expect_optional_token(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// One or more items separated by `delimiter`, with an optional leading
    /// delimiter.
    fn delimited_many<T>(
        &mut self,
        delimiter: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.expect_optional_token(delimiter)?;
        let mut nodes = vec![];
        loop {
            nodes.push(parse_fn(self)?);
            if !self.expect_optional_token(delimiter)? {
                break;
            }
        }
        Ok(nodes)
    }

    fn advance_lexer(&mut self) -> Result<()> {
        let token = self.lexer.advance()?;
        if let Some(max_tokens) = self.options.max_tokens {
            if token.kind != TokenKind::Eof {
                self.token_counter += 1;
                if self.token_counter > max_tokens {
                    return Err(GraphQLError::syntax_error(
                        self.lexer.source(),
                        token.start,
                        format!("Document contains more than {max_tokens} tokens. Parsing aborted."),
                    ));
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Recursion depth
    // =========================================================================

    fn enter_recursion(&mut self) -> Result<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            return Err(GraphQLError::syntax_error(
                self.lexer.source(),
                self.lexer.token.start,
                format!("Document exceeds the maximum nesting depth of {MAX_RECURSION_DEPTH}."),
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }
}
