use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::schema::Schema;
use crate::types::ArgumentValues;
use crate::types::FieldResolver;
use crate::types::Resolved;
use crate::types::TypeRef;
use crate::utilities::value_from_ast;
use crate::Value;
use graphql_engine_parser::ast;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// The reason reported for `@deprecated` when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

pub type FieldMap = IndexMap<String, Field>;
pub type InputValueMap = IndexMap<String, InputValue>;

/// A field of an object or interface type.
#[derive(Clone)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub args: InputValueMap,
    pub resolve: Option<FieldResolver>,
    pub subscribe: Option<FieldResolver>,
    pub deprecation_reason: Option<String>,
    pub ast_node: Option<ast::FieldDefinition>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty: ty.into(),
            args: IndexMap::new(),
            resolve: None,
            subscribe: None,
            deprecation_reason: None,
            ast_node: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn argument(mut self, arg: InputValue) -> Self {
        self.args.insert(arg.name.clone(), arg);
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn resolver(
        mut self,
        resolve: impl Fn(&FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.resolve = Some(Arc::new(resolve));
        self
    }

    pub fn subscriber(
        mut self,
        subscribe: impl Fn(&FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.subscribe = Some(Arc::new(subscribe));
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("args", &self.args)
            .field("deprecation_reason", &self.deprecation_reason)
            .finish_non_exhaustive()
    }
}

/// An argument of a field or directive, or a field of an input object.
///
/// A `default_value` of `None` means no default was declared, which is
/// different from a declared default of `null`.
///
/// Defaults read from SDL or an introspection result also keep their
/// `default_literal`. It is read against `ty` when the default is used,
/// since the types it names may not exist while the schema is built.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub default_literal: Option<ast::Value>,
    pub deprecation_reason: Option<String>,
    pub out_name: Option<String>,
    pub ast_node: Option<ast::InputValueDefinition>,
}

pub type Argument = InputValue;
pub type InputField = InputValue;

impl InputValue {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty: ty.into(),
            default_value: None,
            default_literal: None,
            deprecation_reason: None,
            out_name: None,
            ast_node: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self.default_literal = None;
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// The key the coerced value is stored under, instead of `name`.
    pub fn out_name(mut self, out_name: impl Into<String>) -> Self {
        self.out_name = Some(out_name.into());
        self
    }

    /// A non-null argument or input field without a default must be
    /// provided.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }

    /// The default as a value of `ty`, or `None` when none was declared.
    ///
    /// A literal default is coerced like a literal argument: a lone value
    /// becomes a list, omitted input fields take their own defaults and
    /// `out_type` applies. Programmatic defaults are returned as given.
    pub fn coerced_default(&self, schema: &Schema) -> Option<Value> {
        match &self.default_literal {
            Some(literal) => value_from_ast(literal, &self.ty, schema, None)
                .or_else(|| self.default_value.clone()),
            None => self.default_value.clone(),
        }
    }

    pub(crate) fn key(&self) -> &str {
        self.out_name.as_deref().unwrap_or(&self.name)
    }
}
