use crate::execution::collect_fields::collect_fields;
use crate::execution::collect_fields::collect_subfields;
use crate::execution::collect_fields::FieldGroups;
use crate::execution::middleware::Middleware;
use crate::execution::middleware::MiddlewareManager;
use crate::execution::values::get_argument_values;
use crate::execution::values::get_variable_values;
use crate::execution::values::MAX_VARIABLE_ERRORS;
use crate::execution::FieldValue;
use crate::execution::Path;
use crate::execution::ResolveInfo;
use crate::schema::validate_schema;
use crate::schema::Schema;
use crate::types::ArgumentValues;
use crate::types::Field;
use crate::types::FieldResolver;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::Resolved;
use crate::types::TypeRef;
use crate::types::TypeResolver;
use crate::utilities::inspect;
use crate::located_error;
use crate::FieldError;
use crate::MaybeAsync;
use crate::Value;
use futures::task::noop_waker_ref;
use futures::FutureExt;
use futures::StreamExt;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::OperationType;
use graphql_engine_parser::GraphQLError;
use serde::Serialize;
use serde_json::Map;
use smallvec::SmallVec;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use std::task::Context;
use std::task::Poll;
use tracing::Instrument;

pub(crate) type FieldNodes<'a> = SmallVec<[&'a ast::Field; 1]>;

/// The completed value of a field or selection set, or the error that
/// nulls the nearest nullable ancestor.
type Completed<'b> = MaybeAsync<'b, Result<Value, GraphQLError>>;

/// Everything needed to execute one request.
///
/// ```rust
/// # use graphql_engine_core::execution::ExecutionArgs;
/// # use graphql_engine_core::utilities::build_schema;
/// # use graphql_engine_parser::parse;
/// # use serde_json::json;
/// let schema = build_schema("type Query { greeting(name: String!): String }").unwrap();
/// let document = parse("query Greet($who: String!) { greeting(name: $who) }").unwrap();
/// let args = ExecutionArgs::new(&schema, &document)
///     .operation_name("Greet")
///     .variable_values(json!({"who": "you"}).as_object().cloned().unwrap_or_default());
/// ```
#[derive(Clone)]
pub struct ExecutionArgs<'a> {
    pub schema: &'a Schema,
    pub document: &'a ast::Document,
    pub root_value: FieldValue,
    pub context_value: Option<Arc<dyn Any + Send + Sync>>,
    pub variable_values: Map<String, Value>,
    pub operation_name: Option<String>,
    pub field_resolver: Option<FieldResolver>,
    pub type_resolver: Option<TypeResolver>,
    pub subscribe_field_resolver: Option<FieldResolver>,
    pub middleware: Vec<Middleware>,
}

impl<'a> ExecutionArgs<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        Self {
            schema,
            document,
            root_value: FieldValue::Null,
            context_value: None,
            variable_values: Map::new(),
            operation_name: None,
            field_resolver: None,
            type_resolver: None,
            subscribe_field_resolver: None,
            middleware: vec![],
        }
    }

    pub fn root_value(mut self, root_value: impl Into<FieldValue>) -> Self {
        self.root_value = root_value.into();
        self
    }

    /// A value every resolver can reach through
    /// [`ResolveInfo::context`].
    pub fn context_value<T: Any + Send + Sync>(mut self, context_value: T) -> Self {
        self.context_value = Some(Arc::new(context_value));
        self
    }

    pub fn variable_values(mut self, variable_values: Map<String, Value>) -> Self {
        self.variable_values = variable_values;
        self
    }

    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// Replaces [`default_field_resolver`] for fields without a resolver.
    pub fn field_resolver(
        mut self,
        resolver: impl Fn(&FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.field_resolver = Some(Arc::new(resolver));
        self
    }

    /// Replaces [`default_type_resolver`] for abstract types without a
    /// `resolve_type`.
    pub fn type_resolver(
        mut self,
        resolver: impl Fn(&FieldValue, &ResolveInfo<'_>, &NamedType) -> MaybeAsync<'static, Option<String>>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.type_resolver = Some(Arc::new(resolver));
        self
    }

    /// Replaces the default `subscribe` resolver of subscription root
    /// fields.
    pub fn subscribe_field_resolver(
        mut self,
        resolver: impl Fn(&FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.subscribe_field_resolver = Some(Arc::new(resolver));
        self
    }

    /// Adds a middleware. Middleware added first runs outermost.
    pub fn middleware(
        mut self,
        middleware: impl Fn(&FieldResolver, &FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }
}

/// The response to a request: `{data, errors?, extensions?}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

impl ExecutionResult {
    /// A result with no data, as produced when a request fails before
    /// execution starts.
    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: None,
            errors,
            extensions: None,
        }
    }

    /// The response as JSON.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Executes the operation selected from `args.document`.
///
/// The result is [`MaybeAsync::Ready`] when every resolver answered
/// synchronously; otherwise it is a future that completes the response.
/// Errors that prevent execution (an invalid schema, no matching
/// operation, bad variables) are reported in a result without data.
pub fn execute(args: ExecutionArgs<'_>) -> MaybeAsync<'_, ExecutionResult> {
    let span = tracing::debug_span!(
        "execute",
        operation_name = args.operation_name.as_deref()
    );
    let context = match span.in_scope(|| ExecutionContext::build(args)) {
        Ok(context) => context,
        Err(errors) => return MaybeAsync::Ready(ExecutionResult::from_errors(errors)),
    };
    let mut response = async move {
        let data = context.execute_operation().await;
        context.build_response(data)
    }
    .instrument(span)
    .boxed_local();
    match response.poll_unpin(&mut Context::from_waker(noop_waker_ref())) {
        Poll::Ready(result) => MaybeAsync::Ready(result),
        Poll::Pending => MaybeAsync::Pending(response),
    }
}

/// Executes a request whose resolvers are all synchronous.
///
/// Fails with `GraphQL execution failed to complete synchronously.` if any
/// resolver returns a pending value; that execution is cancelled.
pub fn execute_sync(args: ExecutionArgs<'_>) -> Result<ExecutionResult, GraphQLError> {
    match execute(args) {
        MaybeAsync::Ready(result) => Ok(result),
        MaybeAsync::Pending(_) => Err(GraphQLError::new(
            "GraphQL execution failed to complete synchronously.",
        )),
    }
}

/// Resolves a field by looking its name up in the source value.
///
/// Map-like sources yield the value under the field name (or null). A
/// [`FieldValue::Function`] found there is called with the field's info
/// and arguments.
pub fn default_field_resolver(
    source: &FieldValue,
    info: &ResolveInfo<'_>,
    args: &ArgumentValues,
) -> Resolved {
    let value = match source {
        FieldValue::Map(map) => map.get(info.field_name).cloned(),
        FieldValue::Value(Value::Object(object)) => {
            object.get(info.field_name).cloned().map(FieldValue::Value)
        },
        FieldValue::Typed { value, .. } => return default_field_resolver(value, info, args),
        _ => None,
    };
    match value {
        Some(FieldValue::Function(resolve)) => resolve(info, args),
        Some(value) => MaybeAsync::Ready(Ok(value)),
        None => MaybeAsync::Ready(Ok(FieldValue::Null)),
    }
}

/// Determines the object type of an abstract-typed value: its explicit
/// `__typename` if it has one, else the first possible type whose
/// `is_type_of` accepts it.
pub fn default_type_resolver(
    value: &FieldValue,
    info: &ResolveInfo<'_>,
    abstract_type: &NamedType,
) -> MaybeAsync<'static, Option<String>> {
    if let Some(type_name) = value.typename() {
        return MaybeAsync::Ready(Some(type_name.to_string()));
    }
    let mut checks = vec![];
    for possible_type in info.schema.possible_types(abstract_type) {
        let Some(is_type_of) = &possible_type.is_type_of else {
            continue;
        };
        match is_type_of(value, info) {
            MaybeAsync::Ready(true) if checks.is_empty() => {
                return MaybeAsync::Ready(Some(possible_type.name.clone()));
            },
            check => checks.push((possible_type.name.clone(), check)),
        }
    }
    if checks.iter().all(|(_, check)| !check.is_pending()) {
        return MaybeAsync::Ready(
            checks
                .into_iter()
                .find(|(_, check)| matches!(check, MaybeAsync::Ready(true)))
                .map(|(name, _)| name),
        );
    }
    let (names, checks): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    MaybeAsync::all(checks).map(move |matches| {
        names
            .into_iter()
            .zip(matches)
            .find_map(|(name, is_match)| is_match.then_some(name))
    })
}

type SubfieldsKey = (usize, SmallVec<[usize; 1]>);

/// The state of one execution: the selected operation, its coerced
/// variables and the errors collected so far.
pub(crate) struct ExecutionContext<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) fragments: HashMap<String, &'a ast::FragmentDefinition>,
    pub(crate) root_value: FieldValue,
    pub(crate) operation: &'a ast::OperationDefinition,
    pub(crate) variable_values: Map<String, Value>,
    context_value: Option<Arc<dyn Any + Send + Sync>>,
    field_resolver: FieldResolver,
    type_resolver: TypeResolver,
    pub(crate) subscribe_field_resolver: FieldResolver,
    middleware: MiddlewareManager,
    errors: RefCell<Vec<GraphQLError>>,
    subfields_cache: RefCell<HashMap<SubfieldsKey, Rc<FieldGroups<'a>>>>,
}

impl<'a> ExecutionContext<'a> {
    /// Selects the operation and coerces the variables, or reports why
    /// execution cannot start.
    pub(crate) fn build(args: ExecutionArgs<'a>) -> Result<Self, Vec<GraphQLError>> {
        let schema_errors = validate_schema(args.schema);
        if !schema_errors.is_empty() {
            return Err(schema_errors.to_vec());
        }

        let mut operation = None;
        let mut fragments = HashMap::new();
        for definition in &args.document.definitions {
            match definition {
                ast::Definition::Operation(definition) => match &args.operation_name {
                    None => {
                        if operation.is_some() {
                            return Err(vec![GraphQLError::new(
                                "Must provide operation name if query contains multiple \
                                operations.",
                            )]);
                        }
                        operation = Some(definition);
                    },
                    Some(operation_name) => {
                        if definition
                            .name
                            .as_ref()
                            .is_some_and(|name| name.as_str() == operation_name)
                        {
                            operation = Some(definition);
                        }
                    },
                },
                ast::Definition::Fragment(fragment) => {
                    fragments.insert(fragment.name.value.clone(), fragment);
                },
                _ => {},
            }
        }
        let Some(operation) = operation else {
            let error = match &args.operation_name {
                Some(operation_name) => {
                    GraphQLError::new(format!("Unknown operation named '{operation_name}'."))
                },
                None => GraphQLError::new("Must provide an operation."),
            };
            return Err(vec![error]);
        };

        let variable_values = get_variable_values(
            args.schema,
            &operation.variable_definitions,
            &args.variable_values,
            Some(MAX_VARIABLE_ERRORS),
        )?;

        let field_resolver: FieldResolver = match args.field_resolver {
            Some(resolver) => resolver,
            None => Arc::new(default_field_resolver),
        };
        let type_resolver: TypeResolver = match args.type_resolver {
            Some(resolver) => resolver,
            None => Arc::new(default_type_resolver),
        };
        let subscribe_field_resolver: FieldResolver = match args.subscribe_field_resolver {
            Some(resolver) => resolver,
            None => Arc::new(default_field_resolver),
        };

        Ok(Self {
            schema: args.schema,
            fragments,
            root_value: args.root_value,
            operation,
            variable_values,
            context_value: args.context_value,
            field_resolver,
            type_resolver,
            subscribe_field_resolver,
            middleware: MiddlewareManager::new(args.middleware),
            errors: RefCell::default(),
            subfields_cache: RefCell::default(),
        })
    }

    /// Sorts the collected errors into a deterministic order and pairs
    /// them with the data. A failed operation has no data.
    pub(crate) fn build_response(&self, data: Result<Value, GraphQLError>) -> ExecutionResult {
        let mut errors = self.errors.take();
        let data = match data {
            Ok(data) => Some(data),
            Err(error) => {
                errors.push(error);
                None
            },
        };
        errors.sort_by(|a, b| {
            a.locations()
                .cmp(b.locations())
                .then_with(|| a.path().cmp(&b.path()))
                .then_with(|| a.message().cmp(b.message()))
        });
        if !errors.is_empty() {
            tracing::debug!(error_count = errors.len(), "execution finished with errors");
        }
        ExecutionResult {
            data,
            errors,
            extensions: None,
        }
    }

    pub(crate) fn root_type(&self) -> Result<&'a NamedType, GraphQLError> {
        let operation_type = self.operation.operation;
        self.schema.root_named_type(operation_type).ok_or_else(|| {
            let message = match operation_type {
                OperationType::Query => "Schema does not define the required query root type.",
                OperationType::Mutation => "Schema is not configured for mutations.",
                OperationType::Subscription => "Schema is not configured for subscriptions.",
            };
            GraphQLError::new(message).with_node(self.operation.loc.as_ref())
        })
    }

    pub(crate) fn collect_root_fields(&self, root_type: &NamedType) -> FieldGroups<'a> {
        collect_fields(
            self.schema,
            &self.fragments,
            &self.variable_values,
            root_type,
            &self.operation.selection_set,
        )
    }

    fn execute_operation<'b>(&'b self) -> Completed<'b> {
        let root_type = match self.root_type() {
            Ok(root_type) => root_type,
            Err(error) => return MaybeAsync::Ready(Err(error)),
        };
        let root_fields = self.collect_root_fields(root_type);
        match self.operation.operation {
            OperationType::Mutation => {
                self.execute_fields_serially(root_type, &self.root_value, root_fields)
            },
            OperationType::Query | OperationType::Subscription => {
                self.execute_fields(root_type, &self.root_value, None, &root_fields)
            },
        }
    }

    /// Executes the fields of a mutation one after another: each field
    /// completes before the next one is resolved.
    fn execute_fields_serially<'b>(
        &'b self,
        parent_type: &'a NamedType,
        source: &'b FieldValue,
        fields: FieldGroups<'a>,
    ) -> Completed<'b> {
        let mut data = Map::new();
        let mut fields = fields.into_iter();
        while let Some((response_key, field_nodes)) = fields.next() {
            let path = Path::new(None, response_key, Some(parent_type.name()));
            match self.execute_field(parent_type, source, field_nodes, path) {
                None => continue,
                Some(MaybeAsync::Ready(Ok(value))) => {
                    data.insert(response_key.to_string(), value);
                },
                Some(MaybeAsync::Ready(Err(error))) => return MaybeAsync::Ready(Err(error)),
                Some(MaybeAsync::Pending(pending)) => {
                    return MaybeAsync::pending(async move {
                        data.insert(response_key.to_string(), pending.await?);
                        for (response_key, field_nodes) in fields {
                            let path = Path::new(None, response_key, Some(parent_type.name()));
                            if let Some(result) =
                                self.execute_field(parent_type, source, field_nodes, path)
                            {
                                data.insert(response_key.to_string(), result.await?);
                            }
                        }
                        Ok::<_, GraphQLError>(Value::Object(data))
                    });
                },
            }
        }
        MaybeAsync::Ready(Ok(Value::Object(data)))
    }

    /// Executes the fields of a selection set, letting asynchronous
    /// resolvers run concurrently. The response keeps selection order.
    fn execute_fields<'b>(
        &'b self,
        parent_type: &'a NamedType,
        source: &FieldValue,
        path: Option<&Arc<Path>>,
        fields: &FieldGroups<'a>,
    ) -> Completed<'b> {
        let mut response_keys = Vec::with_capacity(fields.len());
        let mut results = Vec::with_capacity(fields.len());
        for (response_key, field_nodes) in fields {
            let field_path = Path::new(path.cloned(), *response_key, Some(parent_type.name()));
            match self.execute_field(parent_type, source, field_nodes.clone(), field_path) {
                None => {},
                Some(MaybeAsync::Ready(Err(error))) => return MaybeAsync::Ready(Err(error)),
                Some(result) => {
                    response_keys.push(*response_key);
                    results.push(result);
                },
            }
        }
        MaybeAsync::all(results).map(move |results| {
            let mut data = Map::with_capacity(response_keys.len());
            for (response_key, result) in response_keys.into_iter().zip(results) {
                data.insert(response_key.to_string(), result?);
            }
            Ok(Value::Object(data))
        })
    }

    pub(crate) fn resolve_info<'b>(
        &'b self,
        field_def: &'a Field,
        field_nodes: &FieldNodes<'a>,
        parent_type: &'a ObjectType,
        path: Arc<Path>,
    ) -> ResolveInfo<'b> {
        let field_name = field_nodes
            .first()
            .map_or(field_def.name.as_str(), |node| node.name.as_str());
        ResolveInfo {
            field_name,
            field_nodes: field_nodes.iter().copied().collect(),
            return_type: &field_def.ty,
            parent_type,
            path,
            schema: self.schema,
            fragments: &self.fragments,
            root_value: &self.root_value,
            operation: self.operation,
            variable_values: &self.variable_values,
            context: self.context_value.as_ref(),
        }
    }

    /// Resolves one field and completes its value. Fields the parent type
    /// does not define yield `None` and are left out of the response.
    fn execute_field<'b>(
        &'b self,
        parent_type: &'a NamedType,
        source: &FieldValue,
        field_nodes: FieldNodes<'a>,
        path: Arc<Path>,
    ) -> Option<Completed<'b>> {
        let field_node = *field_nodes.first()?;
        let field_def = self.schema.field_def(parent_type, field_node.name.as_str())?;
        let parent_object = parent_type.as_object()?;
        let return_type = &field_def.ty;
        let info = self.resolve_info(field_def, &field_nodes, parent_object, path.clone());

        let args = match get_argument_values(
            &field_def.args,
            &field_node.arguments,
            self.schema,
            &self.variable_values,
            field_node.loc.as_ref(),
        ) {
            Ok(args) => args,
            Err(error) => {
                let error = located_error(error, field_locs(&field_nodes), path.as_list());
                return Some(MaybeAsync::Ready(self.handle_field_error(error, return_type)));
            },
        };

        let resolver = self
            .middleware
            .get_field_resolver(field_def.resolve.as_ref().unwrap_or(&self.field_resolver));
        tracing::trace!(
            parent_type = %parent_object.name,
            field_name = info.field_name,
            "resolving field"
        );
        let resolved = resolver(source, &info, &args);
        Some(self.complete_resolved(return_type, field_nodes, &info, resolved))
    }

    fn complete_resolved<'b>(
        &'b self,
        return_type: &'a TypeRef,
        field_nodes: FieldNodes<'a>,
        info: &ResolveInfo<'b>,
        resolved: Resolved,
    ) -> Completed<'b> {
        match resolved {
            MaybeAsync::Ready(result) => {
                self.complete_field_result(return_type, field_nodes, info, result)
            },
            MaybeAsync::Pending(pending) => {
                let info = info.clone();
                MaybeAsync::pending(async move {
                    let result = pending.await;
                    self.complete_field_result(return_type, field_nodes, &info, result)
                        .await
                })
            },
        }
    }

    fn complete_field_result<'b>(
        &'b self,
        return_type: &'a TypeRef,
        field_nodes: FieldNodes<'a>,
        info: &ResolveInfo<'b>,
        result: Result<FieldValue, FieldError>,
    ) -> Completed<'b> {
        let path = info.path.clone();
        let completed = match result {
            Ok(value) => self.complete_value(return_type, &field_nodes, info, &path, value),
            Err(error) => {
                MaybeAsync::Ready(Err(error.located(field_locs(&field_nodes), path.as_list())))
            },
        };
        completed.map(move |completed| {
            completed.or_else(|error| {
                let error = located_error(error, field_locs(&field_nodes), path.as_list());
                self.handle_field_error(error, return_type)
            })
        })
    }

    /// Records a field error and nulls the field, unless the field is
    /// non-null, in which case the error moves on to the parent.
    fn handle_field_error(
        &self,
        error: GraphQLError,
        return_type: &TypeRef,
    ) -> Result<Value, GraphQLError> {
        if return_type.is_non_null() {
            return Err(error);
        }
        self.errors.borrow_mut().push(error);
        Ok(Value::Null)
    }

    /// Turns a resolved value into response data according to the field's
    /// return type.
    fn complete_value<'b>(
        &'b self,
        return_type: &'a TypeRef,
        field_nodes: &FieldNodes<'a>,
        info: &ResolveInfo<'b>,
        path: &Arc<Path>,
        result: FieldValue,
    ) -> Completed<'b> {
        match return_type {
            TypeRef::NonNull(inner) => {
                let parent_type: &'b ObjectType = info.parent_type;
                let field_name = info.field_name;
                self.complete_value(inner, field_nodes, info, path, result)
                    .map(move |completed| match completed {
                        Ok(Value::Null) => Err(GraphQLError::new(format!(
                            "Cannot return null for non-nullable field {}.{field_name}.",
                            parent_type.name,
                        ))),
                        completed => completed,
                    })
            },
            _ if result.is_null() => MaybeAsync::Ready(Ok(Value::Null)),
            TypeRef::List(item_type) => {
                self.complete_list_value(item_type, field_nodes, info, path, result.into_untyped())
            },
            TypeRef::Named(type_name) => {
                let Some(named_type) = self.schema.get_type(type_name) else {
                    return MaybeAsync::Ready(Err(GraphQLError::new(format!(
                        "Cannot complete value of unexpected output type: '{type_name}'.",
                    ))));
                };
                match named_type {
                    NamedType::Scalar(scalar) => MaybeAsync::Ready(complete_leaf_value(
                        type_name,
                        result.into_untyped(),
                        |value| scalar.serialize(value),
                    )),
                    NamedType::Enum(enum_type) => MaybeAsync::Ready(complete_leaf_value(
                        type_name,
                        result.into_untyped(),
                        |value| enum_type.serialize(value),
                    )),
                    NamedType::Object(_) => self.complete_object_value(
                        named_type,
                        field_nodes,
                        info,
                        path,
                        result.into_untyped(),
                    ),
                    NamedType::Interface(_) | NamedType::Union(_) => {
                        self.complete_abstract_value(named_type, field_nodes, info, path, result)
                    },
                    NamedType::InputObject(_) => MaybeAsync::Ready(Err(GraphQLError::new(
                        format!("Cannot complete value of unexpected output type: '{type_name}'."),
                    ))),
                }
            },
        }
    }

    fn complete_list_value<'b>(
        &'b self,
        item_type: &'a TypeRef,
        field_nodes: &FieldNodes<'a>,
        info: &ResolveInfo<'b>,
        path: &Arc<Path>,
        result: FieldValue,
    ) -> Completed<'b> {
        let items = match result {
            FieldValue::List(items) => items,
            FieldValue::Value(Value::Array(items)) => {
                items.into_iter().map(FieldValue::Value).collect()
            },
            FieldValue::Stream(stream) => {
                let Some(stream) = stream.take() else {
                    return MaybeAsync::Ready(Err(GraphQLError::new(format!(
                        "Stream for field '{}.{}' was already consumed.",
                        info.parent_type.name, info.field_name,
                    ))));
                };
                let field_nodes = field_nodes.clone();
                let info = info.clone();
                let path = path.clone();
                return MaybeAsync::pending(async move {
                    let items = stream.collect::<Vec<_>>().await;
                    self.complete_list_items(item_type, &field_nodes, &info, &path, items)
                        .await
                });
            },
            _ => {
                return MaybeAsync::Ready(Err(GraphQLError::new(format!(
                    "Expected Iterable, but did not find one for field '{}.{}'.",
                    info.parent_type.name, info.field_name,
                ))));
            },
        };
        self.complete_list_items(item_type, field_nodes, info, path, items)
    }

    fn complete_list_items<'b>(
        &'b self,
        item_type: &'a TypeRef,
        field_nodes: &FieldNodes<'a>,
        info: &ResolveInfo<'b>,
        path: &Arc<Path>,
        items: Vec<FieldValue>,
    ) -> Completed<'b> {
        let mut completed = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let item_path = Path::new(Some(path.clone()), index, None);
            let item_nodes = field_nodes.clone();
            let item_result = self
                .complete_value(item_type, field_nodes, info, &item_path, item)
                .map(move |result| {
                    result.or_else(|error| {
                        let error =
                            located_error(error, field_locs(&item_nodes), item_path.as_list());
                        self.handle_field_error(error, item_type)
                    })
                });
            match item_result {
                MaybeAsync::Ready(Err(error)) => return MaybeAsync::Ready(Err(error)),
                item_result => completed.push(item_result),
            }
        }
        MaybeAsync::all(completed).map(|results| {
            results
                .into_iter()
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        })
    }

    fn complete_abstract_value<'b>(
        &'b self,
        abstract_type: &'a NamedType,
        field_nodes: &FieldNodes<'a>,
        info: &ResolveInfo<'b>,
        path: &Arc<Path>,
        result: FieldValue,
    ) -> Completed<'b> {
        let resolve_type = match abstract_type {
            NamedType::Interface(interface) => interface.resolve_type.as_ref(),
            NamedType::Union(union) => union.resolve_type.as_ref(),
            _ => None,
        }
        .unwrap_or(&self.type_resolver);

        match resolve_type(&result, info, abstract_type) {
            MaybeAsync::Ready(runtime_type_name) => self.complete_runtime_object(
                abstract_type,
                runtime_type_name,
                field_nodes,
                info,
                path,
                result,
            ),
            MaybeAsync::Pending(runtime_type_name) => {
                let field_nodes = field_nodes.clone();
                let info = info.clone();
                let path = path.clone();
                MaybeAsync::pending(async move {
                    let runtime_type_name = runtime_type_name.await;
                    self.complete_runtime_object(
                        abstract_type,
                        runtime_type_name,
                        &field_nodes,
                        &info,
                        &path,
                        result,
                    )
                    .await
                })
            },
        }
    }

    fn complete_runtime_object<'b>(
        &'b self,
        abstract_type: &'a NamedType,
        runtime_type_name: Option<String>,
        field_nodes: &FieldNodes<'a>,
        info: &ResolveInfo<'b>,
        path: &Arc<Path>,
        result: FieldValue,
    ) -> Completed<'b> {
        match self.ensure_valid_runtime_type(runtime_type_name, abstract_type, field_nodes, info) {
            Ok(runtime_type) => self.complete_object_value(
                runtime_type,
                field_nodes,
                info,
                path,
                result.into_untyped(),
            ),
            Err(error) => MaybeAsync::Ready(Err(error)),
        }
    }

    fn ensure_valid_runtime_type(
        &self,
        runtime_type_name: Option<String>,
        abstract_type: &'a NamedType,
        field_nodes: &FieldNodes<'a>,
        info: &ResolveInfo<'_>,
    ) -> Result<&'a NamedType, GraphQLError> {
        let abstract_name = abstract_type.name();
        let Some(runtime_type_name) = runtime_type_name else {
            return Err(GraphQLError::new(format!(
                "Abstract type '{abstract_name}' must resolve to an Object type at runtime for \
                field '{}.{}'. Either the '{abstract_name}' type should provide a \
                'resolve_type' function or each possible type should provide an 'is_type_of' \
                function.",
                info.parent_type.name, info.field_name,
            ))
            .with_nodes(field_locs(field_nodes)));
        };
        let Some(runtime_type) = self.schema.get_type(&runtime_type_name) else {
            return Err(GraphQLError::new(format!(
                "Abstract type '{abstract_name}' was resolved to a type '{runtime_type_name}' \
                that does not exist inside the schema.",
            ))
            .with_nodes(field_locs(field_nodes)));
        };
        if !matches!(runtime_type, NamedType::Object(_)) {
            return Err(GraphQLError::new(format!(
                "Abstract type '{abstract_name}' was resolved to a non-object type \
                '{runtime_type_name}'.",
            ))
            .with_nodes(field_locs(field_nodes)));
        }
        if !self.schema.is_sub_type(abstract_type, runtime_type) {
            return Err(GraphQLError::new(format!(
                "Runtime Object type '{runtime_type_name}' is not a possible type for \
                '{abstract_name}'.",
            ))
            .with_nodes(field_locs(field_nodes)));
        }
        Ok(runtime_type)
    }

    fn complete_object_value<'b>(
        &'b self,
        return_type: &'a NamedType,
        field_nodes: &FieldNodes<'a>,
        info: &ResolveInfo<'b>,
        path: &Arc<Path>,
        result: FieldValue,
    ) -> Completed<'b> {
        let Some(object_type) = return_type.as_object() else {
            return MaybeAsync::Ready(Err(GraphQLError::new(format!(
                "Cannot complete value of unexpected output type: '{}'.",
                return_type.name(),
            ))));
        };
        if let Some(is_type_of) = &object_type.is_type_of {
            match is_type_of(&result, info) {
                MaybeAsync::Ready(true) => {},
                MaybeAsync::Ready(false) => {
                    return MaybeAsync::Ready(Err(invalid_return_type_error(
                        object_type,
                        &result,
                        field_nodes,
                    )));
                },
                MaybeAsync::Pending(is_type_of) => {
                    let field_nodes = field_nodes.clone();
                    let path = path.clone();
                    return MaybeAsync::pending(async move {
                        if !is_type_of.await {
                            return Err(invalid_return_type_error(
                                object_type,
                                &result,
                                &field_nodes,
                            ));
                        }
                        self.execute_subfields(return_type, &field_nodes, &path, &result)
                            .await
                    });
                },
            }
        }
        self.execute_subfields(return_type, field_nodes, path, &result)
    }

    fn execute_subfields<'b>(
        &'b self,
        return_type: &'a NamedType,
        field_nodes: &[&'a ast::Field],
        path: &Arc<Path>,
        source: &FieldValue,
    ) -> Completed<'b> {
        let subfields = self.collect_subfields(return_type, field_nodes);
        self.execute_fields(return_type, source, Some(path), &subfields)
    }

    /// Sub-selections are collected once per return type and set of field
    /// nodes, so list items share the work.
    fn collect_subfields(
        &self,
        return_type: &'a NamedType,
        field_nodes: &[&'a ast::Field],
    ) -> Rc<FieldGroups<'a>> {
        let key: SubfieldsKey = (
            return_type as *const NamedType as usize,
            field_nodes
                .iter()
                .map(|node| *node as *const ast::Field as usize)
                .collect(),
        );
        if let Some(subfields) = self.subfields_cache.borrow().get(&key) {
            return subfields.clone();
        }
        let subfields = Rc::new(collect_subfields(
            self.schema,
            &self.fragments,
            &self.variable_values,
            return_type,
            field_nodes,
        ));
        self.subfields_cache
            .borrow_mut()
            .insert(key, subfields.clone());
        subfields
    }
}

pub(crate) fn field_locs<'n>(
    field_nodes: &'n [&ast::Field],
) -> impl Iterator<Item = Option<&'n ast::Loc>> {
    field_nodes.iter().map(|node| node.loc.as_ref())
}

/// Describes a resolved value for error messages.
pub(crate) fn describe(value: &FieldValue) -> String {
    match value.to_value() {
        Some(value) => inspect(&value),
        None => format!("{value:?}"),
    }
}

fn complete_leaf_value(
    type_name: &str,
    result: FieldValue,
    serialize: impl FnOnce(&Value) -> Result<Value, GraphQLError>,
) -> Result<Value, GraphQLError> {
    let Some(value) = result.to_value() else {
        return Err(GraphQLError::new(format!(
            "Expected a plain value for leaf type '{type_name}' but got: {}.",
            describe(&result),
        )));
    };
    let serialized = serialize(&value)?;
    if serialized.is_null() {
        return Err(GraphQLError::new(format!(
            "Expected `{type_name}.serialize({})` to return non-nullable value, returned: null",
            inspect(&value),
        )));
    }
    Ok(serialized)
}

fn invalid_return_type_error(
    object_type: &ObjectType,
    result: &FieldValue,
    field_nodes: &[&ast::Field],
) -> GraphQLError {
    GraphQLError::new(format!(
        "Expected value of type '{}' but got: {}.",
        object_type.name,
        describe(result),
    ))
    .with_nodes(field_locs(field_nodes))
}
