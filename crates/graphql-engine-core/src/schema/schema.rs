use crate::introspection;
use crate::schema::SchemaConfig;
use crate::types::specified_directives;
use crate::types::specified_scalar;
use crate::types::Directive;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::SchemaBuildError;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::OperationType;
use graphql_engine_parser::GraphQLError;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The object and interface types implementing one interface.
#[derive(Clone, Debug, Default)]
pub struct Implementations {
    pub objects: Vec<Arc<ObjectType>>,
    pub interfaces: Vec<Arc<InterfaceType>>,
}

static NO_IMPLEMENTATIONS: LazyLock<Implementations> = LazyLock::new(Implementations::default);

/// An immutable, fully-resolved GraphQL schema.
///
/// Every type reachable from the root operation types, the explicitly
/// listed types, the directive arguments and the introspection types is
/// collected into a single type map, in discovery order. Types refer to
/// each other by name; [`get_type`](Self::get_type) resolves those names.
#[derive(Debug)]
pub struct Schema {
    description: Option<String>,
    query_type: Option<NamedType>,
    mutation_type: Option<NamedType>,
    subscription_type: Option<NamedType>,
    type_map: IndexMap<String, NamedType>,
    directives: Vec<Arc<Directive>>,
    implementations: HashMap<String, Implementations>,
    pub ast_node: Option<ast::SchemaDefinition>,
    pub extension_ast_nodes: Vec<ast::SchemaExtension>,
    pub(crate) assume_valid: bool,
    pub(crate) validation_errors: OnceLock<Vec<GraphQLError>>,
}

impl Schema {
    pub fn new(config: SchemaConfig) -> Result<Self> {
        let directives = config.directives.unwrap_or_else(specified_directives);

        let mut collector = TypeCollector::default();
        for ty in config
            .types
            .iter()
            .chain(&config.query)
            .chain(&config.mutation)
            .chain(&config.subscription)
        {
            collector.declare(ty)?;
        }

        for ty in &config.types {
            collector.collect(ty)?;
        }
        for root in [&config.query, &config.mutation, &config.subscription]
            .into_iter()
            .flatten()
        {
            collector.collect(root)?;
        }
        for directive in &directives {
            for arg in directive.args.values() {
                collector.collect_ref(&arg.ty)?;
            }
        }
        collector.collect_ref(&TypeRef::named("__Schema"))?;

        let type_map = collector.type_map;
        let implementations = build_implementations(&type_map);

        tracing::debug!(
            types = type_map.len(),
            directives = directives.len(),
            "built schema",
        );

        Ok(Self {
            description: config.description,
            query_type: config.query,
            mutation_type: config.mutation,
            subscription_type: config.subscription,
            type_map,
            directives,
            implementations,
            ast_node: config.ast_node,
            extension_ast_nodes: config.extension_ast_nodes,
            assume_valid: config.assume_valid,
            validation_errors: OnceLock::new(),
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn query_type(&self) -> Option<&Arc<ObjectType>> {
        self.query_type.as_ref().and_then(NamedType::as_object)
    }

    pub fn mutation_type(&self) -> Option<&Arc<ObjectType>> {
        self.mutation_type.as_ref().and_then(NamedType::as_object)
    }

    pub fn subscription_type(&self) -> Option<&Arc<ObjectType>> {
        self.subscription_type.as_ref().and_then(NamedType::as_object)
    }

    /// The object type serving `operation`, if one is configured.
    pub fn root_type(&self, operation: OperationType) -> Option<&Arc<ObjectType>> {
        self.root_named_type(operation).and_then(NamedType::as_object)
    }

    /// The configured root for `operation`, whatever its kind.
    pub fn root_named_type(&self, operation: OperationType) -> Option<&NamedType> {
        match operation {
            OperationType::Query => self.query_type.as_ref(),
            OperationType::Mutation => self.mutation_type.as_ref(),
            OperationType::Subscription => self.subscription_type.as_ref(),
        }
    }

    pub fn type_map(&self) -> &IndexMap<String, NamedType> {
        &self.type_map
    }

    pub fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.type_map.get(name)
    }

    /// Resolves the named type at the core of `type_ref`.
    pub fn named_type_of(&self, type_ref: &TypeRef) -> Option<&NamedType> {
        self.type_map.get(type_ref.named_type())
    }

    pub fn directives(&self) -> &[Arc<Directive>] {
        &self.directives
    }

    pub fn get_directive(&self, name: &str) -> Option<&Arc<Directive>> {
        self.directives.iter().find(|directive| directive.name == name)
    }

    /// The types that declare they implement the interface `name`.
    pub fn implementations(&self, name: &str) -> &Implementations {
        self.implementations.get(name).unwrap_or(&NO_IMPLEMENTATIONS)
    }

    /// The object types a value of an abstract type may have at runtime.
    pub fn possible_types(&self, abstract_type: &NamedType) -> Vec<&Arc<ObjectType>> {
        match abstract_type {
            NamedType::Union(union_type) => union_type
                .types()
                .iter()
                .filter_map(|name| self.get_type(name).and_then(NamedType::as_object))
                .collect(),
            NamedType::Interface(interface) => {
                self.implementations(&interface.name).objects.iter().collect()
            },
            _ => vec![],
        }
    }

    /// Whether `maybe_sub_type` is a member of the union, or an
    /// implementation of the interface, `abstract_type`.
    pub fn is_sub_type(&self, abstract_type: &NamedType, maybe_sub_type: &NamedType) -> bool {
        match abstract_type {
            NamedType::Union(union_type) => union_type
                .types()
                .iter()
                .any(|member| member == maybe_sub_type.name()),
            NamedType::Interface(interface) => {
                let implementations = self.implementations(&interface.name);
                match maybe_sub_type {
                    NamedType::Object(object) => implementations
                        .objects
                        .iter()
                        .any(|candidate| candidate.name == object.name),
                    NamedType::Interface(sub_interface) => implementations
                        .interfaces
                        .iter()
                        .any(|candidate| candidate.name == sub_interface.name),
                    _ => false,
                }
            },
            _ => false,
        }
    }

    /// Looks up a field on a composite type, including the meta fields:
    /// `__schema` and `__type` on the query root, `__typename` everywhere.
    pub fn field_def<'a>(
        &'a self,
        parent_type: &'a NamedType,
        field_name: &str,
    ) -> Option<&'a Field> {
        let is_query_root = self
            .query_type()
            .is_some_and(|query| query.name == parent_type.name());
        match field_name {
            "__schema" if is_query_root => Some(introspection::schema_meta_field_def()),
            "__type" if is_query_root => Some(introspection::type_meta_field_def()),
            "__typename" if parent_type.is_composite_type() => {
                Some(introspection::type_name_meta_field_def())
            },
            _ => parent_type.fields().and_then(|fields| fields.get(field_name)),
        }
    }

    /// A configuration that rebuilds an equivalent schema.
    pub fn to_config(&self) -> SchemaConfig {
        SchemaConfig {
            description: self.description.clone(),
            query: self.query_type.clone(),
            mutation: self.mutation_type.clone(),
            subscription: self.subscription_type.clone(),
            types: self.type_map.values().cloned().collect(),
            directives: Some(self.directives.clone()),
            ast_node: self.ast_node.clone(),
            extension_ast_nodes: self.extension_ast_nodes.clone(),
            assume_valid: self.assume_valid,
        }
    }
}

/// Walks the type graph in the order types are first referenced.
#[derive(Default)]
struct TypeCollector {
    declared: HashMap<String, NamedType>,
    type_map: IndexMap<String, NamedType>,
}

impl TypeCollector {
    fn declare(&mut self, ty: &NamedType) -> Result<()> {
        match self.declared.get(ty.name()) {
            Some(existing) if !existing.ptr_eq(ty) => Err(SchemaBuildError::DuplicateTypeName {
                type_name: ty.name().to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.declared.insert(ty.name().to_string(), ty.clone());
                Ok(())
            },
        }
    }

    fn lookup(&self, name: &str) -> Result<NamedType> {
        self.declared
            .get(name)
            .cloned()
            .or_else(|| specified_scalar(name).map(NamedType::Scalar))
            .or_else(|| introspection::introspection_type(name).cloned())
            .ok_or_else(|| SchemaBuildError::UnknownType {
                type_name: name.to_string(),
            })
    }

    fn collect_ref(&mut self, type_ref: &TypeRef) -> Result<()> {
        let name = type_ref.named_type();
        if self.type_map.contains_key(name) {
            return Ok(());
        }
        let ty = self.lookup(name)?;
        self.collect(&ty)
    }

    fn collect(&mut self, ty: &NamedType) -> Result<()> {
        if let Some(existing) = self.type_map.get(ty.name()) {
            if !existing.ptr_eq(ty) {
                return Err(SchemaBuildError::DuplicateTypeName {
                    type_name: ty.name().to_string(),
                });
            }
            return Ok(());
        }
        self.type_map.insert(ty.name().to_string(), ty.clone());

        match ty {
            NamedType::Union(union_type) => {
                for member in union_type.types() {
                    self.collect_ref(&TypeRef::named(member.as_str()))?;
                }
            },
            NamedType::Object(_) | NamedType::Interface(_) => {
                for interface in ty.interfaces() {
                    self.collect_ref(&TypeRef::named(interface.as_str()))?;
                }
                for field in ty.fields().into_iter().flat_map(|fields| fields.values()) {
                    self.collect_ref(&field.ty)?;
                    for arg in field.args.values() {
                        self.collect_ref(&arg.ty)?;
                    }
                }
            },
            NamedType::InputObject(input_object) => {
                for field in input_object.fields().values() {
                    self.collect_ref(&field.ty)?;
                }
            },
            NamedType::Scalar(_) | NamedType::Enum(_) => {},
        }
        Ok(())
    }
}

fn build_implementations(type_map: &IndexMap<String, NamedType>) -> HashMap<String, Implementations> {
    let mut implementations: HashMap<String, Implementations> = HashMap::new();
    for ty in type_map.values() {
        match ty {
            NamedType::Interface(interface) => {
                implementations.entry(interface.name.clone()).or_default();
                for name in interface.interfaces() {
                    if matches!(type_map.get(name), Some(NamedType::Interface(_))) {
                        implementations
                            .entry(name.clone())
                            .or_default()
                            .interfaces
                            .push(interface.clone());
                    }
                }
            },
            NamedType::Object(object) => {
                for name in object.interfaces() {
                    if matches!(type_map.get(name), Some(NamedType::Interface(_))) {
                        implementations
                            .entry(name.clone())
                            .or_default()
                            .objects
                            .push(object.clone());
                    }
                }
            },
            _ => {},
        }
    }
    implementations
}
