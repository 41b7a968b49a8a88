use crate::schema::Schema;
use crate::types::Directive;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::NamedType;
use crate::types::TypeRef;
use crate::utilities::TypeInfo;
use crate::Value;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::visit;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::Visitor;
use graphql_engine_parser::VisitorAction;
use std::collections::HashMap;
use std::collections::HashSet;

pub(crate) const ABORT_MESSAGE: &str =
    "Too many validation errors, error limit reached. Validation aborted.";

/// A variable reference together with the input type and default value of
/// the position it appears in.
#[derive(Clone, Debug)]
pub struct VariableUsage<'a> {
    pub node: &'a ast::Variable,
    pub ty: Option<TypeRef>,
    pub default_value: Option<&'a Value>,
}

/// What rules can see and do during a validation run: the document, the
/// schema when there is one, the type information for the current node
/// and the error sink.
pub struct ValidationContext<'a> {
    document: &'a ast::Document,
    schema: Option<&'a Schema>,
    pub(crate) type_info: Option<TypeInfo<'a>>,
    errors: Vec<GraphQLError>,
    max_errors: Option<usize>,
    aborted: bool,
    allow_legacy_fragment_variables: bool,
    fragments: HashMap<String, &'a ast::FragmentDefinition>,
    fragment_spreads: HashMap<usize, Vec<&'a ast::FragmentSpread>>,
    recursively_referenced_fragments: HashMap<usize, Vec<&'a ast::FragmentDefinition>>,
    variable_usages: HashMap<(&'static str, usize), Vec<VariableUsage<'a>>>,
}

impl<'a> ValidationContext<'a> {
    /// A context for executable documents, with type information.
    pub(crate) fn new(
        schema: &'a Schema,
        document: &'a ast::Document,
        max_errors: Option<usize>,
        allow_legacy_fragment_variables: bool,
    ) -> Self {
        let mut context = Self::without_type_info(document, Some(schema));
        context.type_info = Some(TypeInfo::new(schema));
        context.max_errors = max_errors;
        context.allow_legacy_fragment_variables = allow_legacy_fragment_variables;
        context
    }

    /// A context for type-system documents, which need no type
    /// information and may have no schema.
    pub(crate) fn without_type_info(document: &'a ast::Document, schema: Option<&'a Schema>) -> Self {
        let mut fragments = HashMap::new();
        for fragment in document.fragments() {
            fragments.insert(fragment.name.value.clone(), fragment);
        }
        Self {
            document,
            schema,
            type_info: None,
            errors: vec![],
            max_errors: None,
            aborted: false,
            allow_legacy_fragment_variables: false,
            fragments,
            fragment_spreads: HashMap::new(),
            recursively_referenced_fragments: HashMap::new(),
            variable_usages: HashMap::new(),
        }
    }

    pub fn document(&self) -> &'a ast::Document {
        self.document
    }

    pub fn schema(&self) -> Option<&'a Schema> {
        self.schema
    }

    pub fn allow_legacy_fragment_variables(&self) -> bool {
        self.allow_legacy_fragment_variables
    }

    /// Records an error. Once the error limit is reached, records the abort
    /// marker instead and stops the traversal.
    pub fn report_error(&mut self, error: GraphQLError) {
        if self.aborted {
            return;
        }
        if self.max_errors.is_some_and(|max| self.errors.len() >= max) {
            tracing::debug!(errors = self.errors.len(), "validation aborted at error limit");
            self.errors.push(GraphQLError::new(ABORT_MESSAGE));
            self.aborted = true;
            return;
        }
        self.errors.push(error);
    }

    pub(crate) fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub(crate) fn into_errors(self) -> Vec<GraphQLError> {
        self.errors
    }

    pub fn get_fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    pub(crate) fn fragments(&self) -> &HashMap<String, &'a ast::FragmentDefinition> {
        &self.fragments
    }

    /// The fragment spreads directly inside `selection_set`, including
    /// those nested in fields and inline fragments but not inside the
    /// spread fragments.
    pub fn get_fragment_spreads(&mut self, selection_set: &'a ast::SelectionSet) -> Vec<&'a ast::FragmentSpread> {
        let key = selection_set as *const _ as usize;
        if let Some(spreads) = self.fragment_spreads.get(&key) {
            return spreads.clone();
        }
        let mut spreads = vec![];
        let mut sets_to_visit = vec![selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for selection in &set.selections {
                match selection {
                    ast::Selection::FragmentSpread(spread) => spreads.push(spread),
                    ast::Selection::Field(field) => {
                        if let Some(selection_set) = &field.selection_set {
                            sets_to_visit.push(selection_set);
                        }
                    },
                    ast::Selection::InlineFragment(inline) => {
                        sets_to_visit.push(&inline.selection_set)
                    },
                }
            }
        }
        self.fragment_spreads.insert(key, spreads.clone());
        spreads
    }

    /// Every fragment `operation` uses, directly or through other
    /// fragments, each once.
    pub fn get_recursively_referenced_fragments(
        &mut self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<&'a ast::FragmentDefinition> {
        let key = operation as *const _ as usize;
        if let Some(fragments) = self.recursively_referenced_fragments.get(&key) {
            return fragments.clone();
        }
        let mut fragments = vec![];
        let mut collected_names = HashSet::new();
        let mut sets_to_visit = vec![&operation.selection_set];
        while let Some(selection_set) = sets_to_visit.pop() {
            for spread in self.get_fragment_spreads(selection_set) {
                let name = spread.name.value.as_str();
                if !collected_names.insert(name) {
                    continue;
                }
                if let Some(fragment) = self.get_fragment(name) {
                    fragments.push(fragment);
                    sets_to_visit.push(&fragment.selection_set);
                }
            }
        }
        self.recursively_referenced_fragments
            .insert(key, fragments.clone());
        fragments
    }

    /// The variables referenced inside `node`, an operation or fragment
    /// definition, with the input type expected where each appears.
    pub fn get_variable_usages(&mut self, node: AstNode<'a>) -> Vec<VariableUsage<'a>> {
        let key = (node.kind(), node.addr());
        if let Some(usages) = self.variable_usages.get(&key) {
            return usages.clone();
        }
        let mut collector = VariableUsageCollector {
            type_info: self.schema.map(TypeInfo::new),
            usages: vec![],
        };
        visit(node, &mut collector);
        self.variable_usages.insert(key, collector.usages.clone());
        collector.usages
    }

    /// The variable usages of `operation` and of every fragment it uses.
    pub fn get_recursive_variable_usages(
        &mut self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<VariableUsage<'a>> {
        let mut usages = self.get_variable_usages(AstNode::OperationDefinition(operation));
        for fragment in self.get_recursively_referenced_fragments(operation) {
            usages.extend(self.get_variable_usages(AstNode::FragmentDefinition(fragment)));
        }
        usages
    }

    pub fn get_type(&self) -> Option<&TypeRef> {
        self.type_info.as_ref().and_then(TypeInfo::get_type)
    }

    pub fn get_parent_type(&self) -> Option<&'a NamedType> {
        self.type_info.as_ref().and_then(TypeInfo::get_parent_type)
    }

    pub fn get_input_type(&self) -> Option<&TypeRef> {
        self.type_info.as_ref().and_then(TypeInfo::get_input_type)
    }

    pub fn get_parent_input_type(&self) -> Option<&TypeRef> {
        self.type_info
            .as_ref()
            .and_then(TypeInfo::get_parent_input_type)
    }

    pub fn get_field_def(&self) -> Option<&'a Field> {
        self.type_info.as_ref().and_then(TypeInfo::get_field_def)
    }

    pub fn get_directive(&self) -> Option<&'a Directive> {
        self.type_info.as_ref().and_then(TypeInfo::get_directive)
    }

    pub fn get_argument(&self) -> Option<&'a InputValue> {
        self.type_info.as_ref().and_then(TypeInfo::get_argument)
    }

    pub fn get_enum_value(&self) -> Option<&'a EnumValue> {
        self.type_info.as_ref().and_then(TypeInfo::get_enum_value)
    }
}

struct VariableUsageCollector<'a> {
    type_info: Option<TypeInfo<'a>>,
    usages: Vec<VariableUsage<'a>>,
}

impl<'a> Visitor<'a> for VariableUsageCollector<'a> {
    fn enter(&mut self, node: AstNode<'a>) -> VisitorAction {
        if let AstNode::VariableDefinition(_) = node {
            return VisitorAction::Skip;
        }
        if let Some(type_info) = &mut self.type_info {
            type_info.enter(node);
        }
        if let AstNode::Variable(variable) = node {
            let type_info = self.type_info.as_ref();
            self.usages.push(VariableUsage {
                node: variable,
                ty: type_info.and_then(TypeInfo::get_input_type).cloned(),
                default_value: type_info.and_then(TypeInfo::get_default_value),
            });
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, node: AstNode<'a>) -> VisitorAction {
        if let Some(type_info) = &mut self.type_info {
            type_info.leave(node);
        }
        VisitorAction::Continue
    }
}
