use crate::execution::values::get_directive_values;
use crate::schema::Schema;
use crate::types::include_directive;
use crate::types::skip_directive;
use crate::types::NamedType;
use crate::Value;
use graphql_engine_parser::ast;
use indexmap::IndexMap;
use serde_json::Map;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::collections::HashSet;

/// Field nodes grouped by response key, in selection order.
pub type FieldGroups<'a> = IndexMap<&'a str, SmallVec<[&'a ast::Field; 1]>>;

/// Collects the fields `selection_set` selects on an object of type
/// `runtime_type`, expanding fragments whose type condition applies and
/// dropping selections excluded by `@skip`/`@include`.
pub fn collect_fields<'a>(
    schema: &Schema,
    fragments: &HashMap<String, &'a ast::FragmentDefinition>,
    variable_values: &Map<String, Value>,
    runtime_type: &NamedType,
    selection_set: &'a ast::SelectionSet,
) -> FieldGroups<'a> {
    let mut collector = FieldCollector {
        schema,
        fragments,
        variable_values,
        runtime_type,
        fields: IndexMap::new(),
        visited_fragments: HashSet::new(),
    };
    collector.collect(selection_set);
    collector.fields
}

/// Collects the fields selected below `field_nodes`, which all produce
/// values of type `return_type`.
pub fn collect_subfields<'a>(
    schema: &Schema,
    fragments: &HashMap<String, &'a ast::FragmentDefinition>,
    variable_values: &Map<String, Value>,
    return_type: &NamedType,
    field_nodes: &[&'a ast::Field],
) -> FieldGroups<'a> {
    let mut collector = FieldCollector {
        schema,
        fragments,
        variable_values,
        runtime_type: return_type,
        fields: IndexMap::new(),
        visited_fragments: HashSet::new(),
    };
    for node in field_nodes {
        if let Some(selection_set) = &node.selection_set {
            collector.collect(selection_set);
        }
    }
    collector.fields
}

struct FieldCollector<'a, 'c> {
    schema: &'c Schema,
    fragments: &'c HashMap<String, &'a ast::FragmentDefinition>,
    variable_values: &'c Map<String, Value>,
    runtime_type: &'c NamedType,
    fields: FieldGroups<'a>,
    visited_fragments: HashSet<&'a str>,
}

impl<'a> FieldCollector<'a, '_> {
    fn collect(&mut self, selection_set: &'a ast::SelectionSet) {
        for selection in &selection_set.selections {
            if !self.should_include(selection.directives()) {
                continue;
            }
            match selection {
                ast::Selection::Field(field) => {
                    self.fields
                        .entry(field.response_key())
                        .or_default()
                        .push(field);
                },
                ast::Selection::InlineFragment(inline) => {
                    if self.fragment_condition_matches(inline.type_condition.as_ref()) {
                        self.collect(&inline.selection_set);
                    }
                },
                ast::Selection::FragmentSpread(spread) => {
                    let name = spread.name.as_str();
                    if !self.visited_fragments.insert(name) {
                        continue;
                    }
                    let Some(fragment) = self.fragments.get(name).copied() else {
                        continue;
                    };
                    if self.fragment_condition_matches(Some(&fragment.type_condition)) {
                        self.collect(&fragment.selection_set);
                    }
                },
            }
        }
    }

    /// `@skip(if: true)` wins over `@include(if: true)`.
    fn should_include(&self, directives: &[ast::Directive]) -> bool {
        let is_true = |values: Option<Result<Map<String, Value>, _>>| {
            matches!(values, Some(Ok(args)) if args.get("if") == Some(&Value::Bool(true)))
        };
        let is_false = |values: Option<Result<Map<String, Value>, _>>| {
            matches!(values, Some(Ok(args)) if args.get("if") == Some(&Value::Bool(false)))
        };
        let skip = get_directive_values(
            &skip_directive(),
            directives,
            self.schema,
            self.variable_values,
        );
        if is_true(skip) {
            return false;
        }
        let include = get_directive_values(
            &include_directive(),
            directives,
            self.schema,
            self.variable_values,
        );
        !is_false(include)
    }

    fn fragment_condition_matches(&self, type_condition: Option<&ast::NamedType>) -> bool {
        let Some(type_condition) = type_condition else {
            return true;
        };
        let Some(conditional_type) = self.schema.get_type(type_condition.name.as_str()) else {
            return false;
        };
        if conditional_type.name() == self.runtime_type.name() {
            return true;
        }
        conditional_type.is_abstract_type()
            && self.schema.is_sub_type(conditional_type, self.runtime_type)
    }
}
