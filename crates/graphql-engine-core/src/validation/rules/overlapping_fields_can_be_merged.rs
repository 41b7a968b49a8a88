use crate::schema::Schema;
use crate::types::Field;
use crate::types::NamedType;
use crate::types::TypeRef;
use crate::utilities::natural_cmp;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::print_ast;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::rc::Rc;

/// Fields sharing a response key within a selection set, including those
/// brought in by fragments, can be merged into one response entry.
///
/// Two fields merge when they are the same field with the same arguments
/// (unless their parents are distinct object types, which can never both
/// apply), return compatible shapes, and have mergeable subselections.
pub fn overlapping_fields_can_be_merged<'a>(
    _context: &ValidationContext<'a>,
) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(OverlappingFieldsCanBeMerged::default())
}

#[derive(Default)]
struct OverlappingFieldsCanBeMerged<'a> {
    compared_fragment_pairs: PairSet<'a>,
    cached_fields_and_fragment_names: HashMap<usize, Rc<FieldsAndFragmentNames<'a>>>,
}

impl<'a> ValidationRule<'a> for OverlappingFieldsCanBeMerged<'a> {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::SelectionSet(selection_set) = node else {
            return VisitorAction::Continue;
        };
        let Some(schema) = context.schema() else {
            return VisitorAction::Continue;
        };
        let conflicts = ConflictFinder {
            context: &*context,
            schema,
            cached_fields_and_fragment_names: &mut self.cached_fields_and_fragment_names,
            compared_fragment_pairs: &mut self.compared_fragment_pairs,
        }
        .find_conflicts_within_selection_set(context.get_parent_type(), selection_set);

        for conflict in conflicts {
            let Conflict {
                reason,
                fields1,
                fields2,
            } = conflict;
            context.report_error(
                GraphQLError::new(format!(
                    "Fields '{}' conflict because {}. Use different aliases on the fields \
                    to fetch both if this was intentional.",
                    reason.response_name,
                    reason.message,
                ))
                .with_nodes(
                    fields1
                        .iter()
                        .chain(fields2.iter())
                        .map(|field| field.loc.as_ref()),
                ),
            );
        }
        VisitorAction::Continue
    }
}

/// A field as selected: its parent type, node and definition, where known.
type NodeAndDef<'a> = (Option<&'a NamedType>, &'a ast::Field, Option<&'a Field>);

type NodeAndDefCollection<'a> = IndexMap<&'a str, Vec<NodeAndDef<'a>>>;

struct FieldsAndFragmentNames<'a> {
    fields: NodeAndDefCollection<'a>,
    fragment_names: Vec<&'a str>,
}

struct Conflict<'a> {
    reason: ConflictReason,
    fields1: Vec<&'a ast::Field>,
    fields2: Vec<&'a ast::Field>,
}

struct ConflictReason {
    response_name: String,
    message: ConflictReasonMessage,
}

enum ConflictReasonMessage {
    Message(String),
    Subfields(Vec<ConflictReason>),
}

impl std::fmt::Display for ConflictReasonMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Subfields(reasons) => {
                for (i, reason) in reasons.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(
                        f,
                        "subfields '{}' conflict because {}",
                        reason.response_name, reason.message,
                    )?;
                }
                Ok(())
            },
        }
    }
}

impl<'a> Conflict<'a> {
    fn new(response_name: &str, message: String, node1: &'a ast::Field, node2: &'a ast::Field) -> Self {
        Self {
            reason: ConflictReason {
                response_name: response_name.to_string(),
                message: ConflictReasonMessage::Message(message),
            },
            fields1: vec![node1],
            fields2: vec![node2],
        }
    }
}

/// Unordered pairs of fragment names already compared, remembering
/// whether the comparison assumed mutually exclusive parents.
#[derive(Default)]
struct PairSet<'a> {
    data: HashMap<(&'a str, &'a str), bool>,
}

impl<'a> PairSet<'a> {
    fn key(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
        if a < b { (a, b) } else { (b, a) }
    }

    /// A pair compared under mutual exclusivity does not cover the stricter
    /// non-exclusive comparison.
    fn has(&self, a: &'a str, b: &'a str, are_mutually_exclusive: bool) -> bool {
        match self.data.get(&Self::key(a, b)) {
            None => false,
            Some(&result) => are_mutually_exclusive || !result,
        }
    }

    fn add(&mut self, a: &'a str, b: &'a str, are_mutually_exclusive: bool) {
        self.data.insert(Self::key(a, b), are_mutually_exclusive);
    }
}

struct ConflictFinder<'r, 'a> {
    context: &'r ValidationContext<'a>,
    schema: &'a Schema,
    cached_fields_and_fragment_names: &'r mut HashMap<usize, Rc<FieldsAndFragmentNames<'a>>>,
    compared_fragment_pairs: &'r mut PairSet<'a>,
}

impl<'a> ConflictFinder<'_, 'a> {
    /// Conflicts among the fields of one selection set, including fields
    /// spread in through fragments.
    fn find_conflicts_within_selection_set(
        &mut self,
        parent_type: Option<&'a NamedType>,
        selection_set: &'a ast::SelectionSet,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = vec![];
        let field_map = self.get_fields_and_fragment_names(parent_type, selection_set);
        self.collect_conflicts_within(&mut conflicts, &field_map.fields);

        let fragment_names = &field_map.fragment_names;
        for (i, &fragment_name) in fragment_names.iter().enumerate() {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                false,
                &field_map,
                fragment_name,
            );
            for &other_fragment_name in &fragment_names[i + 1..] {
                self.collect_conflicts_between_fragments(
                    &mut conflicts,
                    false,
                    fragment_name,
                    other_fragment_name,
                );
            }
        }
        conflicts
    }

    fn collect_conflicts_between_fields_and_fragment(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        are_mutually_exclusive: bool,
        field_map: &Rc<FieldsAndFragmentNames<'a>>,
        fragment_name: &'a str,
    ) {
        let Some(fragment) = self.context.get_fragment(fragment_name) else {
            return;
        };
        let referenced = self.get_referenced_fields_and_fragment_names(fragment);
        if Rc::ptr_eq(field_map, &referenced) {
            return;
        }
        self.collect_conflicts_between(
            conflicts,
            are_mutually_exclusive,
            &field_map.fields,
            &referenced.fields,
        );

        for &referenced_fragment_name in &referenced.fragment_names {
            if self.compared_fragment_pairs.has(
                referenced_fragment_name,
                fragment_name,
                are_mutually_exclusive,
            ) {
                continue;
            }
            self.compared_fragment_pairs.add(
                referenced_fragment_name,
                fragment_name,
                are_mutually_exclusive,
            );
            self.collect_conflicts_between_fields_and_fragment(
                conflicts,
                are_mutually_exclusive,
                field_map,
                referenced_fragment_name,
            );
        }
    }

    fn collect_conflicts_between_fragments(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        are_mutually_exclusive: bool,
        fragment_name1: &'a str,
        fragment_name2: &'a str,
    ) {
        if fragment_name1 == fragment_name2 {
            return;
        }
        if self
            .compared_fragment_pairs
            .has(fragment_name1, fragment_name2, are_mutually_exclusive)
        {
            return;
        }
        self.compared_fragment_pairs
            .add(fragment_name1, fragment_name2, are_mutually_exclusive);

        let (Some(fragment1), Some(fragment2)) = (
            self.context.get_fragment(fragment_name1),
            self.context.get_fragment(fragment_name2),
        ) else {
            return;
        };
        let referenced1 = self.get_referenced_fields_and_fragment_names(fragment1);
        let referenced2 = self.get_referenced_fields_and_fragment_names(fragment2);
        self.collect_conflicts_between(
            conflicts,
            are_mutually_exclusive,
            &referenced1.fields,
            &referenced2.fields,
        );

        for &referenced_fragment_name2 in &referenced2.fragment_names {
            self.collect_conflicts_between_fragments(
                conflicts,
                are_mutually_exclusive,
                fragment_name1,
                referenced_fragment_name2,
            );
        }
        for &referenced_fragment_name1 in &referenced1.fragment_names {
            self.collect_conflicts_between_fragments(
                conflicts,
                are_mutually_exclusive,
                referenced_fragment_name1,
                fragment_name2,
            );
        }
    }

    /// Conflicts between the subselections of two overlapping fields.
    fn find_conflicts_between_sub_selection_sets(
        &mut self,
        are_mutually_exclusive: bool,
        parent_type1: Option<&'a NamedType>,
        selection_set1: &'a ast::SelectionSet,
        parent_type2: Option<&'a NamedType>,
        selection_set2: &'a ast::SelectionSet,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = vec![];
        let field_map1 = self.get_fields_and_fragment_names(parent_type1, selection_set1);
        let field_map2 = self.get_fields_and_fragment_names(parent_type2, selection_set2);
        self.collect_conflicts_between(
            &mut conflicts,
            are_mutually_exclusive,
            &field_map1.fields,
            &field_map2.fields,
        );

        for &fragment_name2 in &field_map2.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                are_mutually_exclusive,
                &field_map1,
                fragment_name2,
            );
        }
        for &fragment_name1 in &field_map1.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                are_mutually_exclusive,
                &field_map2,
                fragment_name1,
            );
        }
        for &fragment_name1 in &field_map1.fragment_names {
            for &fragment_name2 in &field_map2.fragment_names {
                self.collect_conflicts_between_fragments(
                    &mut conflicts,
                    are_mutually_exclusive,
                    fragment_name1,
                    fragment_name2,
                );
            }
        }
        conflicts
    }

    fn collect_conflicts_within(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        field_map: &NodeAndDefCollection<'a>,
    ) {
        for (response_name, fields) in field_map {
            for (i, field) in fields.iter().enumerate() {
                for other_field in &fields[i + 1..] {
                    if let Some(conflict) = self.find_conflict(false, response_name, field, other_field) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    /// Assumes each map has already been checked on its own.
    fn collect_conflicts_between(
        &mut self,
        conflicts: &mut Vec<Conflict<'a>>,
        parent_fields_are_mutually_exclusive: bool,
        field_map1: &NodeAndDefCollection<'a>,
        field_map2: &NodeAndDefCollection<'a>,
    ) {
        for (response_name, fields1) in field_map1 {
            let Some(fields2) = field_map2.get(response_name) else {
                continue;
            };
            for field1 in fields1 {
                for field2 in fields2 {
                    let conflict = self.find_conflict(
                        parent_fields_are_mutually_exclusive,
                        response_name,
                        field1,
                        field2,
                    );
                    if let Some(conflict) = conflict {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    fn find_conflict(
        &mut self,
        parent_fields_are_mutually_exclusive: bool,
        response_name: &str,
        field1: &NodeAndDef<'a>,
        field2: &NodeAndDef<'a>,
    ) -> Option<Conflict<'a>> {
        let (parent_type1, node1, def1) = *field1;
        let (parent_type2, node2, def2) = *field2;

        let are_mutually_exclusive = parent_fields_are_mutually_exclusive
            || match (parent_type1, parent_type2) {
                (Some(NamedType::Object(object1)), Some(NamedType::Object(object2))) => {
                    object1.name != object2.name
                },
                _ => false,
            };

        if !are_mutually_exclusive {
            let (name1, name2) = (&node1.name.value, &node2.name.value);
            if name1 != name2 {
                return Some(Conflict::new(
                    response_name,
                    format!("'{name1}' and '{name2}' are different fields"),
                    node1,
                    node2,
                ));
            }
            if stringify_arguments(node1) != stringify_arguments(node2) {
                return Some(Conflict::new(
                    response_name,
                    "they have differing arguments".to_string(),
                    node1,
                    node2,
                ));
            }
        }

        let type1 = def1.map(|def| &def.ty);
        let type2 = def2.map(|def| &def.ty);
        if let (Some(type1), Some(type2)) = (type1, type2) {
            if do_types_conflict(self.schema, type1, type2) {
                return Some(Conflict::new(
                    response_name,
                    format!("they return conflicting types '{type1}' and '{type2}'"),
                    node1,
                    node2,
                ));
            }
        }

        let (Some(selection_set1), Some(selection_set2)) = (&node1.selection_set, &node2.selection_set)
        else {
            return None;
        };
        let schema = self.schema;
        let conflicts = self.find_conflicts_between_sub_selection_sets(
            are_mutually_exclusive,
            type1.and_then(|ty| schema.named_type_of(ty)),
            selection_set1,
            type2.and_then(|ty| schema.named_type_of(ty)),
            selection_set2,
        );
        subfield_conflicts(conflicts, response_name, node1, node2)
    }

    fn get_fields_and_fragment_names(
        &mut self,
        parent_type: Option<&'a NamedType>,
        selection_set: &'a ast::SelectionSet,
    ) -> Rc<FieldsAndFragmentNames<'a>> {
        let key = selection_set as *const ast::SelectionSet as usize;
        if let Some(cached) = self.cached_fields_and_fragment_names.get(&key) {
            return Rc::clone(cached);
        }
        let mut fields = NodeAndDefCollection::new();
        let mut fragment_names = IndexSet::new();
        self.collect_fields_and_fragment_names(parent_type, selection_set, &mut fields, &mut fragment_names);
        let collected = Rc::new(FieldsAndFragmentNames {
            fields,
            fragment_names: fragment_names.into_iter().collect(),
        });
        self.cached_fields_and_fragment_names
            .insert(key, Rc::clone(&collected));
        collected
    }

    fn get_referenced_fields_and_fragment_names(
        &mut self,
        fragment: &'a ast::FragmentDefinition,
    ) -> Rc<FieldsAndFragmentNames<'a>> {
        let fragment_type = self.schema.get_type(&fragment.type_condition.name.value);
        self.get_fields_and_fragment_names(fragment_type, &fragment.selection_set)
    }

    fn collect_fields_and_fragment_names(
        &self,
        parent_type: Option<&'a NamedType>,
        selection_set: &'a ast::SelectionSet,
        fields: &mut NodeAndDefCollection<'a>,
        fragment_names: &mut IndexSet<&'a str>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    let field_def = parent_type
                        .and_then(NamedType::fields)
                        .and_then(|field_map| field_map.get(&field.name.value));
                    fields
                        .entry(field.response_key())
                        .or_default()
                        .push((parent_type, field, field_def));
                },
                ast::Selection::FragmentSpread(spread) => {
                    fragment_names.insert(spread.name.value.as_str());
                },
                ast::Selection::InlineFragment(inline) => {
                    let inline_fragment_type = match &inline.type_condition {
                        Some(condition) => self.schema.get_type(&condition.name.value),
                        None => parent_type,
                    };
                    self.collect_fields_and_fragment_names(
                        inline_fragment_type,
                        &inline.selection_set,
                        fields,
                        fragment_names,
                    );
                },
            }
        }
    }
}

/// Folds the conflicts found between two fields' subselections into one
/// conflict for the fields themselves.
fn subfield_conflicts<'a>(
    conflicts: Vec<Conflict<'a>>,
    response_name: &str,
    node1: &'a ast::Field,
    node2: &'a ast::Field,
) -> Option<Conflict<'a>> {
    if conflicts.is_empty() {
        return None;
    }
    let mut reasons = vec![];
    let mut fields1 = vec![node1];
    let mut fields2 = vec![node2];
    for conflict in conflicts {
        reasons.push(conflict.reason);
        fields1.extend(conflict.fields1);
        fields2.extend(conflict.fields2);
    }
    Some(Conflict {
        reason: ConflictReason {
            response_name: response_name.to_string(),
            message: ConflictReasonMessage::Subfields(reasons),
        },
        fields1,
        fields2,
    })
}

/// Prints the arguments as one object literal with fields sorted, so that
/// argument order does not matter.
fn stringify_arguments(field: &ast::Field) -> String {
    let mut args_object = ast::Value::Object(ast::ObjectValue {
        fields: field
            .arguments
            .iter()
            .map(|arg| ast::ObjectField {
                name: arg.name.clone(),
                value: arg.value.clone(),
                loc: None,
            })
            .collect(),
        loc: None,
    });
    sort_value_node(&mut args_object);
    print_ast(&args_object)
}

fn sort_value_node(value: &mut ast::Value) {
    match value {
        ast::Value::Object(object) => {
            for field in &mut object.fields {
                sort_value_node(&mut field.value);
            }
            object
                .fields
                .sort_by(|a, b| natural_cmp(&a.name.value, &b.name.value));
        },
        ast::Value::List(list) => list.values.iter_mut().for_each(sort_value_node),
        _ => {},
    }
}

/// Two types conflict when no value could satisfy both. List and non-null
/// wrappers must match; composite types are compared through their
/// subfields instead.
fn do_types_conflict(schema: &Schema, type1: &TypeRef, type2: &TypeRef) -> bool {
    match (type1, type2) {
        (TypeRef::List(inner1), TypeRef::List(inner2)) => do_types_conflict(schema, inner1, inner2),
        (TypeRef::List(_), _) | (_, TypeRef::List(_)) => true,
        (TypeRef::NonNull(inner1), TypeRef::NonNull(inner2)) => {
            do_types_conflict(schema, inner1, inner2)
        },
        (TypeRef::NonNull(_), _) | (_, TypeRef::NonNull(_)) => true,
        (TypeRef::Named(name1), TypeRef::Named(name2)) => {
            let is_leaf = |name: &str| schema.get_type(name).is_some_and(NamedType::is_leaf_type);
            (is_leaf(name1) || is_leaf(name2)) && name1 != name2
        },
    }
}
