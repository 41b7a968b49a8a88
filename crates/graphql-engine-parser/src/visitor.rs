//! Depth-first AST traversal.
//!
//! A [`Visitor`] sees every node twice, on [`enter`](Visitor::enter) and on
//! [`leave`](Visitor::leave), in document order. The [`VisitorAction`]
//! returned from each hook steers the walk.

use crate::ast::*;
use std::collections::HashSet;
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum VisitorAction {
    /// Keep going.
    #[default]
    Continue,
    /// From `enter`: don't descend into this node, and don't call `leave`
    /// for it.
    Skip,
    /// Stop the whole traversal.
    Break,
    /// Drop this node. Read-only traversals treat it like `Skip` on enter;
    /// [`edit_document`] removes the node from its parent list.
    Remove,
}

pub trait Visitor<'a> {
    fn enter(&mut self, _node: AstNode<'a>) -> VisitorAction {
        VisitorAction::Continue
    }

    fn leave(&mut self, _node: AstNode<'a>) -> VisitorAction {
        VisitorAction::Continue
    }
}

/// Walks `root` depth-first. Returns `false` if a hook returned
/// [`VisitorAction::Break`].
pub fn visit<'a, V>(root: impl Into<AstNode<'a>>, visitor: &mut V) -> bool
where
    V: Visitor<'a> + ?Sized,
{
    walk(root.into(), visitor).is_continue()
}

fn walk<'a, V>(node: AstNode<'a>, visitor: &mut V) -> ControlFlow<()>
where
    V: Visitor<'a> + ?Sized,
{
    match visitor.enter(node) {
        VisitorAction::Break => return ControlFlow::Break(()),
        VisitorAction::Skip | VisitorAction::Remove => return ControlFlow::Continue(()),
        VisitorAction::Continue => {},
    }
    for child in node.children() {
        walk(child, visitor)?;
    }
    match visitor.leave(node) {
        VisitorAction::Break => ControlFlow::Break(()),
        _ => ControlFlow::Continue(()),
    }
}

/// Returns a copy of `document` without the nodes for which `visitor`
/// answered [`VisitorAction::Remove`].
///
/// Removal applies to nodes that live in a list: definitions, variable
/// definitions, selections, arguments, directives, list items and object
/// fields. Removing any other node has no effect beyond skipping its
/// subtree.
pub fn edit_document<V>(document: &Document, visitor: &mut V) -> Document
where
    V: for<'a> Visitor<'a>,
{
    let mut collector = RemovalCollector {
        inner: visitor,
        removed: HashSet::new(),
    };
    visit(document, &mut collector);
    Pruner {
        removed: collector.removed,
    }
    .document(document)
}

struct RemovalCollector<'v, V> {
    inner: &'v mut V,
    removed: HashSet<(&'static str, usize)>,
}

impl<'a, V: for<'b> Visitor<'b>> Visitor<'a> for RemovalCollector<'_, V> {
    fn enter(&mut self, node: AstNode<'a>) -> VisitorAction {
        let action = self.inner.enter(node);
        if action == VisitorAction::Remove {
            self.removed.insert((node.kind(), node.addr()));
        }
        action
    }

    fn leave(&mut self, node: AstNode<'a>) -> VisitorAction {
        let action = self.inner.leave(node);
        if action == VisitorAction::Remove {
            self.removed.insert((node.kind(), node.addr()));
        }
        action
    }
}

struct Pruner {
    removed: HashSet<(&'static str, usize)>,
}

impl Pruner {
    fn keeps<'a>(&self, node: impl Into<AstNode<'a>>) -> bool {
        let node = node.into();
        !self.removed.contains(&(node.kind(), node.addr()))
    }

    fn document(&self, doc: &Document) -> Document {
        Document {
            definitions: doc
                .definitions
                .iter()
                .filter(|def| self.keeps(*def))
                .map(|def| match def {
                    Definition::Operation(op) => Definition::Operation(self.operation(op)),
                    Definition::Fragment(frag) => Definition::Fragment(self.fragment(frag)),
                    other => other.clone(),
                })
                .collect(),
            loc: doc.loc.clone(),
        }
    }

    fn operation(&self, op: &OperationDefinition) -> OperationDefinition {
        OperationDefinition {
            operation: op.operation,
            name: op.name.clone(),
            variable_definitions: self.variable_definitions(&op.variable_definitions),
            directives: self.directives(&op.directives),
            selection_set: self.selection_set(&op.selection_set),
            loc: op.loc.clone(),
        }
    }

    fn fragment(&self, frag: &FragmentDefinition) -> FragmentDefinition {
        FragmentDefinition {
            name: frag.name.clone(),
            variable_definitions: frag
                .variable_definitions
                .as_ref()
                .map(|defs| self.variable_definitions(defs)),
            type_condition: frag.type_condition.clone(),
            directives: self.directives(&frag.directives),
            selection_set: self.selection_set(&frag.selection_set),
            loc: frag.loc.clone(),
        }
    }

    fn variable_definitions(&self, defs: &[VariableDefinition]) -> Vec<VariableDefinition> {
        defs.iter()
            .filter(|def| self.keeps(AstNode::VariableDefinition(def)))
            .map(|def| VariableDefinition {
                default_value: def.default_value.as_ref().map(|v| self.value(v)),
                directives: self.directives(&def.directives),
                ..def.clone()
            })
            .collect()
    }

    fn selection_set(&self, set: &SelectionSet) -> SelectionSet {
        SelectionSet {
            selections: set
                .selections
                .iter()
                .filter(|sel| self.keeps(*sel))
                .map(|sel| match sel {
                    Selection::Field(field) => Selection::Field(Field {
                        alias: field.alias.clone(),
                        name: field.name.clone(),
                        arguments: self.arguments(&field.arguments),
                        directives: self.directives(&field.directives),
                        selection_set: field.selection_set.as_ref().map(|s| self.selection_set(s)),
                        loc: field.loc.clone(),
                    }),
                    Selection::FragmentSpread(spread) => Selection::FragmentSpread(FragmentSpread {
                        name: spread.name.clone(),
                        directives: self.directives(&spread.directives),
                        loc: spread.loc.clone(),
                    }),
                    Selection::InlineFragment(inline) => Selection::InlineFragment(InlineFragment {
                        type_condition: inline.type_condition.clone(),
                        directives: self.directives(&inline.directives),
                        selection_set: self.selection_set(&inline.selection_set),
                        loc: inline.loc.clone(),
                    }),
                })
                .collect(),
            loc: set.loc.clone(),
        }
    }

    fn directives(&self, directives: &[Directive]) -> Vec<Directive> {
        directives
            .iter()
            .filter(|d| self.keeps(AstNode::Directive(d)))
            .map(|d| Directive {
                name: d.name.clone(),
                arguments: self.arguments(&d.arguments),
                loc: d.loc.clone(),
            })
            .collect()
    }

    fn arguments(&self, args: &[Argument]) -> Vec<Argument> {
        args.iter()
            .filter(|a| self.keeps(AstNode::Argument(a)))
            .map(|a| Argument {
                name: a.name.clone(),
                value: self.value(&a.value),
                loc: a.loc.clone(),
            })
            .collect()
    }

    fn value(&self, value: &Value) -> Value {
        match value {
            Value::List(list) => Value::List(ListValue {
                values: list
                    .values
                    .iter()
                    .filter(|v| self.keeps(*v))
                    .map(|v| self.value(v))
                    .collect(),
                loc: list.loc.clone(),
            }),
            Value::Object(obj) => Value::Object(ObjectValue {
                fields: obj
                    .fields
                    .iter()
                    .filter(|f| self.keeps(AstNode::ObjectField(f)))
                    .map(|f| ObjectField {
                        name: f.name.clone(),
                        value: self.value(&f.value),
                        loc: f.loc.clone(),
                    })
                    .collect(),
                loc: obj.loc.clone(),
            }),
            other => other.clone(),
        }
    }
}
