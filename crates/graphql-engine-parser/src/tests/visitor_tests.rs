//! Tests for [`crate::visit`] and [`crate::edit_document`].

use crate::ast::*;
use crate::edit_document;
use crate::parse;
use crate::print_ast;
use crate::visit;
use crate::Visitor;
use crate::VisitorAction;

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    skip_fields_named: Option<&'static str>,
    break_on_field: Option<&'static str>,
}

impl<'a> Visitor<'a> for Recorder {
    fn enter(&mut self, node: AstNode<'a>) -> VisitorAction {
        if let AstNode::Field(field) = node {
            self.events.push(format!("enter {}", field.name.value));
            if self.break_on_field == Some(field.name.value.as_str()) {
                return VisitorAction::Break;
            }
            if self.skip_fields_named == Some(field.name.value.as_str()) {
                return VisitorAction::Skip;
            }
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, node: AstNode<'a>) -> VisitorAction {
        if let AstNode::Field(field) = node {
            self.events.push(format!("leave {}", field.name.value));
        }
        VisitorAction::Continue
    }
}

#[test]
fn visits_in_document_order() {
    let doc = parse("{ a { b } c }").unwrap();
    let mut recorder = Recorder::default();
    assert!(visit(&doc, &mut recorder));
    assert_eq!(
        recorder.events,
        vec!["enter a", "enter b", "leave b", "leave a", "enter c", "leave c"],
    );
}

#[test]
fn skip_prunes_subtree_and_leave() {
    let doc = parse("{ a { b } c }").unwrap();
    let mut recorder = Recorder {
        skip_fields_named: Some("a"),
        ..Recorder::default()
    };
    visit(&doc, &mut recorder);
    assert_eq!(recorder.events, vec!["enter a", "enter c", "leave c"]);
}

#[test]
fn break_stops_traversal() {
    let doc = parse("{ a { b } c }").unwrap();
    let mut recorder = Recorder {
        break_on_field: Some("b"),
        ..Recorder::default()
    };
    assert!(!visit(&doc, &mut recorder));
    assert_eq!(recorder.events, vec!["enter a", "enter b"]);
}

#[test]
fn children_follow_source_order() {
    struct Kinds(Vec<&'static str>);
    impl<'a> Visitor<'a> for Kinds {
        fn enter(&mut self, node: AstNode<'a>) -> VisitorAction {
            self.0.push(node.kind());
            VisitorAction::Continue
        }
    }
    let doc = parse("query Q($v: Int) @d { f(x: $v) }").unwrap();
    let mut kinds = Kinds(vec![]);
    visit(&doc, &mut kinds);
    assert_eq!(
        kinds.0,
        vec![
            "document",
            "operation_definition",
            "name",
            "variable_definition",
            "variable",
            "name",
            "named_type",
            "name",
            "directive",
            "name",
            "selection_set",
            "field",
            "name",
            "argument",
            "name",
            "variable",
            "name",
        ],
    );
}

struct RemoveSecrets;

impl<'a> Visitor<'a> for RemoveSecrets {
    fn enter(&mut self, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::Field(field) if field.name.value.starts_with("secret") => VisitorAction::Remove,
            AstNode::Directive(directive) if directive.name.value == "internal" => {
                VisitorAction::Remove
            },
            AstNode::ObjectField(field) if field.name.value == "password" => VisitorAction::Remove,
            _ => VisitorAction::Continue,
        }
    }
}

#[test]
fn edit_document_removes_nodes() {
    let doc = parse(
        r#"{ user(input: {name: "a", password: "b"}) @internal { id secretToken } secretRoot }"#,
    )
    .unwrap();
    let edited = edit_document(&doc, &mut RemoveSecrets);
    assert_eq!(
        print_ast(&edited),
        "{\n  user(input: {name: \"a\"}) {\n    id\n  }\n}",
    );
    // The input document is untouched.
    assert!(print_ast(&doc).contains("secretRoot"));
}

#[test]
fn edit_document_removes_definitions() {
    struct DropFragments;
    impl<'a> Visitor<'a> for DropFragments {
        fn enter(&mut self, node: AstNode<'a>) -> VisitorAction {
            match node {
                AstNode::FragmentDefinition(_) => VisitorAction::Remove,
                _ => VisitorAction::Continue,
            }
        }
    }
    let doc = parse("{ a } fragment F on T { b }").unwrap();
    let edited = edit_document(&doc, &mut DropFragments);
    assert_eq!(edited.definitions.len(), 1);
    assert!(edited.definitions[0].is_executable());
}
