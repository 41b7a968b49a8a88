use crate::validation::ValidationContext;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::VisitorAction;

/// One validation rule, driven by the shared traversal.
///
/// Hooks see every node the rule hasn't skipped, with the context's type
/// information already describing that node. Returning
/// [`VisitorAction::Skip`] from `enter` skips the node's subtree for this
/// rule only; [`VisitorAction::Break`] retires the rule for the rest of the
/// document.
pub trait ValidationRule<'a> {
    fn enter(&mut self, _context: &mut ValidationContext<'a>, _node: AstNode<'a>) -> VisitorAction {
        VisitorAction::Continue
    }

    fn leave(&mut self, _context: &mut ValidationContext<'a>, _node: AstNode<'a>) -> VisitorAction {
        VisitorAction::Continue
    }
}

/// Creates a fresh rule instance for one validation run.
pub type RuleFactory = for<'a, 'c> fn(&'c ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a>;
