use crate::schema::Schema;
use crate::types::NamedType;
use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use crate::utilities::natural_cmp;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Every selected field is defined on the type it is selected on.
pub fn fields_on_correct_type<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(FieldsOnCorrectType)
}

struct FieldsOnCorrectType;

impl<'a> ValidationRule<'a> for FieldsOnCorrectType {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        let AstNode::Field(field) = node else {
            return VisitorAction::Continue;
        };
        let (Some(schema), Some(parent_type)) = (context.schema(), context.get_parent_type()) else {
            return VisitorAction::Continue;
        };
        if context.get_field_def().is_some() {
            return VisitorAction::Continue;
        }
        let field_name = field.name.value.as_str();
        let mut suggestion = did_you_mean(
            &suggested_type_names(schema, parent_type, field_name),
            Some("to use an inline fragment on"),
        );
        if suggestion.is_empty() {
            suggestion = did_you_mean(&suggested_field_names(parent_type, field_name), None);
        }
        context.report_error(
            GraphQLError::new(format!(
                "Cannot query field '{field_name}' on type '{}'.{suggestion}",
                parent_type.name(),
            ))
            .with_node(field.loc.as_ref()),
        );
        VisitorAction::Continue
    }
}

/// For an abstract type, the possible types and interfaces that do define
/// `field_name`: the most widely implemented interfaces first, then
/// supertypes before subtypes, then alphabetically.
fn suggested_type_names(schema: &Schema, ty: &NamedType, field_name: &str) -> Vec<String> {
    if !ty.is_abstract_type() {
        return vec![];
    }
    let mut suggested_types: Vec<&NamedType> = vec![];
    let mut usage_count: HashMap<&str, usize> = HashMap::new();
    for possible_type in schema.possible_types(ty) {
        if !possible_type.fields().contains_key(field_name) {
            continue;
        }
        if let Some(named) = schema.get_type(&possible_type.name) {
            suggested_types.push(named);
        }
        usage_count.insert(possible_type.name.as_str(), 1);
        for interface_name in possible_type.interfaces() {
            let Some(interface) = schema.get_type(interface_name) else {
                continue;
            };
            if !interface
                .fields()
                .is_some_and(|fields| fields.contains_key(field_name))
            {
                continue;
            }
            let count = usage_count.entry(interface_name.as_str()).or_insert(0);
            if *count == 0 {
                suggested_types.push(interface);
            }
            *count += 1;
        }
    }
    suggested_types.sort_by(|a, b| {
        let by_usage = usage_count[b.name()].cmp(&usage_count[a.name()]);
        if by_usage != Ordering::Equal {
            return by_usage;
        }
        if matches!(a, NamedType::Interface(_)) && schema.is_sub_type(a, b) {
            return Ordering::Less;
        }
        if matches!(b, NamedType::Interface(_)) && schema.is_sub_type(b, a) {
            return Ordering::Greater;
        }
        natural_cmp(a.name(), b.name())
    });
    suggested_types
        .into_iter()
        .map(|ty| ty.name().to_string())
        .collect()
}

fn suggested_field_names(ty: &NamedType, field_name: &str) -> Vec<String> {
    match ty.fields() {
        Some(fields) => suggestion_list(field_name, fields.keys().map(String::as_str)),
        None => vec![],
    }
}
