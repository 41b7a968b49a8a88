use crate::types::NamedType;
use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::print_ast;
use graphql_engine_parser::GraphQLError;
use graphql_engine_parser::VisitorAction;
use std::collections::HashSet;

/// Every literal value is valid for the input type of its position.
///
/// Leaf values are checked by the scalar or enum type that would parse
/// them; variables are left to `variables_in_allowed_position`.
pub fn values_of_correct_type<'a>(_context: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
    Box::new(ValuesOfCorrectType)
}

struct ValuesOfCorrectType;

impl<'a> ValidationRule<'a> for ValuesOfCorrectType {
    fn enter(&mut self, context: &mut ValidationContext<'a>, node: AstNode<'a>) -> VisitorAction {
        match node {
            AstNode::ListValue(_) => {
                let parent_is_list = context
                    .get_parent_input_type()
                    .is_some_and(|ty| ty.nullable().is_list());
                if !parent_is_list {
                    is_valid_value_node(context, node);
                    return VisitorAction::Skip;
                }
            },
            AstNode::ObjectValue(object) => {
                let input_object = context
                    .schema()
                    .zip(context.get_input_type())
                    .and_then(|(schema, ty)| schema.named_type_of(ty))
                    .and_then(NamedType::as_input_object);
                let Some(input_object) = input_object else {
                    is_valid_value_node(context, node);
                    return VisitorAction::Skip;
                };
                let provided = object
                    .fields
                    .iter()
                    .map(|field| field.name.value.as_str())
                    .collect::<HashSet<_>>();
                for (field_name, field_def) in input_object.fields() {
                    if !provided.contains(field_name.as_str()) && field_def.is_required() {
                        context.report_error(
                            GraphQLError::new(format!(
                                "Field '{}.{field_name}' of required type '{}' was not provided.",
                                input_object.name, field_def.ty,
                            ))
                            .with_node(object.loc.as_ref()),
                        );
                    }
                }
            },
            AstNode::ObjectField(field) => {
                if context.get_input_type().is_some() {
                    return VisitorAction::Continue;
                }
                let parent_object = context
                    .schema()
                    .zip(context.get_parent_input_type())
                    .and_then(|(schema, ty)| schema.named_type_of(ty))
                    .and_then(NamedType::as_input_object);
                if let Some(parent_object) = parent_object {
                    let field_name = &field.name.value;
                    let suggestions =
                        suggestion_list(field_name, parent_object.fields().keys().map(String::as_str));
                    context.report_error(
                        GraphQLError::new(format!(
                            "Field '{field_name}' is not defined by type '{}'.{}",
                            parent_object.name,
                            did_you_mean(&suggestions, None),
                        ))
                        .with_node(field.loc.as_ref()),
                    );
                }
            },
            AstNode::NullValue(null) => {
                if let Some(ty) = context.get_input_type().filter(|ty| ty.is_non_null()) {
                    let message = format!("Expected value of type '{ty}', found null.");
                    context.report_error(GraphQLError::new(message).with_node(null.loc.as_ref()));
                }
            },
            AstNode::EnumValue(_)
            | AstNode::IntValue(_)
            | AstNode::FloatValue(_)
            | AstNode::StringValue(_)
            | AstNode::BooleanValue(_) => is_valid_value_node(context, node),
            _ => {},
        }
        VisitorAction::Continue
    }
}

/// The literal `node` stands for, when it is a value node.
fn value_of(node: AstNode<'_>) -> Option<ast::Value> {
    let value = match node {
        AstNode::IntValue(v) => ast::Value::Int(v.clone()),
        AstNode::FloatValue(v) => ast::Value::Float(v.clone()),
        AstNode::StringValue(v) => ast::Value::String(v.clone()),
        AstNode::BooleanValue(v) => ast::Value::Boolean(v.clone()),
        AstNode::NullValue(v) => ast::Value::Null(v.clone()),
        AstNode::EnumValue(v) => ast::Value::Enum(v.clone()),
        AstNode::ListValue(v) => ast::Value::List(v.clone()),
        AstNode::ObjectValue(v) => ast::Value::Object(v.clone()),
        AstNode::Variable(v) => ast::Value::Variable(v.clone()),
        _ => return None,
    };
    Some(value)
}

/// Checks a value node against the leaf type expected at its position.
fn is_valid_value_node(context: &mut ValidationContext<'_>, node: AstNode<'_>) {
    let (Some(schema), Some(location_type)) = (context.schema(), context.get_input_type()) else {
        return;
    };
    let location_type = location_type.clone();
    let Some(named) = schema.named_type_of(&location_type) else {
        return;
    };
    let Some(value) = value_of(node) else {
        return;
    };
    let type_mismatch = || {
        GraphQLError::new(format!(
            "Expected value of type '{location_type}', found {}.",
            print_ast(node),
        ))
        .with_node(node.loc())
    };

    let parsed = match named {
        NamedType::Scalar(scalar) => scalar.parse_literal(&value, None),
        NamedType::Enum(enum_type) => enum_type.parse_literal(&value),
        _ => {
            context.report_error(type_mismatch());
            return;
        },
    };
    if let Err(error) = parsed {
        let error = if error.nodes().is_empty() {
            error.with_node(node.loc())
        } else {
            error
        };
        context.report_error(error);
    }
}
