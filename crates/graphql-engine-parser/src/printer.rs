//! Converts AST nodes back into GraphQL source text with a canonical
//! layout: two-space indentation, one selection per line, and field
//! arguments broken onto separate lines only when they would not fit in
//! 80 columns.

use crate::ast::*;
use crate::block_string::print_block_string;

const MAX_LINE_LENGTH: usize = 80;

/// Prints any AST node.
///
/// ```rust
/// use graphql_engine_parser::parse_value;
/// use graphql_engine_parser::print_ast;
///
/// let value = parse_value("{a:1,b:[true,null]}").unwrap();
/// assert_eq!(print_ast(&value), "{a: 1, b: [true, null]}");
/// ```
pub fn print_ast<'a>(node: impl Into<AstNode<'a>>) -> String {
    print_node(node.into())
}

fn print_node(node: AstNode<'_>) -> String {
    match node {
        AstNode::Name(n) => n.value.clone(),
        AstNode::Variable(n) => format!("${}", n.name.value),
        AstNode::Document(n) => join(n.definitions.iter().map(|d| print_node(d.into())), "\n\n"),
        AstNode::OperationDefinition(n) => {
            let var_defs = wrap(
                "(",
                &join(n.variable_definitions.iter().map(|v| print_node(AstNode::VariableDefinition(v))), ", "),
                ")",
            );
            let name = n.name.as_ref().map(|name| name.value.clone()).unwrap_or_default();
            let prefix = join(
                [
                    n.operation.as_str().to_string(),
                    join([name, var_defs], ""),
                    print_directives(&n.directives),
                ],
                " ",
            );
            let selection_set = print_node(AstNode::SelectionSet(&n.selection_set));
            // The anonymous query shorthand.
            if prefix == "query" {
                selection_set
            } else {
                format!("{prefix} {selection_set}")
            }
        },
        AstNode::VariableDefinition(n) => format!(
            "${}: {}{}{}",
            n.variable.name.value,
            print_node((&n.ty).into()),
            wrap(" = ", &n.default_value.as_ref().map(|v| print_node(v.into())).unwrap_or_default(), ""),
            wrap(" ", &print_directives(&n.directives), ""),
        ),
        AstNode::SelectionSet(n) => block(n.selections.iter().map(|s| print_node(s.into()))),
        AstNode::Field(n) => {
            let alias = n.alias.as_ref().map(|a| a.value.as_str()).unwrap_or_default();
            let prefix = format!("{}{}", wrap("", alias, ": "), n.name.value);
            let args: Vec<String> = n
                .arguments
                .iter()
                .map(|a| print_node(AstNode::Argument(a)))
                .collect();
            let mut args_line = format!("{prefix}{}", wrap("(", &join(args.clone(), ", "), ")"));
            if args_line.chars().count() > MAX_LINE_LENGTH {
                args_line = format!("{prefix}{}", wrap("(\n", &indent(&join(args, "\n")), "\n)"));
            }
            join(
                [
                    args_line,
                    print_directives(&n.directives),
                    n.selection_set
                        .as_ref()
                        .map(|s| print_node(AstNode::SelectionSet(s)))
                        .unwrap_or_default(),
                ],
                " ",
            )
        },
        AstNode::Argument(n) => format!("{}: {}", n.name.value, print_node((&n.value).into())),
        AstNode::FragmentSpread(n) => format!(
            "...{}{}",
            n.name.value,
            wrap(" ", &print_directives(&n.directives), ""),
        ),
        AstNode::InlineFragment(n) => join(
            [
                "...".to_string(),
                wrap(
                    "on ",
                    n.type_condition.as_ref().map(|t| t.name.value.as_str()).unwrap_or_default(),
                    "",
                ),
                print_directives(&n.directives),
                print_node(AstNode::SelectionSet(&n.selection_set)),
            ],
            " ",
        ),
        AstNode::FragmentDefinition(n) => {
            let var_defs = n
                .variable_definitions
                .as_ref()
                .map(|defs| join(defs.iter().map(|v| print_node(AstNode::VariableDefinition(v))), ", "))
                .unwrap_or_default();
            format!(
                "fragment {}{} on {} {}{}",
                n.name.value,
                wrap("(", &var_defs, ")"),
                n.type_condition.name.value,
                wrap("", &print_directives(&n.directives), " "),
                print_node(AstNode::SelectionSet(&n.selection_set)),
            )
        },
        AstNode::IntValue(n) => n.value.clone(),
        AstNode::FloatValue(n) => n.value.clone(),
        AstNode::StringValue(n) => {
            if n.block {
                print_block_string(&n.value, false)
            } else {
                print_string(&n.value)
            }
        },
        AstNode::BooleanValue(n) => n.value.to_string(),
        AstNode::NullValue(_) => "null".to_string(),
        AstNode::EnumValue(n) => n.value.clone(),
        AstNode::ListValue(n) => format!(
            "[{}]",
            join(n.values.iter().map(|v| print_node(v.into())), ", "),
        ),
        AstNode::ObjectValue(n) => format!(
            "{{{}}}",
            join(n.fields.iter().map(|f| print_node(AstNode::ObjectField(f))), ", "),
        ),
        AstNode::ObjectField(n) => format!("{}: {}", n.name.value, print_node((&n.value).into())),
        AstNode::Directive(n) => format!(
            "@{}{}",
            n.name.value,
            wrap(
                "(",
                &join(n.arguments.iter().map(|a| print_node(AstNode::Argument(a))), ", "),
                ")",
            ),
        ),
        AstNode::NamedType(n) => n.name.value.clone(),
        AstNode::ListType(n) => format!("[{}]", print_node((&*n.ty).into())),
        AstNode::NonNullType(n) => format!("{}!", print_node((&*n.ty).into())),

        // Type-system definitions
        AstNode::SchemaDefinition(n) => with_description(
            n.description.as_ref(),
            join(
                [
                    "schema".to_string(),
                    print_directives(&n.directives),
                    block(n.operation_types.iter().map(|o| print_node(AstNode::OperationTypeDefinition(o)))),
                ],
                " ",
            ),
        ),
        AstNode::OperationTypeDefinition(n) => {
            format!("{}: {}", n.operation.as_str(), n.ty.name.value)
        },
        AstNode::ScalarTypeDefinition(n) => with_description(
            n.description.as_ref(),
            join(
                ["scalar".to_string(), n.name.value.clone(), print_directives(&n.directives)],
                " ",
            ),
        ),
        AstNode::ObjectTypeDefinition(n) => with_description(
            n.description.as_ref(),
            print_fielded("type", &n.name, &n.interfaces, &n.directives, &n.fields),
        ),
        AstNode::FieldDefinition(n) => with_description(
            n.description.as_ref(),
            format!(
                "{}{}: {}{}",
                n.name.value,
                print_argument_defs(&n.arguments),
                print_node((&n.ty).into()),
                wrap(" ", &print_directives(&n.directives), ""),
            ),
        ),
        AstNode::InputValueDefinition(n) => with_description(
            n.description.as_ref(),
            join(
                [
                    format!("{}: {}", n.name.value, print_node((&n.ty).into())),
                    wrap(
                        "= ",
                        &n.default_value.as_ref().map(|v| print_node(v.into())).unwrap_or_default(),
                        "",
                    ),
                    print_directives(&n.directives),
                ],
                " ",
            ),
        ),
        AstNode::InterfaceTypeDefinition(n) => with_description(
            n.description.as_ref(),
            print_fielded("interface", &n.name, &n.interfaces, &n.directives, &n.fields),
        ),
        AstNode::UnionTypeDefinition(n) => with_description(
            n.description.as_ref(),
            print_union("union", &n.name, &n.directives, &n.types),
        ),
        AstNode::EnumTypeDefinition(n) => with_description(
            n.description.as_ref(),
            print_enum("enum", &n.name, &n.directives, &n.values),
        ),
        AstNode::EnumValueDefinition(n) => with_description(
            n.description.as_ref(),
            join([n.name.value.clone(), print_directives(&n.directives)], " "),
        ),
        AstNode::InputObjectTypeDefinition(n) => with_description(
            n.description.as_ref(),
            print_input_object("input", &n.name, &n.directives, &n.fields),
        ),
        AstNode::DirectiveDefinition(n) => with_description(
            n.description.as_ref(),
            format!(
                "directive @{}{}{} on {}",
                n.name.value,
                print_argument_defs(&n.arguments),
                if n.repeatable { " repeatable" } else { "" },
                join(n.locations.iter().map(|l| l.value.clone()), " | "),
            ),
        ),

        // Type-system extensions
        AstNode::SchemaExtension(n) => join(
            [
                "extend schema".to_string(),
                print_directives(&n.directives),
                block(n.operation_types.iter().map(|o| print_node(AstNode::OperationTypeDefinition(o)))),
            ],
            " ",
        ),
        AstNode::ScalarTypeExtension(n) => join(
            ["extend scalar".to_string(), n.name.value.clone(), print_directives(&n.directives)],
            " ",
        ),
        AstNode::ObjectTypeExtension(n) => {
            print_fielded("extend type", &n.name, &n.interfaces, &n.directives, &n.fields)
        },
        AstNode::InterfaceTypeExtension(n) => {
            print_fielded("extend interface", &n.name, &n.interfaces, &n.directives, &n.fields)
        },
        AstNode::UnionTypeExtension(n) => {
            print_union("extend union", &n.name, &n.directives, &n.types)
        },
        AstNode::EnumTypeExtension(n) => {
            print_enum("extend enum", &n.name, &n.directives, &n.values)
        },
        AstNode::InputObjectTypeExtension(n) => {
            print_input_object("extend input", &n.name, &n.directives, &n.fields)
        },
    }
}

fn print_fielded(
    keyword: &str,
    name: &Name,
    interfaces: &[NamedType],
    directives: &[Directive],
    fields: &[FieldDefinition],
) -> String {
    join(
        [
            keyword.to_string(),
            name.value.clone(),
            wrap(
                "implements ",
                &join(interfaces.iter().map(|i| i.name.value.clone()), " & "),
                "",
            ),
            print_directives(directives),
            block(fields.iter().map(|f| print_node(AstNode::FieldDefinition(f)))),
        ],
        " ",
    )
}

fn print_union(keyword: &str, name: &Name, directives: &[Directive], types: &[NamedType]) -> String {
    join(
        [
            keyword.to_string(),
            name.value.clone(),
            print_directives(directives),
            wrap("= ", &join(types.iter().map(|t| t.name.value.clone()), " | "), ""),
        ],
        " ",
    )
}

fn print_enum(
    keyword: &str,
    name: &Name,
    directives: &[Directive],
    values: &[EnumValueDefinition],
) -> String {
    join(
        [
            keyword.to_string(),
            name.value.clone(),
            print_directives(directives),
            block(values.iter().map(|v| print_node(AstNode::EnumValueDefinition(v)))),
        ],
        " ",
    )
}

fn print_input_object(
    keyword: &str,
    name: &Name,
    directives: &[Directive],
    fields: &[InputValueDefinition],
) -> String {
    join(
        [
            keyword.to_string(),
            name.value.clone(),
            print_directives(directives),
            block(fields.iter().map(|f| print_node(AstNode::InputValueDefinition(f)))),
        ],
        " ",
    )
}

/// Argument definitions go on one line unless any of them spans several
/// lines (typically because of a block-string description).
fn print_argument_defs(args: &[InputValueDefinition]) -> String {
    let printed: Vec<String> = args
        .iter()
        .map(|a| print_node(AstNode::InputValueDefinition(a)))
        .collect();
    if printed.iter().any(|arg| arg.contains('\n')) {
        wrap("(\n", &indent(&join(printed, "\n")), "\n)")
    } else {
        wrap("(", &join(printed, ", "), ")")
    }
}

fn print_directives(directives: &[Directive]) -> String {
    join(directives.iter().map(|d| print_node(AstNode::Directive(d))), " ")
}

fn with_description(description: Option<&StringValue>, rest: String) -> String {
    match description {
        Some(desc) => format!("{}\n{}", print_node(AstNode::StringValue(desc)), rest),
        None => rest,
    }
}

/// Joins the non-empty strings with `separator`.
fn join(items: impl IntoIterator<Item = String>, separator: &str) -> String {
    items
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `start + s + end` if `s` is non-empty, otherwise the empty string.
fn wrap(start: &str, s: &str, end: &str) -> String {
    if s.is_empty() {
        String::new()
    } else {
        format!("{start}{s}{end}")
    }
}

fn block(items: impl IntoIterator<Item = String>) -> String {
    wrap("{\n", &indent(&join(items, "\n")), "\n}")
}

fn indent(s: &str) -> String {
    wrap("  ", &s.replace('\n', "\n  "), "")
}

/// Prints `value` as a double-quoted GraphQL string, escaping quotes,
/// backslashes and control characters.
pub fn print_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}' => {
                out.push_str(&format!("\\u{:04X}", ch as u32));
            },
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
