use crate::introspection::is_introspection_type;
use crate::schema::Schema;
use crate::types::is_specified_directive;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::FieldMap;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InputValueMap;
use crate::types::NamedType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::utilities::ast_from_value;
use graphql_engine_parser::ast;
use graphql_engine_parser::ast::AstNode;
use graphql_engine_parser::is_printable_as_block_string;
use graphql_engine_parser::print_ast;

/// Prints the schema as SDL, leaving out the specified scalars and
/// directives and the introspection types.
///
/// The `schema` block is only printed when it carries a description or
/// its root types are not named `Query`, `Mutation` and `Subscription`.
pub fn print_schema(schema: &Schema) -> String {
    print_filtered_schema(
        schema,
        |directive| !is_specified_directive(&directive.name),
        |ty| !ty.is_specified_scalar_type() && !is_introspection_type(ty.name()),
    )
}

/// Prints only the built-in parts of the schema: the specified directives
/// and the introspection types.
pub fn print_introspection_schema(schema: &Schema) -> String {
    print_filtered_schema(
        schema,
        |directive| is_specified_directive(&directive.name),
        |ty| is_introspection_type(ty.name()),
    )
}

fn print_filtered_schema(
    schema: &Schema,
    directive_filter: impl Fn(&Directive) -> bool,
    type_filter: impl Fn(&NamedType) -> bool,
) -> String {
    print_schema_definition(schema)
        .into_iter()
        .chain(
            schema
                .directives()
                .iter()
                .filter(|directive| directive_filter(directive))
                .map(|directive| print_directive(directive, schema)),
        )
        .chain(
            schema
                .type_map()
                .values()
                .filter(|ty| type_filter(ty))
                .map(|ty| print_type(ty, schema)),
        )
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn print_schema_definition(schema: &Schema) -> Option<String> {
    let roots = [
        ("query", schema.query_type().map(|ty| ty.name.as_str()), "Query"),
        ("mutation", schema.mutation_type().map(|ty| ty.name.as_str()), "Mutation"),
        (
            "subscription",
            schema.subscription_type().map(|ty| ty.name.as_str()),
            "Subscription",
        ),
    ];
    let has_common_names = roots
        .iter()
        .all(|(_, name, common)| name.is_none_or(|name| name == *common));
    if schema.description().is_none() && has_common_names {
        return None;
    }
    let operation_types = roots
        .iter()
        .filter_map(|(operation, name, _)| name.map(|name| format!("  {operation}: {name}")))
        .collect::<Vec<_>>();
    Some(format!(
        "{}schema {{\n{}\n}}",
        print_description(schema.description(), "", true),
        operation_types.join("\n"),
    ))
}

/// Prints one named type as SDL.
pub fn print_type(ty: &NamedType, schema: &Schema) -> String {
    match ty {
        NamedType::Scalar(scalar) => print_scalar(scalar),
        NamedType::Object(object) => format!(
            "{}type {}{}{}",
            print_description(object.description.as_deref(), "", true),
            object.name,
            print_implemented_interfaces(object.interfaces()),
            print_fields(object.fields(), schema),
        ),
        NamedType::Interface(interface) => format!(
            "{}interface {}{}{}",
            print_description(interface.description.as_deref(), "", true),
            interface.name,
            print_implemented_interfaces(interface.interfaces()),
            print_fields(interface.fields(), schema),
        ),
        NamedType::Union(union_type) => print_union(union_type),
        NamedType::Enum(enum_type) => print_enum(enum_type),
        NamedType::InputObject(input_object) => print_input_object(input_object, schema),
    }
}

fn print_scalar(scalar: &ScalarType) -> String {
    let specified_by = match &scalar.specified_by_url {
        Some(url) => format!(" @specifiedBy(url: {})", print_string_literal(url)),
        None => String::new(),
    };
    format!(
        "{}scalar {}{specified_by}",
        print_description(scalar.description.as_deref(), "", true),
        scalar.name,
    )
}

fn print_implemented_interfaces(interfaces: &[String]) -> String {
    if interfaces.is_empty() {
        return String::new();
    }
    format!(" implements {}", interfaces.join(" & "))
}

fn print_union(union_type: &UnionType) -> String {
    let members = union_type.types();
    let possible_types = if members.is_empty() {
        String::new()
    } else {
        format!(" = {}", members.join(" | "))
    };
    format!(
        "{}union {}{possible_types}",
        print_description(union_type.description.as_deref(), "", true),
        union_type.name,
    )
}

fn print_enum(enum_type: &EnumType) -> String {
    let values = enum_type
        .values
        .values()
        .enumerate()
        .map(|(i, value)| {
            format!(
                "{}  {}{}",
                print_description(value.description.as_deref(), "  ", i == 0),
                value.name,
                print_deprecated(value.deprecation_reason.as_deref()),
            )
        })
        .collect::<Vec<_>>();
    format!(
        "{}enum {}{}",
        print_description(enum_type.description.as_deref(), "", true),
        enum_type.name,
        print_block(&values),
    )
}

fn print_input_object(input_object: &InputObjectType, schema: &Schema) -> String {
    let fields = input_object
        .fields()
        .values()
        .enumerate()
        .map(|(i, field)| {
            format!(
                "{}  {}",
                print_description(field.description.as_deref(), "  ", i == 0),
                print_input_value(field, schema),
            )
        })
        .collect::<Vec<_>>();
    format!(
        "{}input {}{}",
        print_description(input_object.description.as_deref(), "", true),
        input_object.name,
        print_block(&fields),
    )
}

fn print_fields(fields: &FieldMap, schema: &Schema) -> String {
    let fields = fields
        .values()
        .enumerate()
        .map(|(i, field)| {
            format!(
                "{}  {}{}: {}{}",
                print_description(field.description.as_deref(), "  ", i == 0),
                field.name,
                print_args(&field.args, "  ", schema),
                field.ty,
                print_deprecated(field.deprecation_reason.as_deref()),
            )
        })
        .collect::<Vec<_>>();
    print_block(&fields)
}

fn print_block(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!(" {{\n{}\n}}", items.join("\n"))
}

fn print_args(args: &InputValueMap, indentation: &str, schema: &Schema) -> String {
    if args.is_empty() {
        return String::new();
    }
    let has_description = args
        .values()
        .any(|arg| arg.description.as_deref().is_some_and(|d| !d.is_empty()));
    if !has_description {
        let args = args
            .values()
            .map(|arg| print_input_value(arg, schema))
            .collect::<Vec<_>>();
        return format!("({})", args.join(", "));
    }
    let args = args
        .values()
        .enumerate()
        .map(|(i, arg)| {
            format!(
                "{}  {indentation}{}",
                print_description(arg.description.as_deref(), &format!("  {indentation}"), i == 0),
                print_input_value(arg, schema),
            )
        })
        .collect::<Vec<_>>();
    format!("(\n{}\n{indentation})", args.join("\n"))
}

fn print_input_value(arg: &InputValue, schema: &Schema) -> String {
    let mut printed = format!("{}: {}", arg.name, arg.ty);
    if let Some(default_ast) = arg
        .default_value
        .as_ref()
        .and_then(|default_value| ast_from_value(default_value, &arg.ty, schema))
    {
        printed.push_str(" = ");
        printed.push_str(&print_ast(&default_ast));
    }
    printed.push_str(&print_deprecated(arg.deprecation_reason.as_deref()));
    printed
}

/// Prints a directive definition as SDL.
pub fn print_directive(directive: &Directive, schema: &Schema) -> String {
    let locations = directive
        .locations
        .iter()
        .map(|location| location.as_str())
        .collect::<Vec<_>>();
    format!(
        "{}directive @{}{}{} on {}",
        print_description(directive.description.as_deref(), "", true),
        directive.name,
        print_args(&directive.args, "", schema),
        if directive.is_repeatable { " repeatable" } else { "" },
        locations.join(" | "),
    )
}

fn print_deprecated(reason: Option<&str>) -> String {
    match reason {
        None => String::new(),
        Some(DEFAULT_DEPRECATION_REASON) => " @deprecated".to_string(),
        Some(reason) => format!(" @deprecated(reason: {})", print_string_literal(reason)),
    }
}

fn print_string_literal(value: &str) -> String {
    print_ast(AstNode::StringValue(&ast::StringValue {
        value: value.to_string(),
        block: false,
        loc: None,
    }))
}

fn print_description(description: Option<&str>, indentation: &str, first_in_block: bool) -> String {
    let Some(description) = description else {
        return String::new();
    };
    let block_string = print_ast(AstNode::StringValue(&ast::StringValue {
        value: description.to_string(),
        block: is_printable_as_block_string(description),
        loc: None,
    }));
    let prefix = if !indentation.is_empty() && !first_in_block {
        format!("\n{indentation}")
    } else {
        indentation.to_string()
    };
    format!(
        "{prefix}{}\n",
        block_string.replace('\n', &format!("\n{indentation}")),
    )
}
