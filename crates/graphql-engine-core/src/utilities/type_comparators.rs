use crate::schema::Schema;
use crate::types::NamedType;
use crate::types::TypeRef;
use graphql_engine_parser::ast;

/// Whether two type references are identical.
pub fn is_equal_type(type_a: &TypeRef, type_b: &TypeRef) -> bool {
    type_a == type_b
}

/// Whether a value of `maybe_sub_type` is always a valid value of
/// `super_type`: the same type, a non-null version of it, or (for named
/// types) an object or interface that belongs to the abstract
/// `super_type`.
pub fn is_type_sub_type_of(schema: &Schema, maybe_sub_type: &TypeRef, super_type: &TypeRef) -> bool {
    if maybe_sub_type == super_type {
        return true;
    }
    match (maybe_sub_type, super_type) {
        (TypeRef::NonNull(sub), TypeRef::NonNull(sup)) => is_type_sub_type_of(schema, sub, sup),
        (_, TypeRef::NonNull(_)) => false,
        (TypeRef::NonNull(sub), _) => is_type_sub_type_of(schema, sub, super_type),
        (TypeRef::List(sub), TypeRef::List(sup)) => is_type_sub_type_of(schema, sub, sup),
        (_, TypeRef::List(_)) | (TypeRef::List(_), _) => false,
        (TypeRef::Named(sub), TypeRef::Named(sup)) => {
            let (Some(sub), Some(sup)) = (schema.get_type(sub), schema.get_type(sup)) else {
                return false;
            };
            sup.is_abstract_type()
                && matches!(sub, NamedType::Object(_) | NamedType::Interface(_))
                && schema.is_sub_type(sup, sub)
        },
    }
}

/// Whether some object type could satisfy both composite types, i.e.
/// whether a fragment on one can apply within a selection on the other.
pub fn do_types_overlap(schema: &Schema, type_a: &NamedType, type_b: &NamedType) -> bool {
    if type_a.name() == type_b.name() {
        return true;
    }
    if type_a.is_abstract_type() {
        if type_b.is_abstract_type() {
            return schema.possible_types(type_a).into_iter().any(|object| {
                schema.is_sub_type(type_b, &NamedType::Object(object.clone()))
            });
        }
        return schema.is_sub_type(type_a, type_b);
    }
    if type_b.is_abstract_type() {
        return schema.is_sub_type(type_b, type_a);
    }
    false
}

/// The schema type an AST type reference denotes, if its named type
/// exists in `schema`.
pub fn type_from_ast(schema: &Schema, type_node: &ast::Type) -> Option<TypeRef> {
    schema.get_type(&type_node.named_type().name.value)?;
    Some(TypeRef::from(type_node))
}
