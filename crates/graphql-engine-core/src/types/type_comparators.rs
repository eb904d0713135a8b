use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// Whether two type references are identical, wrapper for wrapper.
pub fn is_equal_type(type_a: &TypeAnnotation, type_b: &TypeAnnotation) -> bool {
    type_a == type_b
}

/// Whether a value of `maybe_subtype` can always be used where
/// `super_type` is expected: non-null may narrow a nullable type, and an
/// object type may stand in for an interface or union it belongs to.
pub fn is_type_sub_type_of(
    schema: &Schema,
    maybe_subtype: &TypeAnnotation,
    super_type: &TypeAnnotation,
) -> bool {
    if is_equal_type(maybe_subtype, super_type) {
        return true;
    }

    if super_type.is_non_null() {
        return maybe_subtype.is_non_null()
            && is_type_sub_type_of(
                schema,
                &maybe_subtype.nullable_type(),
                &super_type.nullable_type(),
            );
    }
    if maybe_subtype.is_non_null() {
        return is_type_sub_type_of(schema, &maybe_subtype.nullable_type(), super_type);
    }

    match (maybe_subtype, super_type) {
        (TypeAnnotation::List(sub), TypeAnnotation::List(sup)) => {
            is_type_sub_type_of(schema, sub.inner_type(), sup.inner_type())
        },
        (TypeAnnotation::Named(sub), TypeAnnotation::Named(sup)) => {
            let (Some(sub), Some(sup)) = (schema.type_named(sub.name()), schema.type_named(sup.name()))
            else {
                return false;
            };
            sup.is_abstract_type()
                && matches!(sub, GraphQLType::Object(_))
                && schema.is_possible_type(sup, sub.name())
        },
        _ => false,
    }
}

/// Whether some object type could be both `type_a` and `type_b`. Used to
/// decide if a fragment spread can ever apply in its parent's context.
pub fn do_types_overlap(schema: &Schema, type_a: &GraphQLType, type_b: &GraphQLType) -> bool {
    if type_a.name() == type_b.name() {
        return true;
    }

    match (type_a.is_abstract_type(), type_b.is_abstract_type()) {
        (true, true) => schema
            .possible_types(type_a)
            .iter()
            .any(|object| schema.is_possible_type(type_b, object.name())),
        (true, false) => schema.is_possible_type(type_a, type_b.name()),
        (false, true) => schema.is_possible_type(type_b, type_a.name()),
        (false, false) => false,
    }
}
