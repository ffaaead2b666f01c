use crate::descriptor::{Type, TypeKind};
use crate::primitive::Primitive;

/// Returns true if `ty` is a primitive scalar type.
pub fn is_primitive(ty: &Type) -> bool {
	matches!(ty.kind(), TypeKind::Primitive(_))
}

/// Returns true if `ty` is the boxed wrapper of a primitive.
pub fn is_boxed(ty: &Type) -> bool {
	matches!(ty.kind(), TypeKind::Boxed(_))
}

/// Primitive kind behind a primitive or boxed type.
pub fn primitive_of(ty: &Type) -> Option<Primitive> {
	match ty.kind() {
		TypeKind::Primitive(p) | TypeKind::Boxed(p) => Some(p),
		_ => None,
	}
}

/// Boxed counterpart of a primitive type; any other type is returned unchanged.
pub fn boxed_equivalent(ty: &Type) -> Type {
	match ty.kind() {
		TypeKind::Primitive(p) => Type::boxed(p),
		_ => ty.clone(),
	}
}

/// Returns true if values of `ty` may expose properties worth mapping one by one.
///
/// Scalars, primitives, boxed primitives and enums are terminal.
pub fn might_contain_properties(ty: &Type) -> bool {
	matches!(ty.kind(), TypeKind::Record)
}

/// Returns true if `ty` is the synthetic subtype of an enum constant with a body.
pub fn is_enum_constant_body(ty: &Type) -> bool {
	ty.kind() == TypeKind::EnumConstant && ty.supertype().is_some_and(|parent| parent.kind() == TypeKind::Enum)
}
