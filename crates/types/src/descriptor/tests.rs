use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::capability::{boxed_equivalent, is_boxed, is_enum_constant_body, is_primitive, might_contain_properties, primitive_of};

fn property_names(ty: &Type) -> Vec<String> {
	ty.properties().iter().map(|p| p.name().to_string()).collect()
}

#[test]
fn identity_is_the_qualified_name() {
	let a = Type::record("shop.Order").property("id", &Type::primitive(Primitive::I64)).build();
	let b = Type::record("shop.Order").build();
	let c = Type::record("shop.OrderDto").build();

	assert_eq!(a, b);
	assert_ne!(a, c);
	assert_eq!(Type::boxed(Primitive::I32), Type::boxed(Primitive::I32));
	assert_ne!(Type::primitive(Primitive::I32), Type::boxed(Primitive::I32));
}

#[test]
fn record_inherits_supertype_properties() {
	let string = Type::string();
	let base = Type::record("shop.Entity")
		.property("id", &Type::primitive(Primitive::I64))
		.property("label", &string)
		.build();
	let order = Type::record("shop.Order")
		.extends(&base)
		.property("total", &Type::primitive(Primitive::F64))
		.property("label", &Type::scalar("shop.Label"))
		.build();

	assert_eq!(property_names(&order), vec!["id", "label", "total"]);
	assert_eq!(order.property("label").map(|p| p.ty().name().to_string()), Some("shop.Label".to_string()));
	assert_eq!(order.property("id").map(|p| p.ty().clone()), Some(Type::primitive(Primitive::I64)));
	assert!(order.property("missing").is_none());
	assert_eq!(order.declared_properties().len(), 2);
}

#[test]
fn redeclared_property_replaces_earlier_declaration() {
	let ty = Type::record("shop.Line")
		.property("qty", &Type::primitive(Primitive::I32))
		.property("qty", &Type::primitive(Primitive::I64))
		.build();

	assert_eq!(ty.declared_properties().len(), 1);
	assert_eq!(ty.declared_properties()[0].ty(), &Type::primitive(Primitive::I64));
}

#[test]
fn enum_constant_body_needs_an_enum_parent() {
	let color = Type::enumeration("paint.Color");
	let red = Type::enum_constant("paint.Color$1", &color);
	let stray = Type::enum_constant("paint.Stray$1", &Type::string());

	assert!(is_enum_constant_body(&red));
	assert_eq!(red.supertype(), Some(&color));
	assert!(!is_enum_constant_body(&stray));
	assert!(!is_enum_constant_body(&color));
}

#[test]
fn only_records_might_contain_properties() {
	let color = Type::enumeration("paint.Color");
	let cases = [
		(Type::primitive(Primitive::Bool), false),
		(Type::boxed(Primitive::Bool), false),
		(Type::string(), false),
		(color.clone(), false),
		(Type::enum_constant("paint.Color$2", &color), false),
		(Type::record("shop.Empty").build(), true),
	];

	for (ty, expected) in cases {
		assert_eq!(might_contain_properties(&ty), expected, "{ty}");
	}
}

#[test]
fn boxed_equivalent_leaves_non_primitives_alone() {
	let string = Type::string();
	let boxed = Type::boxed(Primitive::F32);

	assert_eq!(boxed_equivalent(&string), string);
	assert_eq!(boxed_equivalent(&boxed), boxed);
	assert!(is_boxed(&boxed));
	assert!(!is_primitive(&boxed));
}

#[test]
fn primitive_names_round_trip() {
	for p in Primitive::ALL {
		assert_eq!(Primitive::from_name(p.name()), Some(p));
	}
	assert_eq!(Primitive::from_name("Boxed<i32>"), None);
	assert!(Primitive::I8.is_numeric());
	assert!(!Primitive::Char.is_numeric());
}

fn any_primitive() -> impl Strategy<Value = Primitive> {
	prop::sample::select(Primitive::ALL.to_vec())
}

proptest! {
	/// Boxing a primitive yields a boxed type of the same primitive kind.
	#[test]
	fn prop_boxing_preserves_kind(p in any_primitive()) {
		let primitive = Type::primitive(p);
		let boxed = boxed_equivalent(&primitive);

		prop_assert!(is_primitive(&primitive));
		prop_assert!(is_boxed(&boxed));
		prop_assert_eq!(primitive_of(&boxed), Some(p));
		prop_assert_eq!(boxed, Type::boxed(p));
	}
}
