//! End-to-end registry scenarios over an order domain.

use std::sync::Arc;

use modelmap_typemap::{Configuration, MappingSource, PropertyMap, RegistryError, TypeKey, TypeMap, TypeMapStore};
use modelmap_types::{Primitive, Type};
use serde_json::json;

fn order() -> Type {
	Type::record("shop.Order")
		.property("id", &Type::primitive(Primitive::I64))
		.property("placedAt", &Type::scalar("time.Instant"))
		.build()
}

fn order_dto() -> Type {
	Type::record("shop.OrderDto")
		.property("id", &Type::primitive(Primitive::I64))
		.property("placedAt", &Type::string())
		.property("channel", &Type::string())
		.build()
}

#[test]
fn explicit_registration_rejects_duplicates() {
	let store = TypeMapStore::with_defaults();
	let d1 = Arc::new(TypeMap::new(&order(), &order_dto(), None, Arc::new(Configuration::default())));
	let d2 = Arc::new(TypeMap::new(&order(), &order_dto(), None, Arc::new(Configuration::default())));

	store.put(Arc::clone(&d1)).expect("first registration");
	assert!(store.get(&order(), &order_dto(), None).is_some_and(|m| Arc::ptr_eq(&m, &d1)));

	match store.put(d2) {
		Err(RegistryError::DuplicateKey { key }) => assert_eq!(key, TypeKey::new(&order(), &order_dto(), None)),
		other => panic!("unexpected result: {other:?}"),
	}
	assert!(store.get(&order(), &order_dto(), None).is_some_and(|m| Arc::ptr_eq(&m, &d1)));
}

#[test]
fn partial_implicit_map_is_completed_by_explicit_mappings() {
	let store = TypeMapStore::with_defaults();
	let sample = json!({ "id": 7, "placedAt": "2026-01-01T00:00:00Z" });

	let partial = store.get_or_create_implicit(Some(&sample), &order(), &order_dto(), None);
	let unmapped: Vec<String> = partial.unmapped_properties().iter().map(|p| p.name().to_string()).collect();
	assert_eq!(unmapped, vec!["channel"]);
	assert!(store.get(&order(), &order_dto(), None).is_none());

	let explicit = PropertyMap::new().skip("channel");
	let complete = store.get_or_create(Some(&sample), &order(), &order_dto(), None, Some(&explicit), None);
	assert!(complete.is_fully_matched());
	assert!(!Arc::ptr_eq(&partial, &complete));
	assert_eq!(
		complete.mapping_for("placedAt").map(|m| m.source().clone()),
		Some(MappingSource::Property("placedAt".into()))
	);

	let again = store.get_or_create_implicit(None, &order(), &order_dto(), None);
	assert!(Arc::ptr_eq(&again, &complete));
}

#[test]
fn configuration_from_toml_drives_the_store() {
	let config = Configuration::from_toml_str("implicit_mapping = false").expect("valid configuration");
	let store = TypeMapStore::with_configuration(config);

	let map = store.get_or_create_implicit(None, &order(), &order_dto(), None);

	assert!(map.mappings().is_empty());
	assert!(store.is_empty());
}
