use std::sync::Arc;

use modelmap_types::Primitive;
use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

/// Accepts everything and always yields zero.
struct ZeroConverter;

impl Converter for ZeroConverter {
	fn convert(&self, _source: &Value) -> Result<Value, ConversionError> {
		Ok(json!(0))
	}
}

impl ConditionalConverter for ZeroConverter {
	fn supports(&self, _source: &Type, _destination: &Type) -> bool {
		true
	}
}

#[test]
fn defaults_cover_identity_boxing_and_strings() {
	let store = ConverterStore::with_defaults();
	let int = Type::primitive(Primitive::I32);
	let boxed_int = Type::boxed(Primitive::I32);
	let string = Type::string();
	let order = Type::record("shop.Order").build();

	assert!(store.supports(&int, &int));
	assert!(store.supports(&int, &boxed_int));
	assert!(store.supports(&boxed_int, &int));
	assert!(store.supports(&int, &string));
	assert!(store.supports(&Type::enumeration("paint.Color"), &string));
	assert!(!store.supports(&int, &Type::boxed(Primitive::I64)));
	assert!(!store.supports(&order, &string));
	assert!(!store.supports(&string, &int));
}

#[test]
fn first_supported_respects_order() {
	let store = ConverterStore::with_defaults();
	let int = Type::primitive(Primitive::I32);

	let found = store.first_supported(&int, &int).map(|c| c.name());
	assert_eq!(found, Some(AssignableConverter.name()));

	store.add(Arc::new(ZeroConverter));
	assert_eq!(store.len(), 4);
	let found = store.first_supported(&int, &int).map(|c| c.name());
	assert!(found.is_some_and(|name| name.ends_with("ZeroConverter")));
}

#[test]
fn empty_store_supports_nothing() {
	let store = ConverterStore::empty();
	assert!(store.is_empty());
	assert!(store.first_supported(&Type::string(), &Type::string()).is_none());
}

#[test]
fn to_string_renders_terminal_values() {
	assert_eq!(ToStringConverter.convert(&json!(42)), Ok(json!("42")));
	assert_eq!(ToStringConverter.convert(&json!(true)), Ok(json!("true")));
	assert_eq!(ToStringConverter.convert(&Value::Null), Ok(Value::Null));
	assert_eq!(
		ToStringConverter.convert(&json!({"a": 1})),
		Err(ConversionError::Unsupported { found: "object" })
	);
}

#[test]
fn boxing_rejects_null() {
	assert_eq!(BoxingConverter.convert(&json!(7)), Ok(json!(7)));
	assert!(matches!(BoxingConverter.convert(&Value::Null), Err(ConversionError::Invalid(_))));
	assert_eq!(
		BoxingConverter.convert(&json!([1])),
		Err(ConversionError::Unsupported { found: "array" })
	);
}
