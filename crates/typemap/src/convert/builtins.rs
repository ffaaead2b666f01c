use modelmap_types::{STRING_TYPE_NAME, Type, TypeKind, primitive_of};
use serde_json::Value;

use super::{ConditionalConverter, Converter};
use crate::error::ConversionError;

fn kind_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Copies values between identical types.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignableConverter;

impl Converter for AssignableConverter {
	fn convert(&self, source: &Value) -> Result<Value, ConversionError> {
		Ok(source.clone())
	}
}

impl ConditionalConverter for AssignableConverter {
	fn supports(&self, source: &Type, destination: &Type) -> bool {
		source == destination
	}
}

/// Moves values between a primitive and its boxed form.
///
/// Boxed values may be `null`; unboxing `null` fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxingConverter;

impl Converter for BoxingConverter {
	fn convert(&self, source: &Value) -> Result<Value, ConversionError> {
		match source {
			Value::Null => Err(ConversionError::Invalid("cannot unbox null".to_string())),
			Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(source.clone()),
			other => Err(ConversionError::Unsupported { found: kind_name(other) }),
		}
	}
}

impl ConditionalConverter for BoxingConverter {
	fn supports(&self, source: &Type, destination: &Type) -> bool {
		source != destination && primitive_of(source).is_some() && primitive_of(source) == primitive_of(destination)
	}
}

/// Renders terminal values into the scalar string type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToStringConverter;

impl Converter for ToStringConverter {
	fn convert(&self, source: &Value) -> Result<Value, ConversionError> {
		match source {
			Value::Null => Ok(Value::Null),
			Value::String(_) => Ok(source.clone()),
			Value::Bool(b) => Ok(Value::String(b.to_string())),
			Value::Number(n) => Ok(Value::String(n.to_string())),
			other => Err(ConversionError::Unsupported { found: kind_name(other) }),
		}
	}
}

impl ConditionalConverter for ToStringConverter {
	fn supports(&self, source: &Type, destination: &Type) -> bool {
		let terminal = matches!(
			source.kind(),
			TypeKind::Primitive(_) | TypeKind::Boxed(_) | TypeKind::Scalar | TypeKind::Enum | TypeKind::EnumConstant
		);
		terminal && destination.kind() == TypeKind::Scalar && destination.name() == STRING_TYPE_NAME
	}
}
