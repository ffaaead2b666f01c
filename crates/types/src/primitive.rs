use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar value kinds that have a distinct boxed (reference) counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
	Bool,
	I8,
	I16,
	I32,
	I64,
	F32,
	F64,
	Char,
}

impl Primitive {
	/// Every primitive kind, in declaration order.
	pub const ALL: [Primitive; 8] = [
		Primitive::Bool,
		Primitive::I8,
		Primitive::I16,
		Primitive::I32,
		Primitive::I64,
		Primitive::F32,
		Primitive::F64,
		Primitive::Char,
	];

	/// Name of the primitive type itself.
	pub const fn name(self) -> &'static str {
		match self {
			Primitive::Bool => "bool",
			Primitive::I8 => "i8",
			Primitive::I16 => "i16",
			Primitive::I32 => "i32",
			Primitive::I64 => "i64",
			Primitive::F32 => "f32",
			Primitive::F64 => "f64",
			Primitive::Char => "char",
		}
	}

	/// Name of the boxed counterpart.
	pub const fn boxed_name(self) -> &'static str {
		match self {
			Primitive::Bool => "Boxed<bool>",
			Primitive::I8 => "Boxed<i8>",
			Primitive::I16 => "Boxed<i16>",
			Primitive::I32 => "Boxed<i32>",
			Primitive::I64 => "Boxed<i64>",
			Primitive::F32 => "Boxed<f32>",
			Primitive::F64 => "Boxed<f64>",
			Primitive::Char => "Boxed<char>",
		}
	}

	/// Returns true for the integer and floating point kinds.
	pub const fn is_numeric(self) -> bool {
		!matches!(self, Primitive::Bool | Primitive::Char)
	}

	/// Parses a primitive from its type name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|p| p.name() == name)
	}
}

impl fmt::Display for Primitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
