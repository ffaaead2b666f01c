use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::primitive::Primitive;

#[cfg(test)]
mod tests;

/// Name of the scalar string type used by the built-in converters.
pub const STRING_TYPE_NAME: &str = "string";

/// Structural category of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
	/// Scalar value type with a boxed counterpart.
	Primitive(Primitive),
	/// Reference wrapper of a primitive.
	Boxed(Primitive),
	/// Terminal value type without introspectable properties (strings, dates, ...).
	Scalar,
	/// Enumeration type.
	Enum,
	/// Synthetic subtype generated for an enum constant that carries its own body.
	///
	/// Its supertype is the declaring enum.
	EnumConstant,
	/// Type exposing named properties.
	Record,
}

/// Named, typed property of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
	name: Arc<str>,
	ty: Type,
}

impl Property {
	pub fn new(name: impl Into<Arc<str>>, ty: Type) -> Self {
		Self { name: name.into(), ty }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn ty(&self) -> &Type {
		&self.ty
	}
}

/// Descriptor payload behind a [`Type`] handle.
#[derive(Debug)]
pub struct TypeInfo {
	name: Arc<str>,
	kind: TypeKind,
	properties: Vec<Property>,
	supertype: Option<Type>,
}

/// Shared handle to a type descriptor.
///
/// Equality and hashing use the fully qualified name only.
#[derive(Clone)]
pub struct Type(Arc<TypeInfo>);

impl Type {
	fn from_info(info: TypeInfo) -> Self {
		Self(Arc::new(info))
	}

	fn leaf(name: impl Into<Arc<str>>, kind: TypeKind, supertype: Option<Type>) -> Self {
		Self::from_info(TypeInfo {
			name: name.into(),
			kind,
			properties: Vec::new(),
			supertype,
		})
	}

	/// The primitive type of `primitive`.
	pub fn primitive(primitive: Primitive) -> Self {
		Self::leaf(primitive.name(), TypeKind::Primitive(primitive), None)
	}

	/// The boxed counterpart of `primitive`.
	pub fn boxed(primitive: Primitive) -> Self {
		Self::leaf(primitive.boxed_name(), TypeKind::Boxed(primitive), None)
	}

	/// A terminal scalar type.
	pub fn scalar(name: impl Into<Arc<str>>) -> Self {
		Self::leaf(name, TypeKind::Scalar, None)
	}

	/// The scalar string type.
	pub fn string() -> Self {
		Self::scalar(STRING_TYPE_NAME)
	}

	/// An enumeration type.
	pub fn enumeration(name: impl Into<Arc<str>>) -> Self {
		Self::leaf(name, TypeKind::Enum, None)
	}

	/// The synthetic subtype of one constant of `declaring` that carries its own body.
	pub fn enum_constant(name: impl Into<Arc<str>>, declaring: &Type) -> Self {
		Self::leaf(name, TypeKind::EnumConstant, Some(declaring.clone()))
	}

	/// Starts describing a record type.
	pub fn record(name: impl Into<Arc<str>>) -> RecordBuilder {
		RecordBuilder {
			name: name.into(),
			properties: Vec::new(),
			supertype: None,
		}
	}

	pub fn name(&self) -> &str {
		&self.0.name
	}

	pub fn kind(&self) -> TypeKind {
		self.0.kind
	}

	pub fn info(&self) -> &TypeInfo {
		&self.0
	}

	pub fn supertype(&self) -> Option<&Type> {
		self.0.supertype.as_ref()
	}

	/// Properties declared directly on this type.
	pub fn declared_properties(&self) -> &[Property] {
		&self.0.properties
	}

	/// All properties, supertype chain first.
	///
	/// A property redeclared by a subtype replaces the inherited one in place.
	pub fn properties(&self) -> Vec<Property> {
		let mut out = match self.supertype() {
			Some(parent) => parent.properties(),
			None => Vec::new(),
		};
		for property in self.declared_properties() {
			match out.iter_mut().find(|p| p.name() == property.name()) {
				Some(slot) => *slot = property.clone(),
				None => out.push(property.clone()),
			}
		}
		out
	}

	/// Looks up a property by exact name, including inherited ones.
	pub fn property(&self, name: &str) -> Option<Property> {
		self.declared_properties()
			.iter()
			.find(|p| p.name() == name)
			.cloned()
			.or_else(|| self.supertype().and_then(|parent| parent.property(name)))
	}
}

impl PartialEq for Type {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || self.0.name == other.0.name
	}
}

impl Eq for Type {}

impl Hash for Type {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.name.hash(state);
	}
}

impl fmt::Debug for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Type").field(&self.name()).finish()
	}
}

impl fmt::Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Builder for [`TypeKind::Record`] descriptors.
#[derive(Debug)]
pub struct RecordBuilder {
	name: Arc<str>,
	properties: Vec<Property>,
	supertype: Option<Type>,
}

impl RecordBuilder {
	/// Declares a property. Redeclaring a name replaces the earlier declaration.
	pub fn property(mut self, name: impl Into<Arc<str>>, ty: &Type) -> Self {
		let property = Property::new(name, ty.clone());
		match self.properties.iter_mut().find(|p| p.name() == property.name()) {
			Some(slot) => *slot = property,
			None => self.properties.push(property),
		}
		self
	}

	/// Sets the supertype whose properties are inherited.
	pub fn extends(mut self, parent: &Type) -> Self {
		self.supertype = Some(parent.clone());
		self
	}

	pub fn build(self) -> Type {
		Type::from_info(TypeInfo {
			name: self.name,
			kind: TypeKind::Record,
			properties: self.properties,
			supertype: self.supertype,
		})
	}
}
