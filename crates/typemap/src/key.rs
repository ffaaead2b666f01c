//! Type map keys and their equivalence rules.
//!
//! A key is the exact triple (source, destination, name). Two lookups widen
//! that exact match:
//!
//! * plain reads also try the boxed forms of primitive endpoints, because a
//!   primitive and its boxed wrapper are the same mapping target under two
//!   identities;
//! * get-or-create also tries the declaring enum when the source is the
//!   synthetic subtype of an enum constant, so all constants of one enum share
//!   a single type map.

use std::fmt;
use std::sync::Arc;

use modelmap_types::{Type, boxed_equivalent, is_enum_constant_body, is_primitive};
use smallvec::SmallVec;

/// Derived keys probed after an exact miss, in priority order.
pub(crate) type BoxedProbes = SmallVec<[TypeKey; 3]>;

/// Identity of a type map: source type, destination type and optional name.
///
/// `None` is the default (unnamed) map and is distinct from every supplied
/// name, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey {
	source: Type,
	destination: Type,
	name: Option<Arc<str>>,
}

impl TypeKey {
	pub fn new(source: &Type, destination: &Type, name: Option<&str>) -> Self {
		Self {
			source: source.clone(),
			destination: destination.clone(),
			name: name.map(Arc::from),
		}
	}

	pub fn source(&self) -> &Type {
		&self.source
	}

	pub fn destination(&self) -> &Type {
		&self.destination
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn with_types(&self, source: Type, destination: Type) -> Self {
		Self {
			source,
			destination,
			name: self.name.clone(),
		}
	}

	/// Keys with primitive endpoints replaced by their boxed forms.
	///
	/// Order: source boxed, destination boxed, both boxed. Empty when neither
	/// endpoint is primitive.
	pub(crate) fn boxed_probes(&self) -> BoxedProbes {
		let source_primitive = is_primitive(&self.source);
		let destination_primitive = is_primitive(&self.destination);
		let mut probes = BoxedProbes::new();

		if source_primitive {
			probes.push(self.with_types(boxed_equivalent(&self.source), self.destination.clone()));
		}
		if destination_primitive {
			probes.push(self.with_types(self.source.clone(), boxed_equivalent(&self.destination)));
		}
		if source_primitive && destination_primitive {
			probes.push(self.with_types(boxed_equivalent(&self.source), boxed_equivalent(&self.destination)));
		}
		probes
	}

	/// Key with the declaring enum as source, when the source is an enum constant body.
	pub(crate) fn declaring_enum_key(&self) -> Option<Self> {
		if !is_enum_constant_body(&self.source) {
			return None;
		}
		let declaring = self.source.supertype()?.clone();
		Some(self.with_types(declaring, self.destination.clone()))
	}
}

impl fmt::Display for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} -> {}", self.source, self.destination)?;
		if let Some(name) = &self.name {
			write!(f, " [{name:?}]")?;
		}
		Ok(())
	}
}
