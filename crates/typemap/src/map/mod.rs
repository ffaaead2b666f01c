//! Type map descriptors.
//!
//! A [`TypeMap`] records how each destination property of one (source,
//! destination, name) triple is filled. The registry only relies on its
//! accessors, [`TypeMap::add_mappings`], [`TypeMap::set_converter`] and
//! [`TypeMap::is_fully_matched`].
//!
//! Type maps are shared as `Arc<TypeMap>` and may be mutated after they are
//! published. Mapping and converter state sit behind their own locks, so a
//! reader always sees a whole mapping list, either before or after a given
//! mutation.

use std::fmt;
use std::sync::Arc;

use modelmap_types::{Property, Type};
use parking_lot::RwLock;

use crate::config::Configuration;
use crate::convert::Converter;
use crate::key::TypeKey;
use crate::property_map::PropertyMap;


/// Where a destination property takes its value from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingSource {
	/// Copied (or converted) from the named source property.
	Property(Arc<str>),
	/// Built from the named source property through another type map.
	Nested { property: Arc<str>, type_map: TypeKey },
	/// Deliberately left untouched.
	Skip,
}

/// Resolution of one destination property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMapping {
	destination: Arc<str>,
	source: MappingSource,
}

impl PropertyMapping {
	pub fn new(destination: impl Into<Arc<str>>, source: MappingSource) -> Self {
		Self {
			destination: destination.into(),
			source,
		}
	}

	pub fn destination(&self) -> &str {
		&self.destination
	}

	pub fn source(&self) -> &MappingSource {
		&self.source
	}
}

/// Mapping descriptor for one type key.
pub struct TypeMap {
	key: TypeKey,
	config: Arc<Configuration>,
	mappings: RwLock<Vec<PropertyMapping>>,
	converter: RwLock<Option<Arc<dyn Converter>>>,
}

impl TypeMap {
	pub fn new(source: &Type, destination: &Type, name: Option<&str>, config: Arc<Configuration>) -> Self {
		Self {
			key: TypeKey::new(source, destination, name),
			config,
			mappings: RwLock::new(Vec::new()),
			converter: RwLock::new(None),
		}
	}

	pub fn key(&self) -> &TypeKey {
		&self.key
	}

	pub fn source_type(&self) -> &Type {
		self.key.source()
	}

	pub fn destination_type(&self) -> &Type {
		self.key.destination()
	}

	pub fn name(&self) -> Option<&str> {
		self.key.name()
	}

	/// Configuration the map was built with.
	pub fn configuration(&self) -> &Configuration {
		&self.config
	}

	/// Applies every entry of `property_map`.
	pub fn add_mappings(&self, property_map: &PropertyMap) {
		let mut mappings = self.mappings.write();
		for entry in property_map.entries() {
			upsert(&mut mappings, entry.clone());
		}
	}

	/// Records one mapping, replacing any earlier mapping of the same destination.
	pub fn add_mapping(&self, mapping: PropertyMapping) {
		upsert(&mut self.mappings.write(), mapping);
	}

	/// Current mappings in insertion order.
	pub fn mappings(&self) -> Vec<PropertyMapping> {
		self.mappings.read().clone()
	}

	pub fn mapping_for(&self, destination: &str) -> Option<PropertyMapping> {
		self.mappings.read().iter().find(|m| m.destination() == destination).cloned()
	}

	pub fn set_converter(&self, converter: Arc<dyn Converter>) {
		*self.converter.write() = Some(converter);
	}

	pub fn converter(&self) -> Option<Arc<dyn Converter>> {
		self.converter.read().clone()
	}

	/// Destination properties that have no mapping yet.
	pub fn unmapped_properties(&self) -> Vec<Property> {
		let mappings = self.mappings.read();
		self.destination_type()
			.properties()
			.into_iter()
			.filter(|p| !mappings.iter().any(|m| m.destination() == p.name()))
			.collect()
	}

	/// True once every destination property is mapped or skipped.
	pub fn is_fully_matched(&self) -> bool {
		self.unmapped_properties().is_empty()
	}
}

fn upsert(mappings: &mut Vec<PropertyMapping>, mapping: PropertyMapping) {
	match mappings.iter_mut().find(|m| m.destination == mapping.destination) {
		Some(slot) => *slot = mapping,
		None => mappings.push(mapping),
	}
}

impl fmt::Debug for TypeMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeMap")
			.field("key", &self.key.to_string())
			.field("mappings", &self.mappings.read().len())
			.field("converter", &self.converter.read().as_ref().map(|c| c.name()))
			.finish()
	}
}
