use std::sync::Arc;

use crate::map::{MappingSource, PropertyMapping};

/// Caller-authored set of explicit property mappings.
///
/// Applied to a type map with [`crate::TypeMap::add_mappings`]. Entries are
/// kept in declaration order; a later entry for the same destination wins when
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
	entries: Vec<PropertyMapping>,
}

impl PropertyMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Maps source property `source` onto destination property `destination`.
	pub fn map(mut self, source: impl Into<Arc<str>>, destination: impl Into<Arc<str>>) -> Self {
		self.entries.push(PropertyMapping::new(destination, MappingSource::Property(source.into())));
		self
	}

	/// Marks `destination` as intentionally left unmapped.
	pub fn skip(mut self, destination: impl Into<Arc<str>>) -> Self {
		self.entries.push(PropertyMapping::new(destination, MappingSource::Skip));
		self
	}

	pub fn entries(&self) -> &[PropertyMapping] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
