//! Value converters and the ordered store the implicit builder consults.
//!
//! A [`ConditionalConverter`] declares which (source, destination) type pairs
//! it accepts. The [`ConverterStore`] answers "is this pair directly
//! convertible", which lets the builder map a property without descending
//! into a nested type map.

use std::sync::Arc;

use modelmap_types::Type;
use parking_lot::RwLock;
use serde_json::Value;

use crate::error::ConversionError;

mod builtins;
#[cfg(test)]
mod tests;

pub use builtins::{AssignableConverter, BoxingConverter, ToStringConverter};

/// Converts a source value into a destination value.
pub trait Converter: Send + Sync {
	fn convert(&self, source: &Value) -> Result<Value, ConversionError>;

	/// Diagnostic name.
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// Converter restricted to the type pairs it declares support for.
pub trait ConditionalConverter: Converter {
	fn supports(&self, source: &Type, destination: &Type) -> bool;
}

/// Ordered converter list; the first converter supporting a pair wins.
pub struct ConverterStore {
	converters: RwLock<Vec<Arc<dyn ConditionalConverter>>>,
}

impl ConverterStore {
	/// Creates a store with no converters.
	pub fn empty() -> Self {
		Self {
			converters: RwLock::new(Vec::new()),
		}
	}

	/// Creates a store with the built-in converters.
	pub fn with_defaults() -> Self {
		let store = Self::empty();
		store.add(Arc::new(ToStringConverter));
		store.add(Arc::new(BoxingConverter));
		store.add(Arc::new(AssignableConverter));
		store
	}

	/// Adds a converter ahead of every existing one.
	pub fn add(&self, converter: Arc<dyn ConditionalConverter>) {
		self.converters.write().insert(0, converter);
	}

	pub fn first_supported(&self, source: &Type, destination: &Type) -> Option<Arc<dyn ConditionalConverter>> {
		self.converters
			.read()
			.iter()
			.find(|c| c.supports(source, destination))
			.cloned()
	}

	pub fn supports(&self, source: &Type, destination: &Type) -> bool {
		self.converters.read().iter().any(|c| c.supports(source, destination))
	}

	pub fn len(&self) -> usize {
		self.converters.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for ConverterStore {
	fn default() -> Self {
		Self::with_defaults()
	}
}

impl std::fmt::Debug for ConverterStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let names: Vec<&'static str> = self.converters.read().iter().map(|c| c.name()).collect();
		f.debug_struct("ConverterStore").field("converters", &names).finish()
	}
}
