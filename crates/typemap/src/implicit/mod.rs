//! Implicit mapping population.
//!
//! The registry invokes an [`ImplicitMappingBuilder`] while it holds its write
//! lock. The lock is re-entrant for the calling thread, so a builder may
//! resolve nested type maps through the same store.

use modelmap_types::{Property, Type, might_contain_properties};
use serde_json::Value;

use crate::convert::ConverterStore;
use crate::map::{MappingSource, PropertyMapping, TypeMap};
use crate::store::TypeMapStore;


/// Fills a type map with inferred property mappings.
pub trait ImplicitMappingBuilder: Send + Sync {
	/// Mutates `type_map` in place.
	///
	/// `sample` is an optional source value the mapping is first requested for.
	fn build(&self, sample: Option<&Value>, type_map: &TypeMap, store: &TypeMapStore, converters: &ConverterStore);
}

/// Maps destination properties onto same-named source properties.
///
/// A candidate pair is accepted when the property types are equal, when a
/// converter supports the pair, or when both are records and the store yields
/// a fully matched nested type map for them. A nested map still being built
/// further up the same call chain is accepted as a back reference. Anything
/// else stays unmapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatchingBuilder;

impl ImplicitMappingBuilder for NameMatchingBuilder {
	fn build(&self, sample: Option<&Value>, type_map: &TypeMap, store: &TypeMapStore, converters: &ConverterStore) {
		let config = type_map.configuration();
		let source = type_map.source_type();

		for destination in type_map.unmapped_properties() {
			let Some(candidate) = find_source_property(source, destination.name(), config.case_insensitive_names) else {
				continue;
			};
			let nested_sample = sample.and_then(|value| value.get(candidate.name()));
			if config.skip_null_sample_properties && nested_sample.is_some_and(Value::is_null) {
				tracing::trace!(property = destination.name(), "implicit.skip_null_sample");
				continue;
			}
			if let Some(mapping) = resolve(&candidate, &destination, nested_sample, store, converters) {
				type_map.add_mapping(mapping);
			}
		}

		tracing::trace!(
			key = %type_map.key(),
			unmapped = type_map.unmapped_properties().len(),
			"implicit.build"
		);
	}
}

fn find_source_property(source: &Type, name: &str, case_insensitive: bool) -> Option<Property> {
	if let Some(exact) = source.property(name) {
		return Some(exact);
	}
	if !case_insensitive {
		return None;
	}
	source.properties().into_iter().find(|p| p.name().eq_ignore_ascii_case(name))
}

fn resolve(
	source: &Property,
	destination: &Property,
	sample: Option<&Value>,
	store: &TypeMapStore,
	converters: &ConverterStore,
) -> Option<PropertyMapping> {
	let (from, to) = (source.ty(), destination.ty());

	if from == to || converters.supports(from, to) {
		return Some(PropertyMapping::new(destination.name(), MappingSource::Property(source.name().into())));
	}

	if might_contain_properties(from) && might_contain_properties(to) {
		let nested = store.get_or_create_implicit(sample, from, to, None);
		if nested.is_fully_matched() || store.is_building(nested.key()) {
			return Some(PropertyMapping::new(
				destination.name(),
				MappingSource::Nested {
					property: source.name().into(),
					type_map: nested.key().clone(),
				},
			));
		}
	}

	None
}
