//! Registry of type maps for object-to-object mapping.
//!
//! A type map describes how values of a source type become values of a
//! destination type. [`TypeMapStore`] owns every type map of one mapping
//! engine, keyed by (source type, destination type, name), and builds missing
//! ones on first access.
//!
//! # Modules
//!
//! - [`key`] - type map keys and their equivalence rules
//! - [`map`] - the type map descriptor
//! - [`property_map`] - explicit property mappings
//! - [`store`] - the registry and its read-only view
//! - [`implicit`] - implicit mapping population
//! - [`convert`] - converters consulted while mapping implicitly
//! - [`config`] - mapping configuration
//! - [`error`] - registry, configuration and conversion errors

pub mod config;
pub mod convert;
pub mod error;
pub mod implicit;
pub mod key;
pub mod map;
pub mod property_map;
pub mod store;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use config::Configuration;
pub use convert::{ConditionalConverter, Converter, ConverterStore};
pub use error::{ConfigError, ConversionError, RegistryError};
pub use implicit::{ImplicitMappingBuilder, NameMatchingBuilder};
pub use key::TypeKey;
pub use map::{MappingSource, PropertyMapping, TypeMap};
pub use property_map::PropertyMap;
pub use store::{PinnedTypeMaps, TypeMapStore, TypeMapsView};
