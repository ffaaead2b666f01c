//! Type map registry with lock-free reads and serialized writes.
//!
//! # Mental model
//!
//! * The table of published type maps lives in an `ArcSwap`. Readers load the
//!   current table and look up keys without taking any lock.
//! * Writers (`create`, `create_empty`, `get_or_create`, `put`, `put_as`) hold
//!   one re-entrant write lock for the whole operation: the existence check,
//!   the construction and the publication happen in the same critical
//!   section, so concurrent first accesses to one key build it once.
//! * Publication copies the current table, inserts, and stores the copy. A
//!   published map is visible to the next load; a map that is never
//!   published is never observed by readers.
//!
//! # Invariants
//!
//! * At most one type map per [`TypeKey`] in the published table.
//! * `get_or_create` publishes a freshly built map only when it is fully
//!   matched. Partial maps go back to the caller and the key stays absent, so
//!   a later call builds again.
//! * `put` never overwrites; `create` and `create_empty` always do.
//!
//! # Re-entrancy
//!
//! The write lock runs external code (the implicit builder, type map
//! mutation). It is re-entrant for the owning thread, so that code may call
//! back into the same store; other threads block until the outer write
//! returns.
//!
//! While a map is being built its key is recorded as in progress. A nested
//! `get_or_create` for that key (a self-referential or cyclic type graph)
//! gets the unfinished map back instead of building and publishing a second
//! one, so a partial outer build leaves nothing published under its key.

use std::cell::RefCell;
use std::sync::Arc;

use arc_swap::ArcSwap;
use modelmap_types::{Type, might_contain_properties};
use parking_lot::ReentrantMutex;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::config::Configuration;
use crate::convert::{Converter, ConverterStore};
use crate::error::RegistryError;
use crate::implicit::{ImplicitMappingBuilder, NameMatchingBuilder};
use crate::key::TypeKey;
use crate::map::TypeMap;
use crate::property_map::PropertyMap;

mod view;

pub use view::{PinnedTypeMaps, TypeMapsView};

/// Published table of type maps.
pub(crate) type TypeMapTable = FxHashMap<TypeKey, Arc<TypeMap>>;

/// Maps whose implicit build is running on the lock-owning thread.
type InProgress = FxHashMap<TypeKey, Arc<TypeMap>>;

/// Registry of type maps keyed by (source, destination, name).
pub struct TypeMapStore {
	table: Arc<ArcSwap<TypeMapTable>>,
	write_lock: ReentrantMutex<RefCell<InProgress>>,
	config: Arc<Configuration>,
	converters: Arc<ConverterStore>,
	builder: Arc<dyn ImplicitMappingBuilder>,
}

impl TypeMapStore {
	pub fn new(config: Arc<Configuration>, converters: Arc<ConverterStore>, builder: Arc<dyn ImplicitMappingBuilder>) -> Self {
		Self {
			table: Arc::new(ArcSwap::from_pointee(TypeMapTable::default())),
			write_lock: ReentrantMutex::new(RefCell::new(InProgress::default())),
			config,
			converters,
			builder,
		}
	}

	/// Default configuration, built-in converters and [`NameMatchingBuilder`].
	pub fn with_defaults() -> Self {
		Self::with_configuration(Configuration::default())
	}

	/// Built-in converters and [`NameMatchingBuilder`] under `config`.
	pub fn with_configuration(config: Configuration) -> Self {
		Self::new(Arc::new(config), Arc::new(ConverterStore::with_defaults()), Arc::new(NameMatchingBuilder))
	}

	/// Store-wide configuration used by `get_or_create`.
	pub fn configuration(&self) -> &Arc<Configuration> {
		&self.config
	}

	pub fn converters(&self) -> &Arc<ConverterStore> {
		&self.converters
	}

	/// Builds a type map and publishes it, replacing any map at the same key.
	///
	/// When `config` enables implicit mapping and both types might contain
	/// properties, the implicit builder populates the map before publication.
	pub fn create(
		&self,
		sample: Option<&Value>,
		source: &Type,
		destination: &Type,
		name: Option<&str>,
		config: Arc<Configuration>,
	) -> Arc<TypeMap> {
		let _guard = self.write_lock.lock();
		let type_map = Arc::new(TypeMap::new(source, destination, name, config));
		if type_map.configuration().implicit_mapping && eligible(source, destination) {
			self.builder.build(sample, &type_map, self, &self.converters);
		}
		tracing::debug!(key = %type_map.key(), mappings = type_map.mappings().len(), "typemap.create");
		self.publish(type_map.key().clone(), Arc::clone(&type_map));
		type_map
	}

	/// Like [`Self::create`] but never runs the implicit builder.
	pub fn create_empty(&self, source: &Type, destination: &Type, name: Option<&str>, config: Arc<Configuration>) -> Arc<TypeMap> {
		let _guard = self.write_lock.lock();
		let type_map = Arc::new(TypeMap::new(source, destination, name, config));
		tracing::debug!(key = %type_map.key(), "typemap.create_empty");
		self.publish(type_map.key().clone(), Arc::clone(&type_map));
		type_map
	}

	/// Looks up a published type map without locking.
	///
	/// After an exact miss, an enum constant body falls back to its declaring
	/// enum. Then keys with primitive endpoints boxed are probed in order:
	/// source boxed, destination boxed, both boxed.
	pub fn get(&self, source: &Type, destination: &Type, name: Option<&str>) -> Option<Arc<TypeMap>> {
		let table = self.table.load();
		let key = TypeKey::new(source, destination, name);
		if let Some(found) = find(&table, &key) {
			return Some(found);
		}

		let found = key.boxed_probes().into_iter().find_map(|probe| table.get(&probe).cloned());
		if let Some(type_map) = &found {
			tracing::trace!(requested = %key, resolved = %type_map.key(), "typemap.get.boxed");
		}
		found
	}

	/// Returns the type map for a key, building it on first access.
	///
	/// 1. Looks up the exact key, then the declaring enum key when `source` is
	///    an enum constant body, then the map of an enclosing build of the
	///    same key on this thread.
	/// 2. On a miss builds a new map: applies `property_map`, then runs the
	///    implicit builder unless a converter was given. The new map is
	///    published under the exact key only when fully matched.
	/// 3. On a hit applies `property_map` to the existing map.
	/// 4. Sets `converter` on the resulting map.
	pub fn get_or_create(
		&self,
		sample: Option<&Value>,
		source: &Type,
		destination: &Type,
		name: Option<&str>,
		property_map: Option<&PropertyMap>,
		converter: Option<Arc<dyn Converter>>,
	) -> Arc<TypeMap> {
		let guard = self.write_lock.lock();
		let key = TypeKey::new(source, destination, name);
		let existing = find(&self.table.load(), &key).or_else(|| {
			let building = guard.borrow().get(&key).cloned();
			if building.is_some() {
				tracing::trace!(%key, "typemap.cycle");
			}
			building
		});

		let type_map = match existing {
			Some(existing) => {
				if let Some(property_map) = property_map {
					existing.add_mappings(property_map);
				}
				existing
			}
			None => {
				let type_map = Arc::new(TypeMap::new(source, destination, name, Arc::clone(&self.config)));
				if let Some(property_map) = property_map {
					type_map.add_mappings(property_map);
				}
				if converter.is_none() && self.config.implicit_mapping && eligible(source, destination) {
					let _building = BuildingGuard::enter(&guard, key.clone(), Arc::clone(&type_map));
					self.builder.build(sample, &type_map, self, &self.converters);
				}

				if type_map.is_fully_matched() {
					tracing::debug!(%key, "typemap.publish");
					self.publish(key, Arc::clone(&type_map));
				} else {
					tracing::debug!(
						%key,
						unmapped = type_map.unmapped_properties().len(),
						"typemap.unpublished"
					);
				}
				type_map
			}
		};

		if let Some(converter) = converter {
			type_map.set_converter(converter);
		}
		type_map
	}

	/// [`Self::get_or_create`] without explicit mappings or converter.
	pub fn get_or_create_implicit(&self, sample: Option<&Value>, source: &Type, destination: &Type, name: Option<&str>) -> Arc<TypeMap> {
		self.get_or_create(sample, source, destination, name, None, None)
	}

	/// Registers an explicitly built type map under its own key.
	pub fn put(&self, type_map: Arc<TypeMap>) -> Result<(), RegistryError> {
		let key = type_map.key().clone();
		self.insert_new(key, type_map)
	}

	/// Registers `type_map` under (`source`, `destination`, its own name).
	pub fn put_as(&self, source: &Type, destination: &Type, type_map: Arc<TypeMap>) -> Result<(), RegistryError> {
		let key = TypeKey::new(source, destination, type_map.name());
		self.insert_new(key, type_map)
	}

	/// Live read-only view of every published type map.
	pub fn type_maps(&self) -> TypeMapsView {
		TypeMapsView::new(Arc::clone(&self.table))
	}

	/// True while `get_or_create` is building the map for `key` on this thread.
	///
	/// Takes the write lock, so other threads wait for a running write.
	pub fn is_building(&self, key: &TypeKey) -> bool {
		self.write_lock.lock().borrow().contains_key(key)
	}

	/// Number of published type maps.
	pub fn len(&self) -> usize {
		self.table.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn insert_new(&self, key: TypeKey, type_map: Arc<TypeMap>) -> Result<(), RegistryError> {
		let _guard = self.write_lock.lock();
		if self.table.load().contains_key(&key) {
			tracing::warn!(%key, "typemap.put.duplicate");
			return Err(RegistryError::DuplicateKey { key });
		}
		tracing::debug!(%key, "typemap.put");
		self.publish(key, type_map);
		Ok(())
	}

	/// Caller must hold the write lock.
	fn publish(&self, key: TypeKey, type_map: Arc<TypeMap>) {
		let mut next = TypeMapTable::clone(&self.table.load());
		next.insert(key, type_map);
		tracing::trace!(len = next.len(), "typemap.table.store");
		self.table.store(Arc::new(next));
	}
}

/// Exact key, then the declaring enum key for enum constant bodies.
fn find(table: &TypeMapTable, key: &TypeKey) -> Option<Arc<TypeMap>> {
	if let Some(found) = table.get(key) {
		return Some(Arc::clone(found));
	}

	let declaring = key.declaring_enum_key()?;
	let found = table.get(&declaring).cloned();
	if found.is_some() {
		tracing::trace!(requested = %key, resolved = %declaring, "typemap.enum_constant");
	}
	found
}

/// Records a key as in progress until dropped, unwinding included.
struct BuildingGuard<'a> {
	building: &'a RefCell<InProgress>,
	key: TypeKey,
}

impl<'a> BuildingGuard<'a> {
	fn enter(building: &'a RefCell<InProgress>, key: TypeKey, type_map: Arc<TypeMap>) -> Self {
		building.borrow_mut().insert(key.clone(), type_map);
		Self { building, key }
	}
}

impl Drop for BuildingGuard<'_> {
	fn drop(&mut self) {
		self.building.borrow_mut().remove(&self.key);
	}
}

fn eligible(source: &Type, destination: &Type) -> bool {
	might_contain_properties(source) && might_contain_properties(destination)
}

impl Default for TypeMapStore {
	fn default() -> Self {
		Self::with_defaults()
	}
}

impl std::fmt::Debug for TypeMapStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeMapStore")
			.field("len", &self.len())
			.field("config", &self.config)
			.field("converters", &self.converters)
			.finish_non_exhaustive()
	}
}
