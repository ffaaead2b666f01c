use std::sync::Arc;

use arc_swap::ArcSwap;

use super::TypeMapTable;
use crate::key::TypeKey;
use crate::map::TypeMap;

/// Live, read-only view of a store's published type maps.
///
/// Every call reads the table as currently published, so the view reflects
/// later registrations. It offers no way to mutate the store.
#[derive(Clone)]
pub struct TypeMapsView {
	table: Arc<ArcSwap<TypeMapTable>>,
}

impl TypeMapsView {
	pub(super) fn new(table: Arc<ArcSwap<TypeMapTable>>) -> Self {
		Self { table }
	}

	pub fn len(&self) -> usize {
		self.table.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get(&self, key: &TypeKey) -> Option<Arc<TypeMap>> {
		self.table.load().get(key).cloned()
	}

	pub fn contains_key(&self, key: &TypeKey) -> bool {
		self.table.load().contains_key(key)
	}

	/// Pins the current table for consistent iteration.
	pub fn pin(&self) -> PinnedTypeMaps {
		PinnedTypeMaps {
			table: self.table.load_full(),
		}
	}

	/// Collects the currently published type maps.
	pub fn to_vec(&self) -> Vec<Arc<TypeMap>> {
		self.table.load().values().cloned().collect()
	}
}

impl std::fmt::Debug for TypeMapsView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeMapsView").field("len", &self.len()).finish()
	}
}

/// Table pinned at one publication; later writes do not show through.
pub struct PinnedTypeMaps {
	table: Arc<TypeMapTable>,
}

impl PinnedTypeMaps {
	pub fn iter(&self) -> impl Iterator<Item = &Arc<TypeMap>> + '_ {
		self.table.values()
	}

	pub fn keys(&self) -> impl Iterator<Item = &TypeKey> + '_ {
		self.table.keys()
	}

	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}
