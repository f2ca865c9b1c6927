use std::any::TypeId;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::component::{Component, ComponentStore, ErasedStore};
use crate::config::RegistryConfig;
use crate::error::StoreError;

/// Owns one [`ComponentStore`] per component type and routes calls to it.
///
/// An entity is just an id; it "exists" while it has a component in at least one store.
pub struct Registry {
    stores: HashMap<TypeId, Box<dyn ErasedStore>>,
    config: RegistryConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            stores: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ---- Store lookup ----

    /// The store for `T`, created on first use.
    pub fn storage_mut<T: Component>(&mut self) -> &mut ComponentStore<T> {
        let config = self.config;
        let store = self.stores.entry(TypeId::of::<T>()).or_insert_with(|| {
            debug!(
                "Creating component store for {} (capacity {}, id limit {})",
                std::any::type_name::<T>(),
                config.capacity,
                config.id_limit()
            );
            Box::new(ComponentStore::<T>::with_id_limit(
                config.id_limit(),
                config.capacity,
            ))
        });
        // Entries are keyed by the TypeId of the store they hold.
        store
            .as_any_mut()
            .downcast_mut::<ComponentStore<T>>()
            .expect("component type mismatch")
    }

    /// The store for `T`, if any component of that type was ever added.
    pub fn storage<T: Component>(&self) -> Option<&ComponentStore<T>> {
        self.stores
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<ComponentStore<T>>())
    }

    fn existing_storage_mut<T: Component>(&mut self) -> Option<&mut ComponentStore<T>> {
        self.stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut::<ComponentStore<T>>())
    }

    /// Number of distinct component types seen so far.
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    // ---- Component management ----

    /// Insert a component for `id`, replacing and returning any existing one of the same type.
    pub fn add_component<T: Component>(
        &mut self,
        id: u32,
        component: T,
    ) -> Result<Option<T>, StoreError> {
        self.storage_mut::<T>().add_component(id, component)
    }

    /// Remove the `T` component of `id`. Returns `None` if there was none.
    pub fn remove_component<T: Component>(&mut self, id: u32) -> Option<T> {
        self.existing_storage_mut::<T>()?.remove_component(id)
    }

    /// Get an immutable reference to the `T` component of `id`.
    pub fn get_component<T: Component>(&self, id: u32) -> Option<&T> {
        self.storage::<T>()?.get_component(id)
    }

    /// Get a mutable reference to the `T` component of `id`.
    pub fn get_component_mut<T: Component>(&mut self, id: u32) -> Option<&mut T> {
        self.existing_storage_mut::<T>()?.get_component_mut(id)
    }

    /// Check whether `id` has a component of the given type.
    pub fn has_component<T: Component>(&self, id: u32) -> bool {
        self.storage::<T>().is_some_and(|s| s.contains(id))
    }

    /// Iterate over every `(id, &T)` pair in dense order.
    pub fn iter<T: Component>(&self) -> impl Iterator<Item = (u32, &T)> {
        self.storage::<T>().into_iter().flat_map(|s| s.iter())
    }

    // ---- Entity-level helpers ----

    /// Whether `id` has any component at all.
    pub fn has_any(&self, id: u32) -> bool {
        self.stores.values().any(|s| s.contains(id))
    }

    /// Remove every component of `id`. Returns how many were removed.
    pub fn despawn(&mut self, id: u32) -> usize {
        let mut removed = 0;
        for store in self.stores.values_mut() {
            if store.remove(id) {
                removed += 1;
            }
        }
        trace!("Despawned entity {} ({} components)", id, removed);
        removed
    }

    /// Empty every store. Stores themselves are kept.
    pub fn clear(&mut self) {
        for store in self.stores.values_mut() {
            store.clear();
        }
    }

    /// Per-type live counts, for diagnostics.
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let mut rows: Vec<_> = self
            .stores
            .values()
            .map(|s| (s.type_name(), s.len()))
            .collect();
        rows.sort_unstable();
        rows
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
