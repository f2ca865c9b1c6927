//! Lock-guarded registry for callers that drive it from more than one thread.
//!
//! A single writer excludes all readers while it mutates, since every add/remove touches
//! both the index set and the component array non-atomically.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::component::Component;
use crate::config::RegistryConfig;
use crate::error::StoreError;
use crate::registry::Registry;

/// Cheaply cloneable handle to a registry behind a reader/writer lock.
#[derive(Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::new(Registry::with_config(config))
    }

    /// Shared access for queries. Blocks while a writer holds the lock.
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read()
    }

    /// Exclusive access for structural changes.
    pub fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.inner.write()
    }

    pub fn add_component<T: Component>(
        &self,
        id: u32,
        component: T,
    ) -> Result<Option<T>, StoreError> {
        self.inner.write().add_component(id, component)
    }

    pub fn remove_component<T: Component>(&self, id: u32) -> Option<T> {
        self.inner.write().remove_component(id)
    }

    /// Copy a component out so no guard outlives the call.
    pub fn get_cloned<T: Component + Clone>(&self, id: u32) -> Option<T> {
        self.inner.read().get_component::<T>(id).cloned()
    }

    pub fn has_component<T: Component>(&self, id: u32) -> bool {
        self.inner.read().has_component::<T>(id)
    }

    pub fn despawn(&self, id: u32) -> usize {
        self.inner.write().despawn(id)
    }
}
