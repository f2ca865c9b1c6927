use std::any::Any;

use crate::error::StoreError;
use crate::index_set::IndexSet;

/// Marker trait for types that can be stored as components.
pub trait Component: 'static + Send + Sync {}

/// Blanket implementation: any `'static + Send + Sync` type is a valid component.
impl<T: 'static + Send + Sync> Component for T {}

/// Type-erased view of a component store, used by the registry for operations that do not
/// need the concrete component type.
pub trait ErasedStore: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Drop the component for `id`. Returns `true` if one was present.
    fn remove(&mut self, id: u32) -> bool;
    fn contains(&self, id: u32) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
    /// Name of the stored component type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

/// Packed storage for a single component type.
///
/// `components[i]` belongs to `index.ids()[i]`; both are compacted in lockstep so live
/// components always occupy a contiguous prefix.
pub struct ComponentStore<T> {
    index: IndexSet,
    components: Vec<T>,
}

impl<T: Component> ComponentStore<T> {
    /// Create a store with ids and live entries bounded by `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self::with_id_limit(capacity, capacity)
    }

    pub fn with_id_limit(id_limit: usize, capacity: usize) -> Self {
        Self {
            index: IndexSet::with_id_limit(id_limit, capacity),
            components: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace the component for `id`.
    ///
    /// Replacing leaves the index untouched and returns the previous value.
    pub fn add_component(&mut self, id: u32, value: T) -> Result<Option<T>, StoreError> {
        if let Some(slot) = self.get_component_mut(id) {
            return Ok(Some(std::mem::replace(slot, value)));
        }
        let position = self.index.add(id)?;
        debug_assert_eq!(position, self.components.len());
        self.components.push(value);
        Ok(None)
    }

    /// Remove the component for `id`, returning it. Absent ids are a no-op.
    pub fn remove_component(&mut self, id: u32) -> Option<T> {
        let position = self.index.position(id)?;
        // Compact the component array first: swap_remove moves the last component into
        // `position`, the same slot the index set's own swap-remove will fill with its id.
        let value = self.components.swap_remove(position);
        self.index.remove(id);
        Some(value)
    }

    /// Get an immutable reference to the component for `id`.
    pub fn get_component(&self, id: u32) -> Option<&T> {
        self.index.position(id).map(|position| &self.components[position])
    }

    /// Get a mutable reference to the component for `id`.
    pub fn get_component_mut(&mut self, id: u32) -> Option<&mut T> {
        self.index
            .position(id)
            .map(move |position| &mut self.components[position])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains(id)
    }

    /// Live ids, parallel to [`Self::components`].
    pub fn ids(&self) -> &[u32] {
        self.index.ids()
    }

    /// Live components in dense order.
    pub fn components(&self) -> &[T] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }

    /// Iterate over all (id, &component) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.index.iter().zip(self.components.iter())
    }

    /// Iterate over all (id, &mut component) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> {
        self.index.iter().zip(self.components.iter_mut())
    }

    /// The index set backing this store.
    pub fn index(&self) -> &IndexSet {
        &self.index
    }

    /// Number of components stored.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.components.clear();
    }
}

impl<T: Component> ErasedStore for ComponentStore<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn remove(&mut self, id: u32) -> bool {
        self.remove_component(id).is_some()
    }

    fn contains(&self, id: u32) -> bool {
        self.index.contains(id)
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    fn clear(&mut self) {
        ComponentStore::clear(self);
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}
