use std::fmt;

use crate::error::StoreError;

/// Bidirectional mapping between a bounded id space and a packed position space.
///
/// `dense[..len]` holds the live ids; `sparse[id]` holds the dense position of `id`, or
/// `None` when absent. Removal swaps the last live id into the vacated slot, so dense order
/// is neither insertion order nor stable across removals.
pub struct IndexSet {
    /// Maps id → dense position. Length is the id limit.
    sparse: Vec<Option<usize>>,
    /// Live ids, packed. Never longer than `capacity`.
    dense: Vec<u32>,
    capacity: usize,
}

impl IndexSet {
    /// Create a set whose ids and live entries are both bounded by `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self::with_id_limit(capacity, capacity)
    }

    /// Create a set accepting ids in `[0, id_limit)` with at most `capacity` live at once.
    pub fn with_id_limit(id_limit: usize, capacity: usize) -> Self {
        Self {
            sparse: vec![None; id_limit],
            dense: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add `id`, returning its dense position.
    pub fn add(&mut self, id: u32) -> Result<usize, StoreError> {
        self.check_range(id)?;
        if self.contains(id) {
            return Err(StoreError::AlreadyPresent(id));
        }
        if self.dense.len() >= self.capacity {
            return Err(StoreError::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        let position = self.dense.len();
        self.dense.push(id);
        self.sparse[id as usize] = Some(position);
        Ok(position)
    }

    /// Remove `id`, returning the position it vacated. Absent ids are a no-op.
    pub fn remove(&mut self, id: u32) -> Option<usize> {
        let position = self.position(id)?;
        let last = self.dense.len() - 1;
        if position != last {
            // Swap-remove: move the last live id into the removed slot.
            let moved = self.dense[last];
            self.dense[position] = moved;
            self.sparse[moved as usize] = Some(position);
        }
        self.dense.pop();
        self.sparse[id as usize] = None;
        Some(position)
    }

    /// Whether `id` is live. Out-of-range ids are never live.
    pub fn contains(&self, id: u32) -> bool {
        self.position(id).is_some()
    }

    /// Dense position of `id` if it is live.
    ///
    /// The sparse entry alone is not trusted: it must point inside the live prefix and the
    /// dense slot it names must round-trip back to `id`.
    pub fn position(&self, id: u32) -> Option<usize> {
        let position = (*self.sparse.get(id as usize)?)?;
        (position < self.dense.len() && self.dense[position] == id).then_some(position)
    }

    /// The live ids in dense order.
    pub fn ids(&self) -> &[u32] {
        &self.dense
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.dense.iter().copied()
    }

    /// Number of live ids.
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Maximum number of simultaneously live ids.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Exclusive upper bound on accepted ids.
    pub fn id_limit(&self) -> usize {
        self.sparse.len()
    }

    /// Remove every id.
    pub fn clear(&mut self) {
        for &id in &self.dense {
            self.sparse[id as usize] = None;
        }
        self.dense.clear();
    }

    pub(crate) fn check_range(&self, id: u32) -> Result<(), StoreError> {
        if (id as usize) < self.sparse.len() {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                id,
                limit: self.sparse.len(),
            })
        }
    }
}

impl fmt::Debug for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexSet")
            .field("dense", &self.dense)
            .field("sparse", &self.sparse)
            .field("capacity", &self.capacity)
            .finish()
    }
}
