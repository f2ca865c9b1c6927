use std::fmt;

use crate::error::StoreError;

/// A generational entity handle. `index` is the raw id used with the [`crate::Registry`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl Entity {
    /// Create an entity from raw parts (mainly for testing).
    pub fn from_raw(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The raw id of this entity.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The generation of this entity (incremented on reuse).
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Hands out ids in `[0, capacity)`, recycling freed slots with generational tracking.
///
/// Raw ids alone cannot tell a recycled id from its previous occupant; the generation
/// carried by [`Entity`] can.
pub struct EntityAllocator {
    generations: Vec<u32>,
    alive: Vec<bool>,
    free_list: Vec<u32>,
    capacity: usize,
    len: usize,
}

impl EntityAllocator {
    pub fn new(capacity: usize) -> Self {
        Self {
            generations: Vec::with_capacity(capacity),
            alive: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            capacity,
            len: 0,
        }
    }

    /// Allocate a new entity, reusing a freed slot if available.
    pub fn allocate(&mut self) -> Result<Entity, StoreError> {
        if let Some(index) = self.free_list.pop() {
            self.alive[index as usize] = true;
            self.len += 1;
            return Ok(Entity {
                index,
                generation: self.generations[index as usize],
            });
        }
        if self.generations.len() >= self.capacity {
            return Err(StoreError::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        let index = self.generations.len() as u32;
        self.generations.push(0);
        self.alive.push(true);
        self.len += 1;
        Ok(Entity {
            index,
            generation: 0,
        })
    }

    /// Deallocate an entity. Returns `true` if it was alive.
    pub fn deallocate(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        let idx = entity.index as usize;
        self.alive[idx] = false;
        self.generations[idx] = self.generations[idx].wrapping_add(1);
        self.free_list.push(entity.index);
        self.len -= 1;
        true
    }

    /// Check if an entity is currently alive.
    pub fn is_alive(&self, entity: Entity) -> bool {
        let idx = entity.index as usize;
        idx < self.alive.len() && self.alive[idx] && self.generations[idx] == entity.generation
    }

    /// The live handle for a raw id, if that slot is currently allocated.
    pub fn entity(&self, index: u32) -> Option<Entity> {
        let idx = index as usize;
        (idx < self.alive.len() && self.alive[idx]).then(|| Entity {
            index,
            generation: self.generations[idx],
        })
    }

    /// Number of currently alive entities.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no alive entities.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_sequential() {
        let mut alloc = EntityAllocator::new(8);
        let e0 = alloc.allocate().unwrap();
        let e1 = alloc.allocate().unwrap();
        assert_eq!(e0.index(), 0);
        assert_eq!(e1.index(), 1);
        assert_eq!(e0.generation(), 0);
        assert_eq!(alloc.len(), 2);
    }

    #[test]
    fn deallocate_and_reuse() {
        let mut alloc = EntityAllocator::new(8);
        let e0 = alloc.allocate().unwrap();
        assert!(alloc.deallocate(e0));
        let e0_reused = alloc.allocate().unwrap();
        assert_eq!(e0_reused.index(), 0);
        assert_eq!(e0_reused.generation(), 1);
        assert_ne!(e0, e0_reused);
    }

    #[test]
    fn double_deallocate_fails() {
        let mut alloc = EntityAllocator::new(8);
        let e = alloc.allocate().unwrap();
        assert!(alloc.deallocate(e));
        assert!(!alloc.deallocate(e));
    }

    #[test]
    fn stale_entity_not_alive() {
        let mut alloc = EntityAllocator::new(8);
        let e0 = alloc.allocate().unwrap();
        alloc.deallocate(e0);
        assert!(!alloc.is_alive(e0));
        let e0_new = alloc.allocate().unwrap();
        assert!(alloc.is_alive(e0_new));
    }

    #[test]
    fn handle_from_raw_id() {
        let mut alloc = EntityAllocator::new(4);
        let e0 = alloc.allocate().unwrap();
        alloc.deallocate(e0);
        let e0_new = alloc.allocate().unwrap();
        assert_eq!(alloc.entity(0), Some(e0_new));
        assert_eq!(alloc.entity(1), None);
        assert_eq!(alloc.entity(99), None);
    }

    #[test]
    fn bounded_by_capacity() {
        let mut alloc = EntityAllocator::new(2);
        let e0 = alloc.allocate().unwrap();
        alloc.allocate().unwrap();
        assert_eq!(
            alloc.allocate(),
            Err(StoreError::CapacityExhausted { capacity: 2 })
        );
        alloc.deallocate(e0);
        assert_eq!(alloc.allocate().map(|e| e.index()), Ok(0));
    }

    #[test]
    fn formatting() {
        let e = Entity::from_raw(3, 2);
        assert_eq!(format!("{e:?}"), "Entity(3v2)");
        assert_eq!(e.to_string(), "3v2");
    }
}
