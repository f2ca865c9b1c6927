//! A scene owns one registry and the allocator handing out its entity ids.

use anyhow::Result;
use tessera_core::{Health, Position, Vec3};
use tessera_ecs::{Entity, EntityAllocator, Registry, RegistryConfig};
use tracing::{debug, info};

pub struct Scene {
    pub registry: Registry,
    entities: EntityAllocator,
}

impl Scene {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            registry: Registry::with_config(config),
            entities: EntityAllocator::new(config.id_limit()),
        }
    }

    /// Spawn an entity with a position and health.
    pub fn spawn(&mut self, position: Position, health: Health) -> Result<Entity> {
        let entity = self.entities.allocate()?;
        let inserted = self
            .registry
            .add_component(entity.index(), position)
            .and_then(|_| self.registry.add_component(entity.index(), health));
        if let Err(e) = inserted {
            // Release the id and any component that did make it in.
            self.despawn(entity);
            return Err(e.into());
        }
        debug!("Spawned {}", entity);
        Ok(entity)
    }

    /// Remove an entity and all of its components. Stale handles are ignored.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.entities.deallocate(entity) {
            return false;
        }
        self.registry.despawn(entity.index());
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Advance one tick: drift every position, apply damage, and despawn the depleted.
    ///
    /// Returns the ids despawned this tick.
    pub fn tick(&mut self, damage: i32) -> Vec<u32> {
        for position in self.registry.storage_mut::<Position>().components_mut() {
            position.translate(Vec3::new(0.0, -1.0, 0.0));
        }

        let mut depleted = Vec::new();
        for (id, health) in self.registry.storage_mut::<Health>().iter_mut() {
            health.damage(damage);
            if health.is_depleted() {
                depleted.push(id);
            }
        }

        for &id in &depleted {
            if let Some(entity) = self.entities.entity(id) {
                self.despawn(entity);
                info!("Entity {} ran out of health", entity);
            }
        }
        depleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(RegistryConfig::with_capacity(12))
    }

    #[test]
    fn spawn_attaches_both_components() {
        let mut scene = scene();
        let e = scene
            .spawn(Position::new(5.0, 20.0, 4.0), Health::new(100))
            .unwrap();
        assert!(scene.is_alive(e));
        assert_eq!(
            scene.registry.get_component::<Health>(e.index()),
            Some(&Health::new(100))
        );
        assert!(scene.registry.has_component::<Position>(e.index()));
    }

    #[test]
    fn despawn_clears_components_and_handle() {
        let mut scene = scene();
        let e = scene.spawn(Position::default(), Health::new(1)).unwrap();
        assert!(scene.despawn(e));
        assert!(!scene.despawn(e));
        assert!(!scene.registry.has_any(e.index()));
        assert_eq!(scene.entity_count(), 0);
    }

    #[test]
    fn tick_despawns_depleted_entities() {
        let mut scene = scene();
        let weak = scene.spawn(Position::default(), Health::new(10)).unwrap();
        let strong = scene.spawn(Position::default(), Health::new(100)).unwrap();

        assert_eq!(scene.tick(10), vec![weak.index()]);
        assert!(!scene.is_alive(weak));
        assert!(scene.is_alive(strong));
        assert_eq!(
            scene.registry.get_component::<Health>(strong.index()),
            Some(&Health::new(90))
        );
        assert_eq!(
            scene.registry.get_component::<Position>(strong.index()),
            Some(&Position::new(0.0, -1.0, 0.0))
        );
    }

    #[test]
    fn failed_insert_releases_allocated_id() {
        let mut scene = Scene::new(RegistryConfig {
            capacity: 1,
            id_limit: Some(4),
        });
        let first = scene.spawn(Position::default(), Health::new(1)).unwrap();
        assert!(scene.spawn(Position::default(), Health::new(1)).is_err());

        assert_eq!(scene.entity_count(), 1);
        assert!(scene.entities.entity(1).is_none());
        assert!(!scene.registry.has_any(1));
        assert!(scene.is_alive(first));
    }

    #[test]
    fn spawn_fails_cleanly_when_full() {
        let mut scene = Scene::new(RegistryConfig::with_capacity(1));
        scene.spawn(Position::default(), Health::new(1)).unwrap();
        assert!(scene.spawn(Position::default(), Health::new(1)).is_err());
        assert_eq!(scene.entity_count(), 1);
    }
}
