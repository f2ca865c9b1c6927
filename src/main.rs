//! Tessera driver: builds a scene, runs a few simulation ticks, and logs the result.

mod scene;
mod settings;

use anyhow::{Context, Result};
use tessera_core::{Health, Position};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use scene::Scene;
use settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Starting Tessera...");

    let settings = Settings::load();
    info!(
        "Registry capacity {}, id limit {}",
        settings.registry.capacity,
        settings.registry.id_limit()
    );

    let mut scene = Scene::new(settings.registry);
    let first = scene
        .spawn(Position::new(5.0, 20.0, 4.0), Health::new(100))
        .context("Failed to spawn first entity")?;
    let second = scene
        .spawn(Position::new(100.0, 200.0, 2.0), Health::new(25))
        .context("Failed to spawn second entity")?;
    info!("Spawned {} and {}", first, second);

    for tick in 1..=settings.simulation.ticks {
        let despawned = scene.tick(settings.simulation.damage_per_tick);
        info!(
            "Tick {}: {} alive, {} despawned",
            tick,
            scene.entity_count(),
            despawned.len()
        );
    }

    for (id, health) in scene.registry.iter::<Health>() {
        let position = scene.registry.get_component::<Position>(id);
        info!("Entity {}: {:?} at {:?}", id, health, position);
    }
    for (type_name, count) in scene.registry.summary() {
        info!("{}: {} live", type_name, count);
    }

    info!("Tessera shutdown complete");
    Ok(())
}
