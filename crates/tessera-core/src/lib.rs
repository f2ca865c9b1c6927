//! Tessera Core - common component types
//!
//! Plain value types that scenes attach to entities through `tessera-ecs`.

pub mod types;

pub use glam::Vec3;
pub use types::{Health, Position};
