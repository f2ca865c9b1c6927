//! Tessera ECS - sparse-set component storage
//!
//! Associates typed components with bounded integer entity ids:
//! - `IndexSet` maps ids to packed positions with O(1) add, remove and lookup
//! - `ComponentStore<T>` keeps one component array in lockstep with an `IndexSet`
//! - `Registry` owns one store per component type, created on first use

mod component;
mod config;
mod entity;
mod error;
mod index_set;
mod registry;
mod shared;

pub use component::{Component, ComponentStore, ErasedStore};
pub use config::RegistryConfig;
pub use entity::{Entity, EntityAllocator};
pub use error::StoreError;
pub use index_set::IndexSet;
pub use registry::Registry;
pub use shared::SharedRegistry;
