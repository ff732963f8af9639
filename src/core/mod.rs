//! Core value types: entities, geometry, hit results, RNG.
//!
//! This module contains the fundamental building blocks shared by the world
//! model and the spell engine. Everything here is plain data with no game
//! logic attached.

pub mod entity;
pub mod geom;
pub mod hit;
pub mod rng;

pub use entity::{EntityId, EntityKind};
pub use geom::{BlockPos, Vec3};
pub use hit::{BlockHit, EntityHit, Hand, HitResult};
pub use rng::DropRng;
