//! Entity identification.
//!
//! Every object living in a [`World`](crate::world::World) (casters, creatures,
//! projectiles) has a unique `EntityId`. IDs are allocated by the world at
//! spawn time and are never reused within a world.
//!
//! ## Usage
//!
//! ```
//! use glyphcast::core::{EntityId, EntityKind};
//!
//! let id = EntityId::new(7);
//! assert_eq!(id.raw(), 7);
//! assert_eq!(format!("{}", id), "Entity(7)");
//!
//! assert!(EntityKind::Projectile.is_projectile());
//! assert!(!EntityKind::Creature.is_projectile());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for any world entity.
///
/// Casters, creatures, and projectiles all have EntityIds. The world hands
/// them out sequentially starting from 1; 0 is never allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Broad classification of a world entity.
///
/// The engine only distinguishes creatures (things that can cast and be
/// targeted) from projectiles (things spawned by deferred cast methods).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A living entity: casters and spell targets.
    #[default]
    Creature,
    /// A spell projectile in flight.
    Projectile,
}

impl EntityKind {
    /// Check if this is a projectile.
    #[must_use]
    pub const fn is_projectile(self) -> bool {
        matches!(self, Self::Projectile)
    }
}
