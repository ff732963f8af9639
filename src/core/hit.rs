//! Hit results: what a cast landed on.
//!
//! Every resolution pass runs against a `HitResult` describing the target:
//! a block, an entity, or nothing (a miss at some location). Cast methods
//! set the hit; effects read it.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::geom::{BlockPos, Vec3};

/// Which hand an item-driven cast came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    #[default]
    Main,
    Off,
}

/// A cast that landed on a block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockHit {
    /// The block that was hit.
    pub pos: BlockPos,
    /// Exact location of the hit.
    pub location: Vec3,
}

impl BlockHit {
    /// Create a block hit at the center of the block.
    #[must_use]
    pub fn centered(pos: BlockPos) -> Self {
        Self { pos, location: pos.center() }
    }
}

/// A cast that landed on an entity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityHit {
    /// The entity that was hit.
    pub entity: EntityId,
    /// Exact location of the hit.
    pub location: Vec3,
}

/// What a cast landed on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum HitResult {
    /// Nothing was hit; the location is where the cast ended.
    Miss { location: Vec3 },
    /// A block was hit.
    Block(BlockHit),
    /// An entity was hit.
    Entity(EntityHit),
}

impl HitResult {
    /// A miss at the given location.
    #[must_use]
    pub const fn miss(location: Vec3) -> Self {
        Self::Miss { location }
    }

    /// A hit on a block.
    #[must_use]
    pub const fn block(pos: BlockPos, location: Vec3) -> Self {
        Self::Block(BlockHit { pos, location })
    }

    /// A hit on an entity.
    #[must_use]
    pub const fn entity(entity: EntityId, location: Vec3) -> Self {
        Self::Entity(EntityHit { entity, location })
    }

    /// The location of the hit, whatever its kind.
    #[must_use]
    pub const fn location(&self) -> Vec3 {
        match self {
            Self::Miss { location } => *location,
            Self::Block(hit) => hit.location,
            Self::Entity(hit) => hit.location,
        }
    }

    /// The entity that was hit, if any.
    #[must_use]
    pub const fn target_entity(&self) -> Option<EntityId> {
        match self {
            Self::Entity(hit) => Some(hit.entity),
            _ => None,
        }
    }

    /// Check if nothing was hit.
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::Miss { .. })
    }
}
