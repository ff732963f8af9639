//! Cast methods: how a spell reaches its target.
//!
//! A cast method is the delivery strategy chosen when the spell is
//! composed. The dispatcher hands it the resolver after the gate and the
//! pre-cast event have passed; the method decides whether resolution
//! happens now (`Success`), not at all (`Failure`), or later (`Pending`,
//! with the resolver retained as the continuation).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BlockHit, EntityId, EntityKind, Hand, HitResult, Vec3};
use crate::events::EventBus;
use crate::world::World;

use super::part::CastMethodId;
use super::resolver::SpellResolver;
use super::stats::SpellStats;

/// What a cast method did with the cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastOutcome {
    /// The spell resolved now. Mana is charged.
    Success,
    /// The cast could not happen. Nothing is charged.
    Failure,
    /// Resolution is deferred (a projectile is in flight). Nothing is
    /// charged yet; charging happens when the resolver is resumed.
    Pending,
}

impl CastOutcome {
    /// Check for an immediate success.
    #[must_use]
    pub const fn was_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Check for a deferred resolution.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Delivery strategy for a spell.
///
/// One entry per dispatcher variant. The block-with-hand entry defaults to
/// the plain block entry; methods that care about the hand override it.
pub trait CastMethod: Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Cast with no explicit target.
    fn cast(
        &self,
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
        stats: &SpellStats,
    ) -> CastOutcome;

    /// Cast at a block.
    fn cast_on_block(
        &self,
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
        stats: &SpellStats,
        hit: &BlockHit,
    ) -> CastOutcome;

    /// Cast at a block from an item held in a specific hand.
    fn cast_on_block_with_hand(
        &self,
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
        stats: &SpellStats,
        hit: &BlockHit,
        _hand: Hand,
    ) -> CastOutcome {
        self.cast_on_block(world, bus, resolver, stats, hit)
    }

    /// Cast at an entity.
    fn cast_on_entity(
        &self,
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
        stats: &SpellStats,
        target: EntityId,
    ) -> CastOutcome;
}

/// Resolve immediately on the caster, whatever was targeted.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelfCast;

impl SelfCast {
    pub const ID: CastMethodId = CastMethodId::new(1);

    fn resolve_on_caster(
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
    ) -> CastOutcome {
        let caster = resolver.context().caster();
        let location = world.position(caster).unwrap_or(Vec3::ZERO);
        resolver.on_resolve(world, bus, HitResult::entity(caster, location));
        CastOutcome::Success
    }
}

impl CastMethod for SelfCast {
    fn name(&self) -> &'static str {
        "Self"
    }

    fn cast(
        &self,
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
        _stats: &SpellStats,
    ) -> CastOutcome {
        Self::resolve_on_caster(world, bus, resolver)
    }

    fn cast_on_block(
        &self,
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
        _stats: &SpellStats,
        _hit: &BlockHit,
    ) -> CastOutcome {
        Self::resolve_on_caster(world, bus, resolver)
    }

    fn cast_on_entity(
        &self,
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
        _stats: &SpellStats,
        _target: EntityId,
    ) -> CastOutcome {
        Self::resolve_on_caster(world, bus, resolver)
    }
}

/// Resolve immediately on the touched block or entity.
///
/// Touch needs something to touch: the no-target entry fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchCast;

impl TouchCast {
    pub const ID: CastMethodId = CastMethodId::new(2);
}

impl CastMethod for TouchCast {
    fn name(&self) -> &'static str {
        "Touch"
    }

    fn cast(
        &self,
        _world: &mut World,
        _bus: &EventBus,
        resolver: &mut SpellResolver,
        _stats: &SpellStats,
    ) -> CastOutcome {
        debug!(caster = %resolver.context().caster(), "touch cast with no target");
        CastOutcome::Failure
    }

    fn cast_on_block(
        &self,
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
        _stats: &SpellStats,
        hit: &BlockHit,
    ) -> CastOutcome {
        resolver.on_resolve(world, bus, HitResult::Block(*hit));
        CastOutcome::Success
    }

    fn cast_on_entity(
        &self,
        world: &mut World,
        bus: &EventBus,
        resolver: &mut SpellResolver,
        _stats: &SpellStats,
        target: EntityId,
    ) -> CastOutcome {
        let location = world.position(target).unwrap_or(Vec3::ZERO);
        resolver.on_resolve(world, bus, HitResult::entity(target, location));
        CastOutcome::Success
    }
}

/// Spawn a projectile and defer resolution to impact.
///
/// The caller keeps the resolver and calls
/// [`resume_cast`](SpellResolver::resume_cast) when the projectile lands.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectileCast;

impl ProjectileCast {
    pub const ID: CastMethodId = CastMethodId::new(3);

    fn launch(world: &mut World, resolver: &SpellResolver) -> CastOutcome {
        let caster = resolver.context().caster();
        let origin = world.position(caster).unwrap_or(Vec3::ZERO);
        let projectile = world.spawn(EntityKind::Projectile, origin);
        debug!(caster = %caster, projectile = %projectile, "projectile launched");
        CastOutcome::Pending
    }
}

impl CastMethod for ProjectileCast {
    fn name(&self) -> &'static str {
        "Projectile"
    }

    fn cast(
        &self,
        world: &mut World,
        _bus: &EventBus,
        resolver: &mut SpellResolver,
        _stats: &SpellStats,
    ) -> CastOutcome {
        Self::launch(world, resolver)
    }

    fn cast_on_block(
        &self,
        world: &mut World,
        _bus: &EventBus,
        resolver: &mut SpellResolver,
        _stats: &SpellStats,
        _hit: &BlockHit,
    ) -> CastOutcome {
        Self::launch(world, resolver)
    }

    fn cast_on_entity(
        &self,
        world: &mut World,
        _bus: &EventBus,
        resolver: &mut SpellResolver,
        _stats: &SpellStats,
        _target: EntityId,
    ) -> CastOutcome {
        Self::launch(world, resolver)
    }
}
