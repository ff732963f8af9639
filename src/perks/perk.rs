//! Perk trait and attached instances.

use std::sync::Arc;

use crate::core::{EntityId, HitResult};
use crate::spell::{EffectId, SpellStats};
use crate::world::World;

/// A passive bonus attached to a caster.
///
/// Perks hook into casting in two ways: a flat mana discount consulted by
/// the cost computation, and world hooks fired around every effect the
/// caster resolves. All hooks default to doing nothing, so a perk
/// implements only what it cares about.
pub trait Perk: Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Flat mana discount granted at the given level.
    fn mana_discount(&self, _level: u8) -> i32 {
        0
    }

    /// Hook fired just before each effect of the caster's spell resolves.
    fn on_pre_resolve(
        &self,
        _level: u8,
        _effect: EffectId,
        _hit: &HitResult,
        _world: &mut World,
        _caster: EntityId,
        _stats: &SpellStats,
    ) {
    }

    /// Hook fired just after each effect of the caster's spell resolves.
    fn on_post_resolve(
        &self,
        _level: u8,
        _effect: EffectId,
        _hit: &HitResult,
        _world: &mut World,
        _caster: EntityId,
        _stats: &SpellStats,
    ) {
    }
}

/// A perk attached to an entity at a specific level.
///
/// The same perk can be attached to many entities at different levels;
/// the instance pairs the shared trait object with its level.
#[derive(Clone)]
pub struct PerkInstance {
    perk: Arc<dyn Perk>,
    level: u8,
}

impl PerkInstance {
    /// Attach a perk at a level.
    #[must_use]
    pub fn new(perk: Arc<dyn Perk>, level: u8) -> Self {
        Self { perk, level }
    }

    /// The perk's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.perk.name()
    }

    /// The attached level.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// The discount this instance grants.
    #[must_use]
    pub fn discount(&self) -> i32 {
        self.perk.mana_discount(self.level)
    }

    /// Fire the pre-effect hook.
    pub fn fire_pre(
        &self,
        effect: EffectId,
        hit: &HitResult,
        world: &mut World,
        caster: EntityId,
        stats: &SpellStats,
    ) {
        self.perk
            .on_pre_resolve(self.level, effect, hit, world, caster, stats);
    }

    /// Fire the post-effect hook.
    pub fn fire_post(
        &self,
        effect: EffectId,
        hit: &HitResult,
        world: &mut World,
        caster: EntityId,
        stats: &SpellStats,
    ) {
        self.perk
            .on_post_resolve(self.level, effect, hit, world, caster, stats);
    }
}

impl std::fmt::Debug for PerkInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerkInstance")
            .field("perk", &self.perk.name())
            .field("level", &self.level)
            .finish()
    }
}
