//! Fling: launch the hit entity upward.

use tracing::debug;

use crate::core::HitResult;
use crate::spell::{Augment, EffectId, SpellContext, SpellStats};
use crate::world::World;

use super::effect::SpellEffect;

/// Launches the hit entity into the air.
///
/// Adds a vertical impulse of `0.8 + amplification` to the target's
/// motion, leaving the horizontal components alone. Blocks and misses
/// are unaffected.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fling;

impl Fling {
    pub const ID: EffectId = EffectId::new(1);
}

impl SpellEffect for Fling {
    fn name(&self) -> &'static str {
        "Fling"
    }

    fn mana_cost(&self) -> i32 {
        20
    }

    fn accepts_augment(&self, augment: Augment) -> bool {
        matches!(augment, Augment::Amplify | Augment::Dampen)
    }

    fn on_resolve(
        &self,
        hit: &HitResult,
        world: &mut World,
        _context: &mut SpellContext,
        stats: &SpellStats,
    ) {
        let Some(target) = hit.target_entity() else {
            return;
        };
        let Some(mut velocity) = world.velocity(target) else {
            return;
        };
        velocity.y += 0.8 + stats.amplification();
        world.set_velocity(target, velocity);
        debug!(target = %target, y = velocity.y, "flung");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntityKind, Vec3};
    use crate::spell::{method::SelfCast, Spell};
    use crate::world::{Side, World};

    fn resolve(world: &mut World, hit: HitResult, stats: &SpellStats) {
        let spell = Spell::new("Test", SelfCast::ID).with_effect(Fling::ID);
        let mut context = SpellContext::new(spell, crate::core::EntityId::new(1));
        Fling.on_resolve(&hit, world, &mut context, stats);
    }

    #[test]
    fn test_adds_vertical_impulse() {
        let mut world = World::new(Side::Authoritative);
        let target = world.spawn(EntityKind::Creature, Vec3::ZERO);
        world.set_velocity(target, Vec3::new(1.0, 0.0, 2.0));

        let hit = HitResult::entity(target, Vec3::ZERO);
        resolve(&mut world, hit, &SpellStats::new());

        assert_eq!(world.velocity(target), Some(Vec3::new(1.0, 0.8, 2.0)));
    }

    #[test]
    fn test_impulse_adds_to_existing_motion() {
        let mut world = World::new(Side::Authoritative);
        let target = world.spawn(EntityKind::Creature, Vec3::ZERO);
        world.set_velocity(target, Vec3::new(0.0, 0.5, 0.0));

        let hit = HitResult::entity(target, Vec3::ZERO);
        resolve(&mut world, hit, &SpellStats::new());

        assert_eq!(world.velocity(target), Some(Vec3::new(0.0, 1.3, 0.0)));
    }

    #[test]
    fn test_amplification_raises_launch() {
        let mut world = World::new(Side::Authoritative);
        let target = world.spawn(EntityKind::Creature, Vec3::ZERO);

        let stats = SpellStats::new()
            .with_augment(Augment::Amplify)
            .with_augment(Augment::Amplify);
        let hit = HitResult::entity(target, Vec3::ZERO);
        resolve(&mut world, hit, &stats);

        assert_eq!(world.velocity(target).unwrap().y, 2.8);
    }

    #[test]
    fn test_dampen_weakens_launch() {
        let mut world = World::new(Side::Authoritative);
        let target = world.spawn(EntityKind::Creature, Vec3::ZERO);

        let stats = SpellStats::new().with_augment(Augment::Dampen);
        let hit = HitResult::entity(target, Vec3::ZERO);
        resolve(&mut world, hit, &stats);

        assert_eq!(world.velocity(target).unwrap().y, 0.8 - 1.0);
    }

    #[test]
    fn test_miss_does_nothing() {
        let mut world = World::new(Side::Authoritative);
        let bystander = world.spawn(EntityKind::Creature, Vec3::ZERO);

        resolve(&mut world, HitResult::miss(Vec3::ZERO), &SpellStats::new());

        assert_eq!(world.velocity(bystander), Some(Vec3::ZERO));
    }

    #[test]
    fn test_despawned_target_is_ignored() {
        let mut world = World::new(Side::Authoritative);
        let target = world.spawn(EntityKind::Creature, Vec3::ZERO);
        let hit = HitResult::entity(target, Vec3::ZERO);
        world.despawn(target);

        resolve(&mut world, hit, &SpellStats::new());
    }

    #[test]
    fn test_augment_acceptance() {
        assert!(Fling.accepts_augment(Augment::Amplify));
        assert!(Fling.accepts_augment(Augment::Dampen));
        assert!(!Fling.accepts_augment(Augment::Sensitive));
        assert!(!Fling.accepts_augment(Augment::ExtendTime));
    }
}
