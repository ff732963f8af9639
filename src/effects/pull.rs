//! Pull: drag the hit entity toward the caster.

use tracing::debug;

use crate::core::HitResult;
use crate::spell::{Augment, EffectId, SpellContext, SpellStats};
use crate::world::World;

use super::effect::SpellEffect;

/// Drags the hit entity toward the caster.
///
/// Adds an impulse pointing at the caster, with speed
/// `1.0 + 0.5 * amplification`, to the target's motion, then moves the
/// target one step along the new motion. A target standing exactly on
/// the caster gets no impulse.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pull;

impl Pull {
    pub const ID: EffectId = EffectId::new(2);
}

impl SpellEffect for Pull {
    fn name(&self) -> &'static str {
        "Pull"
    }

    fn mana_cost(&self) -> i32 {
        15
    }

    fn accepts_augment(&self, augment: Augment) -> bool {
        matches!(augment, Augment::Amplify | Augment::Dampen)
    }

    fn on_resolve(
        &self,
        hit: &HitResult,
        world: &mut World,
        context: &mut SpellContext,
        stats: &SpellStats,
    ) {
        let Some(target) = hit.target_entity() else {
            return;
        };
        let Some(caster_pos) = world.position(context.caster()) else {
            return;
        };
        let Some(target_pos) = world.position(target) else {
            return;
        };
        let Some(velocity) = world.velocity(target) else {
            return;
        };

        let speed = 1.0 + 0.5 * stats.amplification();
        let impulse = caster_pos.sub(target_pos).normalize().scale(speed);
        let velocity = velocity.add(impulse);
        world.set_velocity(target, velocity);
        world.set_position(target, target_pos.add(velocity));
        debug!(target = %target, speed, "pulled");
    }
}
