//! The effect trait.

use crate::core::HitResult;
use crate::spell::{Augment, SpellContext, SpellStats};
use crate::world::World;

/// Something a spell does to its hit target.
///
/// Effects are registered once and shared; all per-cast state arrives
/// through the arguments. `on_resolve` receives the folded stats of the
/// augment run that preceded this effect in the recipe, never the raw
/// parts.
pub trait SpellEffect: Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Base mana cost, summed into the spell's cost.
    fn mana_cost(&self) -> i32;

    /// Check whether an augment may modify this effect.
    ///
    /// The validator rejects recipes that pair an augment with an effect
    /// that does not accept it. Accepting everything is the default.
    fn accepts_augment(&self, _augment: Augment) -> bool {
        true
    }

    /// Apply the effect to the world.
    ///
    /// `hit` is where the spell landed; effects that need an entity and
    /// got a block or a miss simply do nothing. The context is mutable so
    /// effects that steer resolution (filters, chaining) can reach the
    /// cursor.
    fn on_resolve(
        &self,
        hit: &HitResult,
        world: &mut World,
        context: &mut SpellContext,
        stats: &SpellStats,
    );
}
