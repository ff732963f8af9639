//! Spell resolver: the cast pipeline and the effect resolution loop.
//!
//! ## Cast pipeline
//!
//! Every dispatcher entry runs the same template: validate and gate on
//! mana, publish the cancellable pre-cast event, record the target as the
//! hit result, then hand control to the spell's cast method. Only an
//! immediate `Success` charges mana; a `Pending` outcome leaves the
//! resolver alive as the continuation and charges when it is resumed.
//!
//! ## Resolution loop
//!
//! `resolve_effects` walks the remaining recipe. Augment parts are skipped
//! (they were already folded into stats), each effect resolves between a
//! cancellable pre-effect event and a post-effect event, and the caster's
//! perks fire around it in snapshot order.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use glyphcast::core::{EntityKind, Vec3};
//! use glyphcast::effects::Fling;
//! use glyphcast::events::EventBus;
//! use glyphcast::spell::{Augment, CastEnv, SelfCast, Spell, SpellContext, SpellRegistry, SpellResolver};
//! use glyphcast::world::{ManaLedger, Side, World};
//!
//! let env = CastEnv::new(Arc::new(SpellRegistry::standard()));
//! let mut world = World::new(Side::Authoritative);
//! let bus = EventBus::new();
//!
//! let caster = world.spawn(EntityKind::Creature, Vec3::ZERO);
//! world.set_mana(caster, 100);
//!
//! let spell = Spell::new("Launch", SelfCast::ID)
//!     .with_augment(Augment::Amplify)
//!     .with_effect(Fling::ID);
//!
//! let mut resolver = SpellResolver::new(SpellContext::new(spell, caster), env);
//! assert!(resolver.cast(&mut world, &bus));
//!
//! assert_eq!(world.current_mana(caster), 80);
//! assert_eq!(world.velocity(caster).unwrap().y, 1.8);
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{BlockHit, EntityId, Hand, HitResult, Vec3};
use crate::events::{EventBus, SpellEvent};
use crate::world::{ManaLedger, World};

use super::context::SpellContext;
use super::method::{CastMethod, CastOutcome};
use super::part::SpellPart;
use super::registry::SpellRegistry;
use super::stats::SpellStats;
use super::validator::{SpellValidator, StandardSpellValidator};

/// Message shown when a cast is blocked for lack of mana.
pub const NOT_ENOUGH_MANA: &str = "not enough mana";

/// The collaborators a resolver casts with.
///
/// Bundles the part registry and the validator so hosts can swap either.
/// Cheap to clone; both halves are shared.
#[derive(Clone)]
pub struct CastEnv {
    pub registry: Arc<SpellRegistry>,
    pub validator: Arc<dyn SpellValidator>,
}

impl CastEnv {
    /// Environment with the standard validator.
    #[must_use]
    pub fn new(registry: Arc<SpellRegistry>) -> Self {
        Self {
            registry,
            validator: Arc::new(StandardSpellValidator),
        }
    }

    /// Swap in a different validator (builder pattern).
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn SpellValidator>) -> Self {
        self.validator = validator;
        self
    }
}

impl std::fmt::Debug for CastEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CastEnv")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// One cast attempt, from gate to resolution.
///
/// A resolver is built for a single spell-and-caster pair. Immediate cast
/// methods run it to completion inside the dispatcher; deferred methods
/// leave it pending, and the host resumes it when the projectile lands.
/// After a full pass it can be rewound with [`reset`](Self::reset) and
/// cast again.
pub struct SpellResolver {
    context: SpellContext,
    env: CastEnv,
    method: Option<Arc<dyn CastMethod>>,
    silent: bool,
    hit: Option<HitResult>,
    pending_cost: Option<i32>,
    charged: bool,
}

impl SpellResolver {
    /// Build a resolver for a spell context.
    ///
    /// The cast method is looked up from the spell's tag here, once.
    #[must_use]
    pub fn new(context: SpellContext, env: CastEnv) -> Self {
        let method = env.registry.cast_method(context.spell().cast_method).cloned();
        Self {
            context,
            env,
            method,
            silent: false,
            hit: None,
            pending_cost: None,
            charged: false,
        }
    }

    /// Suppress user-facing failure messages for this cast (builder pattern).
    #[must_use]
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// The spell context being resolved.
    #[must_use]
    pub fn context(&self) -> &SpellContext {
        &self.context
    }

    /// The spell context, mutably.
    pub fn context_mut(&mut self) -> &mut SpellContext {
        &mut self.context
    }

    /// The current hit result, if a target has been recorded.
    #[must_use]
    pub fn hit_result(&self) -> Option<&HitResult> {
        self.hit.as_ref()
    }

    /// Check if failure messages are suppressed.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Check if this cast has already been charged.
    #[must_use]
    pub fn is_charged(&self) -> bool {
        self.charged
    }

    // === Gate ===

    /// Check whether the cast may proceed: validation, then mana.
    ///
    /// On failure at most one message is delivered to the caster (the first
    /// validation error, or the mana message), and only when the resolver
    /// is not silent and the world is authoritative.
    pub fn can_cast(&mut self, world: &mut World) -> bool {
        let caster = self.context.caster();

        let errors = self.env.validator.validate(self.context.spell(), &self.env.registry);
        if let Some(first) = errors.first() {
            debug!(caster = %caster, error = %first, "spell failed validation");
            if !self.silent && world.is_authoritative() {
                world.send_message(caster, first.to_string());
            }
            return false;
        }

        if world.has_unlimited_mana(caster) {
            return true;
        }

        let cost = self.resolve_cost(world);
        if cost > world.current_mana(caster) {
            debug!(caster = %caster, cost, "not enough mana");
            if !self.silent && world.is_authoritative() {
                world.send_message(caster, NOT_ENOUGH_MANA);
            }
            return false;
        }

        true
    }

    // === Dispatch ===

    /// Cast with no explicit target.
    pub fn cast(&mut self, world: &mut World, bus: &EventBus) -> bool {
        if !self.begin_cast(world, bus) {
            return false;
        }
        self.hit = None;
        let stats = self.cast_stats(world);
        let Some(method) = self.method.clone() else {
            return false;
        };
        let outcome = method.cast(world, bus, self, &stats);
        self.finish_cast(world, outcome)
    }

    /// Cast at a block.
    pub fn cast_on_block(&mut self, world: &mut World, bus: &EventBus, hit: BlockHit) -> bool {
        if !self.begin_cast(world, bus) {
            return false;
        }
        self.hit = Some(HitResult::Block(hit));
        let stats = self.cast_stats(world);
        let Some(method) = self.method.clone() else {
            return false;
        };
        let outcome = method.cast_on_block(world, bus, self, &stats, &hit);
        self.finish_cast(world, outcome)
    }

    /// Cast at a block from an item held in a specific hand.
    pub fn cast_on_block_with_hand(
        &mut self,
        world: &mut World,
        bus: &EventBus,
        hit: BlockHit,
        hand: Hand,
    ) -> bool {
        if !self.begin_cast(world, bus) {
            return false;
        }
        self.hit = Some(HitResult::Block(hit));
        let stats = self.cast_stats(world);
        let Some(method) = self.method.clone() else {
            return false;
        };
        let outcome = method.cast_on_block_with_hand(world, bus, self, &stats, &hit, hand);
        self.finish_cast(world, outcome)
    }

    /// Cast at an entity.
    pub fn cast_on_entity(&mut self, world: &mut World, bus: &EventBus, target: EntityId) -> bool {
        if !self.begin_cast(world, bus) {
            return false;
        }
        let location = world.position(target).unwrap_or(Vec3::ZERO);
        self.hit = Some(HitResult::entity(target, location));
        let stats = self.cast_stats(world);
        let Some(method) = self.method.clone() else {
            return false;
        };
        let outcome = method.cast_on_entity(world, bus, self, &stats, target);
        self.finish_cast(world, outcome)
    }

    /// Gate and pre-cast event, shared by every dispatch entry.
    fn begin_cast(&mut self, world: &mut World, bus: &EventBus) -> bool {
        if !self.can_cast(world) {
            return false;
        }
        let mut event = SpellEvent::pre_cast(self.context.caster(), self.context.spell());
        if bus.publish(&mut event, world) {
            debug!(
                caster = %self.context.caster(),
                spell = %self.context.spell().name,
                "cast cancelled"
            );
            return false;
        }
        true
    }

    fn finish_cast(&mut self, world: &mut World, outcome: CastOutcome) -> bool {
        if outcome.was_success() {
            self.expend_mana(world);
        }
        outcome.was_success()
    }

    /// Stats handed to the cast method: the spell's leading augment run
    /// plus the caster's item augments.
    fn cast_stats(&self, world: &World) -> SpellStats {
        SpellStats::new()
            .with_augments(&self.context.spell().leading_augments())
            .with_augments(world.item_augments(self.context.caster()))
    }

    // === Resolution ===

    /// Record the hit and run the resolution loop against it.
    pub fn on_resolve(&mut self, world: &mut World, bus: &EventBus, hit: HitResult) {
        self.hit = Some(hit);
        self.resolve_effects(world, bus);
    }

    /// Resume a deferred cast: charge mana, then resolve at the hit.
    ///
    /// This is the continuation for `Pending` outcomes. Charging goes
    /// through the same exactly-once guard as the immediate path, so
    /// resuming twice never double-charges.
    pub fn resume_cast(&mut self, world: &mut World, bus: &EventBus, hit: HitResult) {
        self.expend_mana(world);
        self.on_resolve(world, bus, hit);
    }

    /// Run the resolution loop over the remaining recipe.
    ///
    /// The cursor continues from wherever the previous pass stopped; use
    /// [`reset`](Self::reset) to process the spell from the beginning
    /// again. With no recorded hit the pass resolves against a miss at the
    /// origin.
    pub fn resolve_effects(&mut self, world: &mut World, bus: &EventBus) {
        let caster = self.context.caster();
        let spell = self.context.spell().clone();
        let hit = self.hit.unwrap_or(HitResult::miss(Vec3::ZERO));

        let mut pre = SpellEvent::pre_resolve(caster, &spell, hit);
        if bus.publish(&mut pre, world) {
            debug!(caster = %caster, spell = %spell.name, "resolution cancelled");
            return;
        }

        // One snapshot per pass: perks attached mid-pass wait for the next one.
        let perks = world.perk_snapshot(caster);

        while let Some(part) = self.context.next_part() {
            let SpellPart::Effect(id) = part else {
                continue;
            };
            let Some(effect) = self.env.registry.effect(id).cloned() else {
                trace!(effect = %id, "skipping unregistered effect");
                continue;
            };

            // The part just consumed sits one behind the cursor.
            let index = self.context.current_index() - 1;
            let stats = SpellStats::new()
                .with_augments(&spell.augments_before(index))
                .with_augments(world.item_augments(caster));

            let mut pre_effect = SpellEvent::pre_effect(caster, id, hit, &stats);
            if bus.publish(&mut pre_effect, world) {
                trace!(effect = %id, "effect cancelled");
                continue;
            }

            for perk in &perks {
                perk.fire_pre(id, &hit, world, caster, &stats);
            }

            trace!(effect = %id, index, "resolving effect");
            effect.on_resolve(&hit, world, &mut self.context, &stats);

            for perk in &perks {
                perk.fire_post(id, &hit, world, caster, &stats);
            }

            let mut post_effect = SpellEvent::post_effect(caster, id, hit, &stats);
            bus.publish(&mut post_effect, world);
        }

        let mut post = SpellEvent::post_resolve(caster, &spell, hit);
        bus.publish(&mut post, world);
    }

    // === Mana ===

    /// The discounted cost of this pass.
    ///
    /// Computed once and memoized: the value compared at the gate is the
    /// value charged, even if discounts change in between. Charging or
    /// [`reset`](Self::reset) clears the memo.
    pub fn resolve_cost(&mut self, world: &World) -> i32 {
        if let Some(cost) = self.pending_cost {
            return cost;
        }
        let base = self.context.spell().cost(&self.env.registry);
        let cost = (base - world.mana_discount(self.context.caster())).max(0);
        self.pending_cost = Some(cost);
        cost
    }

    /// Charge the resolve cost to the caster, exactly once.
    ///
    /// A second call is a no-op, so the immediate and deferred paths can
    /// both run through here safely. Casters with an unlimited pool are
    /// never charged.
    pub fn expend_mana(&mut self, world: &mut World) {
        if self.charged {
            return;
        }
        let caster = self.context.caster();
        if !world.has_unlimited_mana(caster) {
            let cost = self.resolve_cost(world);
            world.remove_mana(caster, cost);
            debug!(caster = %caster, cost, "mana charged");
        }
        self.charged = true;
        self.pending_cost = None;
    }

    /// Rewind for another full pass: cursor to the start, hit cleared,
    /// cost and charge state forgotten.
    pub fn reset(&mut self) {
        self.context.reset();
        self.hit = None;
        self.pending_cost = None;
        self.charged = false;
    }
}

impl std::fmt::Debug for SpellResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellResolver")
            .field("context", &self.context)
            .field("silent", &self.silent)
            .field("hit", &self.hit)
            .field("charged", &self.charged)
            .finish_non_exhaustive()
    }
}
