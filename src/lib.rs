//! # glyphcast
//!
//! A spell-casting resolution engine: compose spells from ordered parts,
//! gate them on validation and mana, deliver them through pluggable cast
//! methods, and resolve their effects against a mutable world.
//!
//! ## Design Principles
//!
//! 1. **Order Is Semantic**: A spell is an ordered recipe. Augments
//!    modify exactly the effect that follows them, and resolution walks
//!    the recipe with a cursor that only moves forward.
//!
//! 2. **Host-Extensible**: Effects, cast methods, validators, event
//!    handlers, and perks are all trait objects. The engine ships a small
//!    built-in set and hosts register their own.
//!
//! 3. **Charge Exactly Once**: The cost compared at the gate is the cost
//!    charged, computed once per cast and spent at most once, whether the
//!    spell resolves immediately or after a projectile flight.
//!
//! ## Architecture
//!
//! - **Resolver As Continuation**: `SpellResolver` owns all per-cast
//!   state. Deferred cast methods park it mid-flight and the host resumes
//!   it at impact.
//!
//! - **Persistent Recipes**: Spell part lists use `im-rs`, so the clones
//!   taken by resolvers and event payloads are O(1).
//!
//! - **World Sides**: An authoritative world delivers messages; a preview
//!   world (client prediction) stays silent.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, geometry, hit results, deterministic RNG
//! - `world`: The mutable environment and the mana ledger contract
//! - `spell`: Spell data model, validation, registry, resolver
//! - `effects`: The effect trait and the built-in Fling and Pull
//! - `events`: Lifecycle events and the dispatch bus
//! - `perks`: Passive caster bonuses hooked around resolution
//! - `drops`: Weighted, seedable drop tables

pub mod core;
pub mod drops;
pub mod effects;
pub mod events;
pub mod perks;
pub mod spell;
pub mod world;

// Re-export commonly used types
pub use crate::core::{
    BlockHit, BlockPos, DropRng, EntityHit, EntityId, EntityKind, Hand, HitResult, Vec3,
};

pub use crate::world::{EntityState, ManaLedger, Side, World};

pub use crate::spell::{
    Augment, CastEnv, CastMethod, CastMethodId, CastOutcome, EffectId, ProjectileCast, SelfCast,
    Spell, SpellContext, SpellPart, SpellRegistry, SpellResolver, SpellStats, SpellValidator,
    StandardSpellValidator, TouchCast, ValidationError,
};

pub use crate::effects::{Fling, Pull, SpellEffect};

pub use crate::events::{EventBus, SpellEvent, SpellEventHandler};

pub use crate::perks::{Perk, PerkInstance};

pub use crate::drops::{DropDistribution, DropEntry};
