//! Spell model and the machinery that casts it.
//!
//! A spell is an ordered recipe of parts:
//! - `SpellPart`: effect reference or augment, the recipe's atoms
//! - `Spell`: named recipe plus a cast method tag
//! - `SpellStats`: augments folded into per-effect numbers
//! - `SpellValidator`: structural checks before anything is spent
//! - `SpellRegistry`: effect and cast method lookup by id
//! - `CastMethod`: delivery strategy (self, touch, projectile)
//! - `SpellResolver`: the cast pipeline and resolution loop
//!
//! ## Design Philosophy
//!
//! Augments always precede the effect they modify, so a recipe reads in
//! casting order: `[Amplify, Fling]` is an amplified fling. The resolver
//! owns all bookkeeping for one cast attempt (gate, mana memo, cursor)
//! and can be parked mid-flight, which is how projectile delivery works.
//!
//! Hosts extend the system at three seams: register new [`SpellEffect`]s
//! and [`CastMethod`]s, or swap the [`SpellValidator`].
//!
//! [`SpellEffect`]: crate::effects::SpellEffect

pub mod context;
pub mod method;
pub mod part;
pub mod registry;
pub mod resolver;
pub mod spell;
pub mod stats;
pub mod validator;

pub use context::SpellContext;
pub use method::{CastMethod, CastOutcome, ProjectileCast, SelfCast, TouchCast};
pub use part::{Augment, CastMethodId, EffectId, SpellPart};
pub use registry::SpellRegistry;
pub use resolver::{CastEnv, SpellResolver, NOT_ENOUGH_MANA};
pub use spell::Spell;
pub use stats::SpellStats;
pub use validator::{SpellValidator, StandardSpellValidator, ValidationError};
