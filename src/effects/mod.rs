//! Spell effects: what spells do when they land.
//!
//! - `SpellEffect`: the trait every effect implements
//! - `Fling`: launch the hit entity upward
//! - `Pull`: drag the hit entity toward the caster
//!
//! ## Design Philosophy
//!
//! Effects are stateless trait objects keyed by [`EffectId`] in the
//! registry; the recipe stores only the ID. An effect never inspects the
//! recipe around it: the resolver folds the preceding augment run into
//! [`SpellStats`] and hands the snapshot over.
//!
//! [`EffectId`]: crate::spell::EffectId
//! [`SpellStats`]: crate::spell::SpellStats

pub mod effect;
pub mod fling;
pub mod pull;

pub use effect::SpellEffect;
pub use fling::Fling;
pub use pull::Pull;
