//! Passive caster bonuses.
//!
//! - `Perk`: discount and per-effect hook trait
//! - `PerkInstance`: a perk attached to an entity at a level
//!
//! The resolver snapshots a caster's perk list once per resolution pass,
//! so attaching or removing perks mid-pass affects only later passes.

pub mod perk;

pub use perk::{Perk, PerkInstance};
