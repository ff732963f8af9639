//! Weighted drop tables.
//!
//! - `DropEntry`: an item with a selection weight
//! - `DropDistribution`: weight-proportional picking with a reroll policy
//!
//! Selection runs on the deterministic [`DropRng`](crate::core::DropRng),
//! so hosts replaying a seed reproduce the same drops.

pub mod distribution;

pub use distribution::{DropDistribution, DropEntry};
