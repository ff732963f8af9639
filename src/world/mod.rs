//! World model: the environment spells resolve against.
//!
//! The engine reaches the world only through narrow capabilities: the
//! [`ManaLedger`] for balances, item augments and perks for stat building,
//! and the message sink for failure feedback. `World` bundles a reference
//! implementation of all of them behind an entity table.

pub mod ledger;
pub mod state;

pub use ledger::ManaLedger;
pub use state::{EntityState, Side, World};
