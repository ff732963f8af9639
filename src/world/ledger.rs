//! Mana ledger contract.
//!
//! The spell engine never touches a mana pool directly. It asks the ledger
//! for the current balance, deducts through it, and checks the unlimited
//! bypass. [`World`](super::World) provides the reference implementation;
//! hosts with their own mana storage implement this trait instead.

use crate::core::EntityId;

/// Access to per-entity mana balances.
pub trait ManaLedger {
    /// Current mana balance of an entity.
    ///
    /// Unknown entities have a balance of 0.
    fn current_mana(&self, entity: EntityId) -> i32;

    /// Deduct mana from an entity, saturating at zero.
    fn remove_mana(&mut self, entity: EntityId, amount: i32);

    /// Check if an entity bypasses mana gating entirely.
    ///
    /// Entities with an unlimited pool always pass the cast gate and are
    /// never charged.
    fn has_unlimited_mana(&self, entity: EntityId) -> bool;
}
