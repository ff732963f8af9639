//! The game world: entities and their casting-relevant state.
//!
//! ## World
//!
//! `World` is the mutable environment a spell resolves against. It owns the
//! entity table and provides every capability the engine injects:
//!
//! - positions and velocities (what effects push around)
//! - mana pools via [`ManaLedger`]
//! - item-provided augments and perks attached to casters
//! - a per-entity message sink with duplicate suppression
//!
//! ## Sides
//!
//! A world is either authoritative (the real simulation) or a preview (a
//! client-side prediction copy). User-facing failure messages are only
//! delivered on the authoritative side.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{EntityId, EntityKind, Vec3};
use crate::perks::PerkInstance;
use crate::spell::Augment;

use super::ledger::ManaLedger;

/// Which copy of the simulation this world is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// The real simulation. Messages are delivered.
    #[default]
    Authoritative,
    /// A prediction copy. Messages are suppressed.
    Preview,
}

/// Per-entity state tracked by the world.
#[derive(Clone, Debug, Default)]
pub struct EntityState {
    /// What kind of entity this is.
    pub kind: EntityKind,
    /// Current position.
    pub position: Vec3,
    /// Current motion, applied by the host's physics.
    pub velocity: Vec3,
    mana: i32,
    unlimited_mana: bool,
    item_augments: SmallVec<[Augment; 4]>,
    perks: Vec<PerkInstance>,
    messages: Vec<String>,
}

impl EntityState {
    fn new(kind: EntityKind, position: Vec3) -> Self {
        Self {
            kind,
            position,
            ..Self::default()
        }
    }

    /// Current mana balance.
    #[must_use]
    pub fn mana(&self) -> i32 {
        self.mana
    }

    /// Check the unlimited-mana bypass flag.
    #[must_use]
    pub fn has_unlimited_mana(&self) -> bool {
        self.unlimited_mana
    }

    /// Augments granted by held or worn items.
    #[must_use]
    pub fn item_augments(&self) -> &[Augment] {
        &self.item_augments
    }

    /// Perks attached to this entity, in attachment order.
    #[must_use]
    pub fn perks(&self) -> &[PerkInstance] {
        &self.perks
    }

    /// Messages delivered to this entity, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// The mutable environment spells resolve against.
#[derive(Clone, Debug, Default)]
pub struct World {
    side: Side,
    entities: FxHashMap<EntityId, EntityState>,
    next_id: u32,
}

impl World {
    /// Create an empty world on the given side.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            entities: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Which side this world is on.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Check if this is the authoritative simulation.
    #[must_use]
    pub fn is_authoritative(&self) -> bool {
        self.side == Side::Authoritative
    }

    // === Entities ===

    /// Spawn an entity, returning its freshly allocated ID.
    pub fn spawn(&mut self, kind: EntityKind, position: Vec3) -> EntityId {
        // next_id starts at 1 so 0 is never a live entity
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, EntityState::new(kind, position));
        id
    }

    /// Remove an entity, returning its final state.
    pub fn despawn(&mut self, id: EntityId) -> Option<EntityState> {
        self.entities.remove(&id)
    }

    /// Check if an entity is alive in this world.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Get an entity's state.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&EntityState> {
        self.entities.get(&id)
    }

    /// Get an entity's state mutably.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut EntityState> {
        self.entities.get_mut(&id)
    }

    /// Iterate over all live entities.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &EntityState)> {
        self.entities.iter().map(|(&id, state)| (id, state))
    }

    // === Position and motion ===

    /// Position of an entity, if alive.
    #[must_use]
    pub fn position(&self, id: EntityId) -> Option<Vec3> {
        self.entities.get(&id).map(|e| e.position)
    }

    /// Move an entity.
    pub fn set_position(&mut self, id: EntityId, position: Vec3) {
        if let Some(entity) = self.entity_mut(id) {
            entity.position = position;
        }
    }

    /// Velocity of an entity, if alive.
    #[must_use]
    pub fn velocity(&self, id: EntityId) -> Option<Vec3> {
        self.entities.get(&id).map(|e| e.velocity)
    }

    /// Set an entity's velocity.
    pub fn set_velocity(&mut self, id: EntityId, velocity: Vec3) {
        if let Some(entity) = self.entity_mut(id) {
            entity.velocity = velocity;
        }
    }

    // === Mana ===

    /// Set an entity's mana balance.
    pub fn set_mana(&mut self, id: EntityId, amount: i32) {
        if let Some(entity) = self.entity_mut(id) {
            entity.mana = amount.max(0);
        }
    }

    /// Grant or revoke the unlimited-mana bypass.
    pub fn set_unlimited_mana(&mut self, id: EntityId, unlimited: bool) {
        if let Some(entity) = self.entity_mut(id) {
            entity.unlimited_mana = unlimited;
        }
    }

    // === Augments and perks ===

    /// Attach an item-provided augment to an entity.
    ///
    /// Item augments apply to every effect the entity resolves, on top of
    /// the augments written into the spell itself.
    pub fn add_item_augment(&mut self, id: EntityId, augment: Augment) {
        if let Some(entity) = self.entity_mut(id) {
            entity.item_augments.push(augment);
        }
    }

    /// Item-provided augments of an entity. Empty for unknown entities.
    #[must_use]
    pub fn item_augments(&self, id: EntityId) -> &[Augment] {
        self.entities.get(&id).map_or(&[], |e| e.item_augments())
    }

    /// Attach a perk to an entity.
    pub fn add_perk(&mut self, id: EntityId, perk: PerkInstance) {
        if let Some(entity) = self.entity_mut(id) {
            entity.perks.push(perk);
        }
    }

    /// Perks of an entity, in attachment order. Empty for unknown entities.
    #[must_use]
    pub fn perks(&self, id: EntityId) -> &[PerkInstance] {
        self.entities.get(&id).map_or(&[], |e| e.perks())
    }

    /// Clone an entity's perk list for use during a resolution pass.
    ///
    /// Perks added or removed mid-pass do not affect the pass in flight.
    #[must_use]
    pub fn perk_snapshot(&self, id: EntityId) -> Vec<PerkInstance> {
        self.perks(id).to_vec()
    }

    /// Total mana discount granted by an entity's perks.
    #[must_use]
    pub fn mana_discount(&self, id: EntityId) -> i32 {
        self.perks(id).iter().map(PerkInstance::discount).sum()
    }

    // === Messages ===

    /// Deliver a message to an entity.
    ///
    /// A message identical to the previous one delivered to the same entity
    /// is dropped, so repeated cast failures do not spam.
    pub fn send_message(&mut self, id: EntityId, text: impl Into<String>) {
        let text = text.into();
        if let Some(entity) = self.entity_mut(id) {
            if entity.messages.last() == Some(&text) {
                return;
            }
            entity.messages.push(text);
        }
    }

    /// Messages delivered to an entity, oldest first.
    #[must_use]
    pub fn messages(&self, id: EntityId) -> &[String] {
        self.entities.get(&id).map_or(&[], |e| e.messages())
    }
}

impl ManaLedger for World {
    fn current_mana(&self, entity: EntityId) -> i32 {
        self.entities.get(&entity).map_or(0, EntityState::mana)
    }

    fn remove_mana(&mut self, entity: EntityId, amount: i32) {
        if let Some(state) = self.entity_mut(entity) {
            state.mana = (state.mana - amount).max(0);
        }
    }

    fn has_unlimited_mana(&self, entity: EntityId) -> bool {
        self.entities
            .get(&entity)
            .is_some_and(EntityState::has_unlimited_mana)
    }
}
