//! Spell context: a spell bound to a caster with a resolution cursor.
//!
//! The cursor is monotone within a pass: `next_part` only ever moves
//! forward, so no part is visited twice. Restarting from the beginning
//! requires an explicit `reset`.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;

use super::part::SpellPart;
use super::spell::Spell;

/// A spell mid-resolution: the recipe, the caster, and how far along we are.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellContext {
    spell: Spell,
    caster: EntityId,
    cursor: usize,
}

impl SpellContext {
    /// Bind a spell to a caster, with the cursor at the start.
    #[must_use]
    pub fn new(spell: Spell, caster: EntityId) -> Self {
        Self {
            spell,
            caster,
            cursor: 0,
        }
    }

    /// The spell being resolved.
    #[must_use]
    pub fn spell(&self) -> &Spell {
        &self.spell
    }

    /// The casting entity.
    #[must_use]
    pub fn caster(&self) -> EntityId {
        self.caster
    }

    /// Check if any parts remain unresolved.
    #[must_use]
    pub fn has_next_part(&self) -> bool {
        self.cursor < self.spell.len()
    }

    /// Consume and return the next part, advancing the cursor.
    pub fn next_part(&mut self) -> Option<SpellPart> {
        let part = self.spell.part_at(self.cursor);
        if part.is_some() {
            self.cursor += 1;
        }
        part
    }

    /// The cursor position: the index of the next unconsumed part.
    ///
    /// Directly after `next_part` returns a part, that part sits at
    /// `current_index() - 1`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    /// Number of parts not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.spell.len() - self.cursor
    }

    /// Move the cursor back to the start of the recipe.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
