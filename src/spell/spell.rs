//! The spell: a named, ordered recipe of parts plus a cast method.
//!
//! Spells are pure data. They carry no behavior of their own; the resolver
//! walks the recipe and the registry supplies the behavior behind each
//! effect ID. The recipe uses a persistent vector, so the clones taken by
//! resolvers and event payloads are O(1).
//!
//! ## Example
//!
//! ```
//! use glyphcast::effects::Fling;
//! use glyphcast::spell::{Augment, SelfCast, Spell, SpellRegistry};
//!
//! let spell = Spell::new("Launch", SelfCast::ID)
//!     .with_augment(Augment::Amplify)
//!     .with_effect(Fling::ID);
//!
//! let registry = SpellRegistry::standard();
//! assert_eq!(spell.len(), 2);
//! assert_eq!(spell.cost(&registry), 20); // augments cost nothing
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::part::{Augment, CastMethodId, EffectId, SpellPart};
use super::registry::SpellRegistry;

/// A composed spell: name, part recipe, and cast method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Display name.
    pub name: String,

    /// The ordered part sequence.
    recipe: Vector<SpellPart>,

    /// How the spell is delivered to its target.
    pub cast_method: CastMethodId,
}

impl Spell {
    /// Create an empty spell with the given name and cast method.
    pub fn new(name: impl Into<String>, cast_method: CastMethodId) -> Self {
        Self {
            name: name.into(),
            recipe: Vector::new(),
            cast_method,
        }
    }

    /// Append a part (builder pattern).
    #[must_use]
    pub fn with_part(mut self, part: SpellPart) -> Self {
        self.recipe.push_back(part);
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(self, effect: EffectId) -> Self {
        self.with_part(SpellPart::Effect(effect))
    }

    /// Append an augment (builder pattern).
    #[must_use]
    pub fn with_augment(self, augment: Augment) -> Self {
        self.with_part(SpellPart::Augment(augment))
    }

    /// The part sequence.
    #[must_use]
    pub fn parts(&self) -> &Vector<SpellPart> {
        &self.recipe
    }

    /// The part at a given position.
    #[must_use]
    pub fn part_at(&self, index: usize) -> Option<SpellPart> {
        self.recipe.get(index).copied()
    }

    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipe.len()
    }

    /// Check if the recipe has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipe.is_empty()
    }

    /// Total base mana cost: the sum of the recipe's effect costs.
    ///
    /// Augments carry no cost, and effect IDs the registry does not know
    /// contribute nothing.
    #[must_use]
    pub fn cost(&self, registry: &SpellRegistry) -> i32 {
        self.recipe
            .iter()
            .filter_map(|part| part.as_effect())
            .filter_map(|id| registry.effect(id))
            .map(|effect| effect.mana_cost())
            .sum()
    }

    /// The augment run at the start of the recipe.
    ///
    /// These modify the first effect and double as the whole-cast stats
    /// handed to the cast method.
    #[must_use]
    pub fn leading_augments(&self) -> SmallVec<[Augment; 4]> {
        self.recipe
            .iter()
            .map_while(|part| part.as_augment())
            .collect()
    }

    /// The contiguous augment run immediately preceding `index`.
    ///
    /// Returned in recipe order. Empty when the preceding part is an
    /// effect or `index` is 0.
    #[must_use]
    pub fn augments_before(&self, index: usize) -> SmallVec<[Augment; 4]> {
        let mut run: SmallVec<[Augment; 4]> = SmallVec::new();
        for i in (0..index.min(self.recipe.len())).rev() {
            match self.recipe.get(i).copied() {
                Some(SpellPart::Augment(augment)) => run.push(augment),
                _ => break,
            }
        }
        run.reverse();
        run
    }

    /// Serialize to the compact wire form used for item storage.
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize from the compact wire form.
    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl std::fmt::Display for Spell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} parts)", self.name, self.recipe.len())
    }
}
