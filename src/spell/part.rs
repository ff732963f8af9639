//! Spell parts: the sequence elements a spell is composed of.
//!
//! A spell recipe is an ordered list of parts. Each part is either an
//! effect (something that happens to the hit target) or an augment
//! (a modifier applied to the next effect in the sequence). Order is
//! semantic: a contiguous run of augments modifies exactly the effect
//! that follows it, and nothing else.

use serde::{Deserialize, Serialize};

/// Unique identifier for a registered effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

impl EffectId {
    /// Create an effect ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// Unique identifier for a registered cast method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastMethodId(pub u32);

impl CastMethodId {
    /// Create a cast method ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CastMethodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CastMethod({})", self.0)
    }
}

/// A modifier applied to the next effect in a spell sequence.
///
/// Augments never resolve on their own and carry no mana cost. They are
/// consumed by the stats builder when the effect they precede resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Augment {
    /// +1 amplification on the next effect.
    Amplify,
    /// -1 amplification on the next effect.
    Dampen,
    /// +1 duration modifier on the next effect.
    ExtendTime,
    /// -1 duration modifier on the next effect.
    DurationDown,
    /// Make the next effect target-sensitive. Idempotent.
    Sensitive,
}

impl Augment {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amplify => "Amplify",
            Self::Dampen => "Dampen",
            Self::ExtendTime => "Extend Time",
            Self::DurationDown => "Duration Down",
            Self::Sensitive => "Sensitive",
        }
    }

    /// How many copies of this augment one run may carry.
    ///
    /// `None` means unlimited. `Sensitive` is a flag, so stacking a second
    /// copy is a validation error.
    #[must_use]
    pub const fn stack_limit(self) -> Option<u8> {
        match self {
            Self::Sensitive => Some(1),
            _ => None,
        }
    }
}

impl std::fmt::Display for Augment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of a spell recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellPart {
    /// An effect, resolved against the hit target.
    Effect(EffectId),
    /// An augment, modifying the next effect.
    Augment(Augment),
}

impl SpellPart {
    /// Check if this part is an augment.
    #[must_use]
    pub const fn is_augment(self) -> bool {
        matches!(self, Self::Augment(_))
    }

    /// Check if this part is an effect.
    #[must_use]
    pub const fn is_effect(self) -> bool {
        matches!(self, Self::Effect(_))
    }

    /// The effect ID, if this part is an effect.
    #[must_use]
    pub const fn as_effect(self) -> Option<EffectId> {
        match self {
            Self::Effect(id) => Some(id),
            Self::Augment(_) => None,
        }
    }

    /// The augment, if this part is one.
    #[must_use]
    pub const fn as_augment(self) -> Option<Augment> {
        match self {
            Self::Augment(augment) => Some(augment),
            Self::Effect(_) => None,
        }
    }
}
