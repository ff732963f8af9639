//! Spell validation.
//!
//! Validation is a pure check over the part sequence and the registry. It
//! never touches mana or the world; the cast gate runs it first and reports
//! only the first error to the caster.

use thiserror::Error;

use super::part::{Augment, CastMethodId, EffectId, SpellPart};
use super::registry::SpellRegistry;
use super::spell::Spell;

/// A structural problem with a composed spell.
///
/// The `Display` form is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("spell has no parts")]
    EmptySpell,

    #[error("unknown cast method {0}")]
    UnknownCastMethod(CastMethodId),

    #[error("unknown effect {id} at part {index}")]
    UnknownEffect { index: usize, id: EffectId },

    #[error("augment {augment} at part {index} has no effect to modify")]
    DanglingAugment { index: usize, augment: Augment },

    #[error("augment {augment} at part {index} is not accepted by {effect}")]
    IncompatibleAugment {
        index: usize,
        augment: Augment,
        effect: EffectId,
    },

    #[error("augment {augment} at part {index} exceeds its stack limit of {limit}")]
    AugmentLimit {
        index: usize,
        augment: Augment,
        limit: u8,
    },
}

impl ValidationError {
    /// The recipe position the error points at, when it has one.
    #[must_use]
    pub fn part_index(&self) -> Option<usize> {
        match self {
            Self::EmptySpell | Self::UnknownCastMethod(_) => None,
            Self::UnknownEffect { index, .. }
            | Self::DanglingAugment { index, .. }
            | Self::IncompatibleAugment { index, .. }
            | Self::AugmentLimit { index, .. } => Some(*index),
        }
    }
}

/// Validates composed spells before casting.
pub trait SpellValidator: Send + Sync {
    /// Check a spell, returning every problem found.
    ///
    /// An empty result means the spell is castable. Errors appear in
    /// discovery order, so the first entry is the one to show the caster.
    fn validate(&self, spell: &Spell, registry: &SpellRegistry) -> Vec<ValidationError>;
}

/// The standard sequence rules.
///
/// - the recipe must not be empty
/// - the cast method and every effect must be registered
/// - every augment run must be followed by an effect that accepts it
/// - no augment may stack past its limit within one run
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardSpellValidator;

impl SpellValidator for StandardSpellValidator {
    fn validate(&self, spell: &Spell, registry: &SpellRegistry) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if spell.is_empty() {
            errors.push(ValidationError::EmptySpell);
            return errors;
        }

        if !registry.contains_cast_method(spell.cast_method) {
            errors.push(ValidationError::UnknownCastMethod(spell.cast_method));
        }

        // The augment run accumulating towards the next effect.
        let mut run: Vec<(usize, Augment)> = Vec::new();

        for (index, part) in spell.parts().iter().enumerate() {
            match *part {
                SpellPart::Augment(augment) => {
                    if let Some(limit) = augment.stack_limit() {
                        let copies = run.iter().filter(|&&(_, a)| a == augment).count();
                        if copies >= usize::from(limit) {
                            errors.push(ValidationError::AugmentLimit {
                                index,
                                augment,
                                limit,
                            });
                        }
                    }
                    run.push((index, augment));
                }
                SpellPart::Effect(id) => {
                    match registry.effect(id) {
                        None => errors.push(ValidationError::UnknownEffect { index, id }),
                        Some(effect) => {
                            for &(aug_index, augment) in &run {
                                if !effect.accepts_augment(augment) {
                                    errors.push(ValidationError::IncompatibleAugment {
                                        index: aug_index,
                                        augment,
                                        effect: id,
                                    });
                                }
                            }
                        }
                    }
                    run.clear();
                }
            }
        }

        for (index, augment) in run {
            errors.push(ValidationError::DanglingAugment { index, augment });
        }

        errors
    }
}
