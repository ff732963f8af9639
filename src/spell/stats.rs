//! Per-effect stat snapshots.
//!
//! Right before an effect resolves, the resolver folds the effect's
//! preceding augment run (plus the caster's item augments) into a
//! `SpellStats` snapshot. Effects read the snapshot; they never see the
//! raw augment parts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::part::Augment;

/// The folded modifiers one effect resolves with.
///
/// Built with the `with_*` methods, then handed to the effect read-only:
///
/// ```
/// use glyphcast::spell::{Augment, SpellStats};
///
/// let stats = SpellStats::new()
///     .with_augment(Augment::Amplify)
///     .with_augment(Augment::Amplify)
///     .with_augment(Augment::Dampen);
///
/// assert_eq!(stats.amplification(), 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellStats {
    amplification: f64,
    duration_modifier: f64,
    sensitive: bool,
    augments: SmallVec<[Augment; 4]>,
}

impl SpellStats {
    /// Empty stats: no augments applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one augment in (builder pattern).
    #[must_use]
    pub fn with_augment(mut self, augment: Augment) -> Self {
        match augment {
            Augment::Amplify => self.amplification += 1.0,
            Augment::Dampen => self.amplification -= 1.0,
            Augment::ExtendTime => self.duration_modifier += 1.0,
            Augment::DurationDown => self.duration_modifier -= 1.0,
            Augment::Sensitive => self.sensitive = true,
        }
        self.augments.push(augment);
        self
    }

    /// Fold a run of augments in, in order (builder pattern).
    #[must_use]
    pub fn with_augments(mut self, augments: &[Augment]) -> Self {
        for &augment in augments {
            self = self.with_augment(augment);
        }
        self
    }

    /// Net amplification: +1 per Amplify, -1 per Dampen.
    #[must_use]
    pub fn amplification(&self) -> f64 {
        self.amplification
    }

    /// Net duration modifier: +1 per Extend Time, -1 per Duration Down.
    #[must_use]
    pub fn duration_modifier(&self) -> f64 {
        self.duration_modifier
    }

    /// Check if the effect resolves target-sensitively.
    #[must_use]
    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Every augment folded into this snapshot, in application order.
    #[must_use]
    pub fn augments(&self) -> &[Augment] {
        &self.augments
    }

    /// How many copies of one augment were folded in.
    #[must_use]
    pub fn count(&self, augment: Augment) -> usize {
        self.augments.iter().filter(|&&a| a == augment).count()
    }
}
